pub mod config;
pub mod helpers;
pub mod ip;
pub mod kubernetes;
pub mod resources;

pub const OPERATOR_NAME: &str = "ako-operator";
