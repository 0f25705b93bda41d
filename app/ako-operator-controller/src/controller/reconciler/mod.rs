pub mod context;
pub mod error;
pub mod machine;
pub mod patch;
pub mod store;
