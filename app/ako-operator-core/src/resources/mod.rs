use thiserror::Error;

use crate::ip::CidrError;

pub mod ako;
pub mod annotations;
pub mod crd;
pub mod finalizers;
pub mod labels;

#[derive(Debug, Error)]
pub enum ManifestRenderError {
    #[error("Invalid network range in '{}': '{}'!", .0.field, .0.value)]
    InvalidCidr(#[from] CidrError),
    #[error("Couldn't serialize the {} document! Reason: {}", .0, .1)]
    Serialization(&'static str, serde_yaml::Error),
}
