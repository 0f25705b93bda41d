pub mod capi;
pub mod v1alpha1;
