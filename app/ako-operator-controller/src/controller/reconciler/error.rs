use ako_operator_core::kubernetes::ObjectKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcilerError {
    #[error("Object is missing metadata!")]
    MissingObjectMetadata,
    #[error("Owning cluster '{}' doesn't exist!", .0)]
    MissingOwner(ObjectKey),
    #[error("Couldn't fetch the resource! Reason: {}", .0)]
    KubeApiError(kube::Error),
    #[error("Couldn't patch the resource! Reason: {}", .0)]
    PatchCommitError(kube::Error),
}
