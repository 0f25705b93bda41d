use kube::ResourceExt;

/// Put on AVI-enabled clusters by the cluster controller, removed once the
/// AVI side of the cluster has been cleaned up.
pub const CLUSTER_FINALIZER: &str = "ako-operator.network.tkg.tanzu.vmware.com";

pub trait Finalizers {
    fn has_finalizer(&self, finalizer: &str) -> bool;
    fn is_being_deleted(&self) -> bool;
}

impl<K: ResourceExt> Finalizers for K {
    fn has_finalizer(&self, finalizer: &str) -> bool {
        self.finalizers().iter().any(|f| f == finalizer)
    }

    fn is_being_deleted(&self) -> bool {
        self.meta().deletion_timestamp.is_some()
    }
}
