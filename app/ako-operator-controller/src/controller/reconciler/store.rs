use ako_operator_core::{
    kubernetes::{
        operations::{merge_patch_resource, try_get_resource},
        ObjectKey,
    },
    resources::crd::capi::{Cluster, Machine},
};
use async_trait::async_trait;
use kube::{api::PatchParams, Client};

use crate::controller::CONTROLLER_FIELD_MANAGER;

use super::patch::AnnotationsPatch;

/// Access to the objects the machine reconciler reads and writes.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_machine(&self, key: &ObjectKey) -> kube::Result<Option<Machine>>;
    async fn get_cluster(&self, key: &ObjectKey) -> kube::Result<Option<Cluster>>;
    async fn patch_machine(&self, key: &ObjectKey, patch: &AnnotationsPatch) -> kube::Result<()>;
}

pub struct KubeObjectStore {
    client: Client,
}

impl KubeObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for KubeObjectStore {
    async fn get_machine(&self, key: &ObjectKey) -> kube::Result<Option<Machine>> {
        try_get_resource(&self.client, key).await
    }

    async fn get_cluster(&self, key: &ObjectKey) -> kube::Result<Option<Cluster>> {
        try_get_resource(&self.client, key).await
    }

    async fn patch_machine(&self, key: &ObjectKey, patch: &AnnotationsPatch) -> kube::Result<()> {
        let patch_params = PatchParams {
            field_manager: Some(CONTROLLER_FIELD_MANAGER.to_owned()),
            ..Default::default()
        };

        merge_patch_resource::<Machine, _>(
            &self.client,
            key,
            &patch.to_merge_patch(),
            &patch_params,
        )
        .await?;

        Ok(())
    }
}
