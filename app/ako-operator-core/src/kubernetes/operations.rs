use std::fmt::Debug;

use k8s_openapi::{
    serde::{de::DeserializeOwned, Serialize},
    NamespaceResourceScope,
};
use kube::{
    api::{Patch, PatchParams},
    Api, Client, Resource,
};
use log::debug;

use crate::helpers::pretty_type_name;

use super::ObjectKey;

pub async fn try_get_resource<T>(client: &Client, key: &ObjectKey) -> kube::Result<Option<T>>
where
    T: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Clone
        + DeserializeOwned
        + Debug,
{
    debug!("Fetching '{key}' {}...", pretty_type_name::<T>());

    let api: Api<T> = Api::namespaced(client.clone(), &key.namespace);

    api.get_opt(&key.name).await
}

pub async fn merge_patch_resource<T, P>(
    client: &Client,
    key: &ObjectKey,
    patch: &P,
    patch_params: &PatchParams,
) -> kube::Result<T>
where
    T: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Clone
        + DeserializeOwned
        + Debug,
    P: Serialize + Debug,
{
    debug!("Patching '{key}' {}: {patch:?}", pretty_type_name::<T>());

    let api: Api<T> = Api::namespaced(client.clone(), &key.namespace);

    api.patch(&key.name, patch_params, &Patch::Merge(patch)).await
}
