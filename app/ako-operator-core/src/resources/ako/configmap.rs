use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::ConfigMap;

use super::generate_metadata;

pub const VALUES_CONFIGMAP_NAME: &str = "ako-values";
pub const VALUES_KEY: &str = "values.yaml";

pub fn generate_values_configmap(management_cluster_name: &str, values: String) -> ConfigMap {
    ConfigMap {
        metadata: generate_metadata(management_cluster_name, VALUES_CONFIGMAP_NAME),
        data: Some(BTreeMap::from([(VALUES_KEY.to_owned(), values)])),
        ..Default::default()
    }
}
