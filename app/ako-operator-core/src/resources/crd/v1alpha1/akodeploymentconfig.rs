use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Describes how the AVI Kubernetes Operator gets deployed onto a cluster.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[kube(
    group = "networking.tkg.tanzu.vmware.com",
    version = "v1alpha1",
    kind = "AKODeploymentConfig",
    shortname = "adc"
)]
#[serde(rename_all = "camelCase")]
pub struct AKODeploymentConfigSpec {
    /// name of the AVI cloud the clusters are placed in
    pub cloud_name: String,
    /// address of the AVI controller
    pub controller: String,
    /// service engine group used for the virtual services
    pub service_engine_group: String,
    /// network the virtual IPs are allocated from
    pub data_network: DataNetwork,
    #[serde(default)]
    pub extra_configs: ExtraConfigs,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataNetwork {
    pub name: String,
    pub cidr: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraConfigs {
    pub image: AKOImageConfig,
    pub rbac: AKORbacConfig,
    pub log: AKOLogConfig,
    pub ingress: AKOIngressConfig,
    /// stop AKO from syncing static routes for the pod networks
    pub disable_static_route_sync: bool,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AKOImageConfig {
    pub repository: String,
    pub pull_policy: String,
    pub version: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AKORbacConfig {
    pub psp_enabled: bool,
    #[serde(rename = "pspPolicyAPIVersion")]
    pub psp_policy_api_version: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AKOLogConfig {
    pub persistent_volume_claim: String,
    pub mount_path: String,
    pub log_file: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AKOIngressConfig {
    pub disable_ingress_class: bool,
    pub default_ingress_controller: bool,
    /// LARGE, MEDIUM or SMALL
    #[serde(rename = "shardVSSize")]
    pub shard_vs_size: String,
    /// NodePort or ClusterIP
    pub service_type: String,
    pub node_network_list: Vec<NodeNetwork>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeNetwork {
    pub network_name: String,
    pub cidrs: Vec<String>,
}
