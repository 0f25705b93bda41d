use serde::Serialize;

use crate::{
    ip::FieldCidr,
    resources::{
        crd::v1alpha1::akodeploymentconfig::{AKODeploymentConfigSpec, NodeNetwork},
        ManifestRenderError,
    },
};

/// Values document consumed by the AKO chart, every field maps directly onto
/// a field of the deployment config.
#[derive(Debug, Serialize)]
pub struct AkoValues<'a> {
    #[serde(rename = "AKOSettings")]
    pub ako_settings: AkoSettings<'a>,
    #[serde(rename = "NetworkSettings")]
    pub network_settings: NetworkSettings<'a>,
    #[serde(rename = "L7Settings")]
    pub l7_settings: L7Settings<'a>,
    #[serde(rename = "ControllerSettings")]
    pub controller_settings: ControllerSettings<'a>,
    pub rbac: RbacSettings<'a>,
    pub image: ImageSettings<'a>,
    #[serde(rename = "persistentVolumeClaim")]
    pub persistent_volume_claim: &'a str,
    #[serde(rename = "mountPath")]
    pub mount_path: &'a str,
    #[serde(rename = "logFile")]
    pub log_file: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AkoSettings<'a> {
    pub cluster_name: &'a str,
    pub disable_static_route_sync: bool,
}

#[derive(Debug, Serialize)]
pub struct NetworkSettings<'a> {
    #[serde(rename = "networkName")]
    pub network_name: &'a str,
    #[serde(rename = "subnetIP")]
    pub subnet_ip: String,
    #[serde(rename = "subnetPrefix")]
    pub subnet_prefix: u8,
    #[serde(rename = "nodeNetworkList")]
    pub node_network_list: Vec<NodeNetworkValues<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeNetworkValues<'a> {
    pub network_name: &'a str,
    pub cidrs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct L7Settings<'a> {
    #[serde(rename = "disableIngressClass")]
    pub disable_ingress_class: bool,
    #[serde(rename = "defaultIngController")]
    pub default_ing_controller: bool,
    #[serde(rename = "serviceType")]
    pub service_type: &'a str,
    #[serde(rename = "shardVSSize")]
    pub shard_vs_size: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerSettings<'a> {
    pub service_engine_group_name: &'a str,
    pub cloud_name: &'a str,
    pub controller_host: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RbacSettings<'a> {
    pub psp_enabled: bool,
    pub psp_policy_api_version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSettings<'a> {
    pub repository: &'a str,
    pub pull_policy: &'a str,
    pub version: &'a str,
}

impl<'a> AkoValues<'a> {
    pub fn from_config(
        config: &'a AKODeploymentConfigSpec,
        management_cluster_name: &'a str,
    ) -> Result<Self, ManifestRenderError> {
        let extra = &config.extra_configs;
        let data_cidr = FieldCidr::parse("spec.dataNetwork.cidr", &config.data_network.cidr)?;

        Ok(Self {
            ako_settings: AkoSettings {
                cluster_name: management_cluster_name,
                disable_static_route_sync: extra.disable_static_route_sync,
            },
            network_settings: NetworkSettings {
                network_name: &config.data_network.name,
                subnet_ip: data_cidr.address().to_string(),
                subnet_prefix: data_cidr.prefix_len(),
                node_network_list: node_network_values(&extra.ingress.node_network_list)?,
            },
            l7_settings: L7Settings {
                disable_ingress_class: extra.ingress.disable_ingress_class,
                default_ing_controller: extra.ingress.default_ingress_controller,
                service_type: &extra.ingress.service_type,
                shard_vs_size: &extra.ingress.shard_vs_size,
            },
            controller_settings: ControllerSettings {
                service_engine_group_name: &config.service_engine_group,
                cloud_name: &config.cloud_name,
                controller_host: &config.controller,
            },
            rbac: RbacSettings {
                psp_enabled: extra.rbac.psp_enabled,
                psp_policy_api_version: &extra.rbac.psp_policy_api_version,
            },
            image: ImageSettings {
                repository: &extra.image.repository,
                pull_policy: &extra.image.pull_policy,
                version: &extra.image.version,
            },
            persistent_volume_claim: &extra.log.persistent_volume_claim,
            mount_path: &extra.log.mount_path,
            log_file: &extra.log.log_file,
        })
    }
}

fn node_network_values<'a>(
    networks: &'a [NodeNetwork],
) -> Result<Vec<NodeNetworkValues<'a>>, ManifestRenderError> {
    networks
        .iter()
        .enumerate()
        .map(|(network_index, network)| -> Result<NodeNetworkValues<'a>, ManifestRenderError> {
            let cidrs = network
                .cidrs
                .iter()
                .enumerate()
                .map(|(cidr_index, raw)| {
                    FieldCidr::parse(
                        format!(
                            "spec.extraConfigs.ingress.nodeNetworkList[{network_index}].cidrs[{cidr_index}]"
                        ),
                        raw,
                    )
                    .map(|cidr| cidr.to_string())
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(NodeNetworkValues {
                network_name: &network.network_name,
                cidrs,
            })
        })
        .collect()
}
