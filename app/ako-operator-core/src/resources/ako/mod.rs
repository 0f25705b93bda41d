use derive_builder::Builder;
use k8s_openapi::api::core::v1::Namespace;
use kube::core::ObjectMeta;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    crd::v1alpha1::akodeploymentconfig::AKODeploymentConfigSpec, labels::get_ako_labels,
    ManifestRenderError,
};

use self::values::AkoValues;

pub mod configmap;
pub mod secret;
pub mod values;

pub const AKO_NAMESPACE: &str = "avi-system";

/// AVI controller credentials, rendered into the credentials secret when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AviCredentials {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_authority_data: Option<String>,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct AkoRelease {
    pub config: AKODeploymentConfigSpec,
    pub management_cluster_name: String,
    #[builder(default, setter(strip_option))]
    pub credentials: Option<AviCredentials>,
}

impl AkoRelease {
    pub fn render(&self) -> Result<Vec<u8>, ManifestRenderError> {
        render_documents(
            &self.config,
            &self.management_cluster_name,
            self.credentials.as_ref(),
        )
    }
}

/// Renders the AKO add-on manifest without credentials.
///
/// The output only depends on the arguments, so rendering the same config
/// twice yields identical bytes. Any malformed CIDR fails the whole render.
pub fn render_manifest(
    config: &AKODeploymentConfigSpec,
    management_cluster_name: &str,
) -> Result<Vec<u8>, ManifestRenderError> {
    render_documents(config, management_cluster_name, None)
}

fn render_documents(
    config: &AKODeploymentConfigSpec,
    management_cluster_name: &str,
    credentials: Option<&AviCredentials>,
) -> Result<Vec<u8>, ManifestRenderError> {
    let values = AkoValues::from_config(config, management_cluster_name)?;
    let values = serde_yaml::to_string(&values)
        .map_err(|err| ManifestRenderError::Serialization("AKO values", err))?;

    let mut manifest = String::new();

    push_document(
        &mut manifest,
        "Namespace",
        &generate_namespace(management_cluster_name),
    )?;
    push_document(
        &mut manifest,
        "ConfigMap",
        &configmap::generate_values_configmap(management_cluster_name, values),
    )?;

    if let Some(credentials) = credentials {
        push_document(
            &mut manifest,
            "Secret",
            &secret::generate_credentials_secret(management_cluster_name, credentials),
        )?;
    }

    debug!(
        "Rendered AKO manifest for '{management_cluster_name}' ({} bytes)",
        manifest.len()
    );

    Ok(manifest.into_bytes())
}

fn push_document<T: Serialize>(
    manifest: &mut String,
    kind: &'static str,
    document: &T,
) -> Result<(), ManifestRenderError> {
    let rendered = serde_yaml::to_string(document)
        .map_err(|err| ManifestRenderError::Serialization(kind, err))?;

    manifest.push_str("---\n");
    manifest.push_str(&rendered);

    Ok(())
}

fn generate_metadata(management_cluster_name: &str, name: &str) -> ObjectMeta {
    ObjectMeta {
        labels: Some(get_ako_labels(management_cluster_name)),
        namespace: Some(AKO_NAMESPACE.to_owned()),
        name: Some(name.to_owned()),
        ..Default::default()
    }
}

fn generate_namespace(management_cluster_name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            labels: Some(get_ako_labels(management_cluster_name)),
            name: Some(AKO_NAMESPACE.to_owned()),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::core::v1::{ConfigMap, Secret};
    use serde::Deserialize;
    use serde_yaml::Value;

    use crate::resources::{
        crd::v1alpha1::akodeploymentconfig::{
            AKODeploymentConfigSpec, AKOImageConfig, AKOIngressConfig, AKOLogConfig,
            AKORbacConfig, DataNetwork, ExtraConfigs, NodeNetwork,
        },
        ManifestRenderError,
    };

    use super::{
        configmap::{VALUES_CONFIGMAP_NAME, VALUES_KEY},
        render_manifest,
        secret::CREDENTIALS_SECRET_NAME,
        AkoReleaseBuilder, AviCredentials,
    };

    fn test_config() -> AKODeploymentConfigSpec {
        AKODeploymentConfigSpec {
            cloud_name: "test-cloud".to_owned(),
            controller: "10.23.122.1".to_owned(),
            service_engine_group: "Default-SEG".to_owned(),
            data_network: DataNetwork {
                name: "test-akdc".to_owned(),
                cidr: "10.0.0.0/24".to_owned(),
            },
            extra_configs: ExtraConfigs {
                image: AKOImageConfig {
                    repository: "test/image".to_owned(),
                    pull_policy: "IfNotPresent".to_owned(),
                    version: "1.3.1".to_owned(),
                },
                rbac: AKORbacConfig {
                    psp_enabled: true,
                    psp_policy_api_version: "test/1.2".to_owned(),
                },
                log: AKOLogConfig {
                    persistent_volume_claim: "true".to_owned(),
                    mount_path: "/var/log".to_owned(),
                    log_file: "test-avi.log".to_owned(),
                },
                ingress: AKOIngressConfig {
                    disable_ingress_class: true,
                    default_ingress_controller: true,
                    shard_vs_size: "MEDIUM".to_owned(),
                    service_type: "NodePort".to_owned(),
                    node_network_list: vec![NodeNetwork {
                        network_name: "test-node-network-1".to_owned(),
                        cidrs: vec!["10.0.0.0/24".to_owned(), "192.168.0.0/24".to_owned()],
                    }],
                },
                disable_static_route_sync: true,
            },
        }
    }

    fn parse_documents(manifest: &[u8]) -> Vec<Value> {
        serde_yaml::Deserializer::from_slice(manifest)
            .map(Value::deserialize)
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    fn parse_values(document: &Value) -> Value {
        let configmap: ConfigMap = serde_yaml::from_value(document.clone()).unwrap();
        let values = configmap.data.unwrap().remove(VALUES_KEY).unwrap();

        serde_yaml::from_str(&values).unwrap()
    }

    #[test]
    fn renders_valid_config() {
        let manifest = render_manifest(&test_config(), "test").unwrap();
        let documents = parse_documents(&manifest);

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["kind"].as_str(), Some("Namespace"));
        assert_eq!(documents[1]["kind"].as_str(), Some("ConfigMap"));
        assert_eq!(
            documents[1]["metadata"]["name"].as_str(),
            Some(VALUES_CONFIGMAP_NAME)
        );
    }

    #[test]
    fn substitutes_every_field() {
        let manifest = render_manifest(&test_config(), "test").unwrap();
        let values = parse_values(&parse_documents(&manifest)[1]);

        assert_eq!(values["AKOSettings"]["clusterName"].as_str(), Some("test"));
        assert_eq!(
            values["AKOSettings"]["disableStaticRouteSync"].as_bool(),
            Some(true)
        );
        assert_eq!(
            values["NetworkSettings"]["networkName"].as_str(),
            Some("test-akdc")
        );
        assert_eq!(
            values["NetworkSettings"]["subnetIP"].as_str(),
            Some("10.0.0.0")
        );
        assert_eq!(values["NetworkSettings"]["subnetPrefix"].as_u64(), Some(24));
        assert_eq!(
            values["NetworkSettings"]["nodeNetworkList"][0]["cidrs"][1].as_str(),
            Some("192.168.0.0/24")
        );
        assert_eq!(
            values["L7Settings"]["defaultIngController"].as_bool(),
            Some(true)
        );
        assert_eq!(values["L7Settings"]["shardVSSize"].as_str(), Some("MEDIUM"));
        assert_eq!(values["L7Settings"]["serviceType"].as_str(), Some("NodePort"));
        assert_eq!(
            values["ControllerSettings"]["controllerHost"].as_str(),
            Some("10.23.122.1")
        );
        assert_eq!(
            values["ControllerSettings"]["serviceEngineGroupName"].as_str(),
            Some("Default-SEG")
        );
        assert_eq!(values["rbac"]["pspEnabled"].as_bool(), Some(true));
        assert_eq!(
            values["rbac"]["pspPolicyApiVersion"].as_str(),
            Some("test/1.2")
        );
        assert_eq!(values["image"]["pullPolicy"].as_str(), Some("IfNotPresent"));
        assert_eq!(values["persistentVolumeClaim"].as_str(), Some("true"));
        assert_eq!(values["logFile"].as_str(), Some("test-avi.log"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = test_config();

        let first = render_manifest(&config, "test").unwrap();
        let second = render_manifest(&config, "test").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_data_network_cidr_fails_until_reverted() {
        let mut config = test_config();
        config.data_network.cidr = "test".to_owned();

        match render_manifest(&config, "test") {
            Err(ManifestRenderError::InvalidCidr(error)) => {
                assert_eq!(error.field, "spec.dataNetwork.cidr");
                assert_eq!(error.value, "test");
            }
            other => panic!("expected a CIDR validation error, got {other:?}"),
        }

        config.data_network.cidr = "10.0.0.0/24".to_owned();
        let manifest = render_manifest(&config, "test").unwrap();

        assert_eq!(parse_documents(&manifest).len(), 2);
    }

    #[test]
    fn invalid_node_network_cidr_names_the_entry() {
        let mut config = test_config();
        config.extra_configs.ingress.node_network_list[0].cidrs[1] = "192.168.0.0".to_owned();

        match render_manifest(&config, "test") {
            Err(ManifestRenderError::InvalidCidr(error)) => assert_eq!(
                error.field,
                "spec.extraConfigs.ingress.nodeNetworkList[0].cidrs[1]"
            ),
            other => panic!("expected a CIDR validation error, got {other:?}"),
        }
    }

    #[test]
    fn release_renders_credentials_secret() {
        let release = AkoReleaseBuilder::default()
            .config(test_config())
            .management_cluster_name("test")
            .credentials(AviCredentials {
                username: "admin".to_owned(),
                password: "secret".to_owned(),
                certificate_authority_data: None,
            })
            .build()
            .unwrap();

        let documents = parse_documents(&release.render().unwrap());
        assert_eq!(documents.len(), 3);

        let secret: Secret = serde_yaml::from_value(documents[2].clone()).unwrap();
        let data = secret.string_data.unwrap();

        assert_eq!(secret.metadata.name.as_deref(), Some(CREDENTIALS_SECRET_NAME));
        assert_eq!(data.get("username").map(String::as_str), Some("admin"));
        assert_eq!(data.get("password").map(String::as_str), Some("secret"));
        assert!(!data.contains_key("certificateAuthorityData"));
    }

    #[test]
    fn release_requires_management_cluster_name() {
        let result = AkoReleaseBuilder::default().config(test_config()).build();

        assert!(result.is_err());
    }
}
