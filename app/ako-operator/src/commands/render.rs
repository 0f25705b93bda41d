use std::{
    fs::{read_to_string, write},
    io::{stdout, Write},
    path::Path,
};

use ako_operator_core::resources::{
    ako::{AkoReleaseBuilder, AviCredentials},
    crd::v1alpha1::akodeploymentconfig::{AKODeploymentConfig, AKODeploymentConfigSpec},
};
use anyhow::{anyhow, Context};
use log::{debug, info};
use serde_yaml::Value;

use crate::cli::RenderArgs;

pub fn render(args: RenderArgs) -> anyhow::Result<()> {
    let config = read_config(&args.config)?;

    let mut release = AkoReleaseBuilder::default();
    release
        .config(config)
        .management_cluster_name(args.management_cluster_name.as_str());

    if let Some(credentials) = &args.credentials {
        release.credentials(read_credentials(credentials)?);
    }

    let manifest = release
        .build()
        .context("Couldn't prepare the AKO release!")?
        .render()
        .context("Couldn't render the AKO manifest!")?;

    match &args.output {
        Some(path) => {
            write(path, &manifest)
                .with_context(|| format!("Couldn't write the manifest to {}!", path.display()))?;
            info!("AKO manifest written to {}", path.display());
        }
        None => stdout()
            .write_all(&manifest)
            .context("Couldn't write the manifest to stdout!")?,
    }

    Ok(())
}

fn read_config(path: &Path) -> anyhow::Result<AKODeploymentConfigSpec> {
    let raw = read_to_string(path)
        .with_context(|| format!("Couldn't read the config from {}!", path.display()))?;

    parse_config(&raw).with_context(|| format!("Invalid config in {}!", path.display()))
}

fn read_credentials(path: &Path) -> anyhow::Result<AviCredentials> {
    let raw = read_to_string(path)
        .with_context(|| format!("Couldn't read the credentials from {}!", path.display()))?;

    serde_yaml::from_str(&raw)
        .with_context(|| format!("Invalid credentials in {}!", path.display()))
}

/// Accepts either a full AKODeploymentConfig resource or a bare spec.
fn parse_config(raw: &str) -> anyhow::Result<AKODeploymentConfigSpec> {
    let document: Value = serde_yaml::from_str(raw)?;

    match document.get("kind").and_then(Value::as_str) {
        Some("AKODeploymentConfig") => {
            let config: AKODeploymentConfig = serde_yaml::from_value(document)?;
            debug!(
                "Rendering from AKODeploymentConfig '{}'",
                config.metadata.name.as_deref().unwrap_or_default()
            );

            Ok(config.spec)
        }
        Some(kind) => Err(anyhow!("Expected an AKODeploymentConfig, got a {kind}!")),
        None => Ok(serde_yaml::from_value(document)?),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_config;

    const SPEC: &str = r#"
cloudName: test-cloud
controller: 10.23.122.1
serviceEngineGroup: Default-SEG
dataNetwork:
  name: test-akdc
  cidr: 10.0.0.0/24
"#;

    #[test]
    fn parses_bare_spec() {
        let config = parse_config(SPEC).unwrap();

        assert_eq!(config.cloud_name, "test-cloud");
        assert_eq!(config.data_network.cidr, "10.0.0.0/24");
        assert!(config.extra_configs.ingress.node_network_list.is_empty());
    }

    #[test]
    fn parses_full_resource() {
        let resource = format!(
            "apiVersion: networking.tkg.tanzu.vmware.com/v1alpha1\nkind: AKODeploymentConfig\nmetadata:\n  name: install-ako\nspec:{}",
            SPEC.lines()
                .map(|line| format!("  {line}\n"))
                .collect::<String>()
        );

        let config = parse_config(&resource).unwrap();

        assert_eq!(config.controller, "10.23.122.1");
        assert_eq!(config.service_engine_group, "Default-SEG");
    }

    #[test]
    fn rejects_other_kinds() {
        let result = parse_config("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: test\n");

        assert!(result.is_err());
    }
}
