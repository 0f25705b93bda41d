use std::io::{stdout, Write};

use ako_operator_core::resources::crd::v1alpha1::akodeploymentconfig::AKODeploymentConfig;
use anyhow::Context;
use kube::CustomResourceExt;

pub fn print_crd() -> anyhow::Result<()> {
    let crd = serde_yaml::to_string(&AKODeploymentConfig::crd())
        .context("Couldn't serialize the AKODeploymentConfig CRD!")?;

    stdout()
        .write_all(crd.as_bytes())
        .context("Couldn't write the CRD to stdout!")?;

    Ok(())
}
