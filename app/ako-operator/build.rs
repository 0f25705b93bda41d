use std::{
    fs::{create_dir_all, write},
    path::{Path, PathBuf},
};

use kube::CustomResourceExt;
use serde::Serialize;

const CRD_OUTPUT: &str = "../../crd";

fn main() {
    println!("cargo:rerun-if-changed=../ako-operator-core/src/resources/crd");

    export_v1alpha1_crds(Path::new(CRD_OUTPUT));
}

fn export_v1alpha1_crds(path: &Path) {
    use ako_operator_core::resources::crd::v1alpha1::akodeploymentconfig::AKODeploymentConfig;

    let version_path = path.join("v1alpha1");

    create_dir_all(&version_path).unwrap();
    write_serialized(
        &AKODeploymentConfig::crd(),
        &get_crd_path(&version_path, AKODeploymentConfig::crd_name()),
    );
}

fn write_serialized<T: Serialize>(obj: &T, path: &Path) {
    write(path, serde_yaml::to_string(obj).unwrap()).unwrap();
}

fn get_crd_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.yaml"))
}
