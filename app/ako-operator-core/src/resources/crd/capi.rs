//! Minimal Cluster API types, only covering the fields this operator reads.
//! Unknown fields are ignored on deserialization and never written back,
//! since machines are only ever merge-patched.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[kube(
    group = "cluster.x-k8s.io",
    version = "v1alpha3",
    kind = "Machine",
    namespaced
)]
#[serde(rename_all = "camelCase", default)]
pub struct MachineSpec {
    /// name of the owning cluster
    pub cluster_name: String,
}

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[kube(
    group = "cluster.x-k8s.io",
    version = "v1alpha3",
    kind = "Cluster",
    namespaced
)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterSpec {}

#[cfg(test)]
mod tests {
    use kube::ResourceExt;

    use super::{Cluster, Machine};

    #[test]
    fn reads_machines_and_clusters_with_unknown_fields() {
        let machine: Machine = serde_yaml::from_str(
            r#"
apiVersion: cluster.x-k8s.io/v1alpha3
kind: Machine
metadata:
  name: workload-md-0-abc12
  namespace: default
  annotations:
    pre-terminate.delete.hook.machine.cluster.x-k8s.io/avi-cleanup: ako-operator
spec:
  clusterName: workload
  version: v1.21.2
  providerID: vsphere://4203e1f5
  bootstrap:
    dataSecretName: workload-md-0-abc12
"#,
        )
        .unwrap();

        assert_eq!(machine.spec.cluster_name, "workload");
        assert_eq!(machine.annotations().len(), 1);

        let cluster: Cluster = serde_yaml::from_str(
            r#"
apiVersion: cluster.x-k8s.io/v1alpha3
kind: Cluster
metadata:
  name: workload
  namespace: default
  finalizers:
    - ako-operator.network.tkg.tanzu.vmware.com
spec:
  paused: false
  clusterNetwork:
    pods:
      cidrBlocks: ["100.96.0.0/11"]
"#,
        )
        .unwrap();

        assert_eq!(cluster.finalizers().len(), 1);
    }
}
