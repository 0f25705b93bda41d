use std::collections::BTreeMap;

use kube::ResourceExt;

use crate::OPERATOR_NAME;

/// Set by Cluster API on every machine, holds the owning cluster's name.
pub const CLUSTER_NAME_LABEL: &str = "cluster.x-k8s.io/cluster-name";
/// Marks a cluster as having AVI load balancing enabled.
pub const AVI_CLUSTER_LABEL: &str = "cluster-service.network.tkg.tanzu.vmware.com/avi";

pub fn get_ako_labels(management_cluster_name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("app.kubernetes.io/name".to_owned(), "load-balancer-and-ingress-service".to_owned()),
        ("app.kubernetes.io/managed-by".to_owned(), OPERATOR_NAME.to_owned()),
        (
            "networking.tkg.tanzu.vmware.com/management-cluster".to_owned(),
            management_cluster_name.to_owned(),
        ),
    ])
}

pub trait ClusterLabels {
    fn owning_cluster_name(&self) -> Option<&str>;
    fn has_avi_enabled(&self) -> bool;
}

impl<K: ResourceExt> ClusterLabels for K {
    fn owning_cluster_name(&self) -> Option<&str> {
        self.labels().get(CLUSTER_NAME_LABEL).map(String::as_str)
    }

    fn has_avi_enabled(&self) -> bool {
        self.labels().contains_key(AVI_CLUSTER_LABEL)
    }
}
