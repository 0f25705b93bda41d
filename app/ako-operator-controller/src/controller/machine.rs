use std::sync::Arc;

use ako_operator_core::resources::{
    crd::capi::{Cluster, Machine},
    labels::ClusterLabels,
};
use futures::StreamExt;
use kube::{
    runtime::{reflector::ObjectRef, reflector::Store, watcher::Config, Controller},
    Api, Client, ResourceExt,
};
use log::{debug, info, warn};

use super::reconciler::{
    context::ReconcilerContext,
    machine::{reconcile_machine, reconcile_machine_error},
};

pub async fn start_machine_controller(client: Client, context: Arc<ReconcilerContext>) {
    info!("Creating machine controller...");

    let (machine_api, cluster_api) = match &context.config.watch_namespace {
        Some(namespace) => {
            info!("Watching machines in namespace '{namespace}'");
            (
                Api::<Machine>::namespaced(client.clone(), namespace),
                Api::<Cluster>::namespaced(client, namespace),
            )
        }
        None => {
            info!("Watching machines in all namespaces");
            (Api::<Machine>::all(client.clone()), Api::<Cluster>::all(client))
        }
    };

    let watcher_config = Config::default();
    let controller = Controller::new(machine_api, watcher_config.clone());
    let machines = controller.store();

    let controller = controller
        .watches(cluster_api, watcher_config, move |cluster| {
            machines_for_cluster(&machines, &cluster)
        })
        .shutdown_on_signal()
        .run(reconcile_machine, reconcile_machine_error, context)
        .for_each(|machine| async move {
            match machine {
                Ok((object, _)) => debug!("Reconciled machine {object}"),
                Err(e) => warn!("Machine reconciliation failed: {e}"),
            }
        });

    info!("Machine controller created!");

    controller.await
}

/// Machines from the cache that belong to the given cluster.
fn machines_for_cluster(machines: &Store<Machine>, cluster: &Cluster) -> Vec<ObjectRef<Machine>> {
    let cluster_name = cluster.name_any();
    let namespace = cluster.namespace();

    machines
        .state()
        .into_iter()
        .filter(|machine| {
            machine.namespace() == namespace
                && machine.owning_cluster_name() == Some(cluster_name.as_str())
        })
        .map(|machine| ObjectRef::from_obj(&*machine))
        .collect()
}
