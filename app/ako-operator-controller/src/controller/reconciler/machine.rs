use std::sync::Arc;

use ako_operator_core::{
    kubernetes::ObjectKey,
    resources::{
        annotations::{
            pre_terminate_hook_annotation, pre_terminate_hook_value, AnnotationsExt,
            PRE_TERMINATE_HOOK_PREFIX,
        },
        crd::capi::{Cluster, Machine},
        finalizers::{Finalizers, CLUSTER_FINALIZER},
        labels::ClusterLabels,
    },
};
use kube::{runtime::controller::Action, ResourceExt};
use log::{debug, info, warn};

use super::{
    context::ReconcilerContext, error::ReconcilerError, patch::PatchHelper, store::ObjectStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// the machine no longer exists
    ResourceGone,
    OutOfScope(OutOfScopeReason),
    /// the cluster is being deleted but AVI resources haven't been cleaned up yet
    AwaitingCleanup,
    HookAdded,
    HookRemoved,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfScopeReason {
    MissingClusterLabel,
    AviDisabled,
}

pub async fn reconcile_machine(
    object: Arc<Machine>,
    context: Arc<ReconcilerContext>,
) -> Result<Action, ReconcilerError> {
    let key = ObjectKey::try_from_resource(&*object)
        .ok_or(ReconcilerError::MissingObjectMetadata)?;

    let outcome = reconcile(context.store.as_ref(), &key).await?;

    debug!("Machine '{key}' reconciled: {outcome:?}");

    // cluster changes are mapped back onto machines by the controller's watch
    Ok(Action::await_change())
}

pub fn reconcile_machine_error(
    object: Arc<Machine>,
    error: &ReconcilerError,
    context: Arc<ReconcilerContext>,
) -> Action {
    warn!(
        "Machine '{}' reconciliation failed, retrying in {}s: {error}",
        object.name_any(),
        context.config.error_requeue.as_secs()
    );

    Action::requeue(context.config.error_requeue)
}

/// Brings the pre-terminate hook of a single machine in line with the state
/// of its cluster. Writes at most one patch.
pub async fn reconcile(
    store: &dyn ObjectStore,
    key: &ObjectKey,
) -> Result<ReconcileOutcome, ReconcilerError> {
    let mut machine = match store
        .get_machine(key)
        .await
        .map_err(ReconcilerError::KubeApiError)?
    {
        Some(machine) => machine,
        None => {
            info!("Machine '{key}' not found, will not reconcile");
            return Ok(ReconcileOutcome::ResourceGone);
        }
    };

    let patch_helper = PatchHelper::new(&machine)?;
    let outcome = reconcile_hook(store, key, &mut machine).await;

    patch_helper.finish(store, &machine, outcome).await
}

async fn reconcile_hook(
    store: &dyn ObjectStore,
    key: &ObjectKey,
    machine: &mut Machine,
) -> Result<ReconcileOutcome, ReconcilerError> {
    let cluster_name = match machine.owning_cluster_name() {
        Some(name) => name.to_owned(),
        None => {
            info!("Machine '{key}' doesn't have a cluster name label, skipping");
            return Ok(ReconcileOutcome::OutOfScope(
                OutOfScopeReason::MissingClusterLabel,
            ));
        }
    };

    let cluster_key = ObjectKey::new(key.namespace.to_owned(), cluster_name);
    let cluster = store
        .get_cluster(&cluster_key)
        .await
        .map_err(ReconcilerError::KubeApiError)?
        .ok_or_else(|| ReconcilerError::MissingOwner(cluster_key.clone()))?;

    if !cluster.has_avi_enabled() {
        info!("Cluster '{cluster_key}' doesn't have AVI enabled, skipping machine '{key}'");
        return Ok(ReconcileOutcome::OutOfScope(OutOfScopeReason::AviDisabled));
    }

    if cluster.is_being_deleted() {
        Ok(reconcile_cluster_delete(key, machine, &cluster))
    } else {
        Ok(reconcile_normal(key, machine))
    }
}

fn reconcile_normal(key: &ObjectKey, machine: &mut Machine) -> ReconcileOutcome {
    let hook = pre_terminate_hook_annotation();

    if machine.annotations().has_annotation(&hook) {
        return ReconcileOutcome::Unchanged;
    }

    info!("Adding pre-terminate hook to machine '{key}'");
    machine
        .annotations_mut()
        .set_annotation(hook, pre_terminate_hook_value());

    ReconcileOutcome::HookAdded
}

fn reconcile_cluster_delete(
    key: &ObjectKey,
    machine: &mut Machine,
    cluster: &Cluster,
) -> ReconcileOutcome {
    if cluster.has_finalizer(CLUSTER_FINALIZER) {
        info!(
            "Cluster of machine '{key}' still has the '{CLUSTER_FINALIZER}' finalizer, waiting for cleanup"
        );
        return ReconcileOutcome::AwaitingCleanup;
    }

    if !machine
        .annotations()
        .has_annotation_with_prefix(PRE_TERMINATE_HOOK_PREFIX)
    {
        return ReconcileOutcome::Unchanged;
    }

    match machine
        .annotations_mut()
        .remove_annotation(&pre_terminate_hook_annotation())
    {
        Some(_) => {
            info!("AVI cleanup finished, removing pre-terminate hook from machine '{key}'");
            ReconcileOutcome::HookRemoved
        }
        None => ReconcileOutcome::Unchanged,
    }
}
