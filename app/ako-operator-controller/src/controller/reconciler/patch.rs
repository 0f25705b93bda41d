use std::collections::BTreeMap;

use ako_operator_core::{kubernetes::ObjectKey, resources::crd::capi::Machine};
use kube::ResourceExt;
use log::{debug, error, warn};
use serde_json::json;

use super::{error::ReconcilerError, store::ObjectStore};

/// Annotation changes between two snapshots of the same object. Removed keys
/// map to `None` and become `null` in the merge patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationsPatch {
    changes: BTreeMap<String, Option<String>>,
}

impl AnnotationsPatch {
    pub fn between(before: &BTreeMap<String, String>, after: &BTreeMap<String, String>) -> Self {
        let removed = before
            .keys()
            .filter(|key| !after.contains_key(*key))
            .map(|key| (key.to_owned(), None));
        let changed = after
            .iter()
            .filter(|(key, value)| before.get(*key) != Some(*value))
            .map(|(key, value)| (key.to_owned(), Some(value.to_owned())));

        Self {
            changes: removed.chain(changed).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn to_merge_patch(&self) -> serde_json::Value {
        json!({
            "metadata": {
                "annotations": self.changes
            }
        })
    }

    #[cfg(test)]
    pub fn apply(&self, annotations: &mut BTreeMap<String, String>) {
        for (key, value) in &self.changes {
            match value {
                Some(value) => annotations.insert(key.to_owned(), value.to_owned()),
                None => annotations.remove(key),
            };
        }
    }
}

/// Snapshot of a machine's annotations taken before the reconciler touches it.
///
/// `finish` has to be called with the outcome of every reconcile that created
/// the helper: it sends at most one patch with whatever changed in between,
/// and a failed patch replaces the outcome.
pub struct PatchHelper {
    key: ObjectKey,
    before: BTreeMap<String, String>,
}

impl PatchHelper {
    pub fn new(machine: &Machine) -> Result<Self, ReconcilerError> {
        Ok(Self {
            key: ObjectKey::try_from_resource(machine)
                .ok_or(ReconcilerError::MissingObjectMetadata)?,
            before: machine.annotations().to_owned(),
        })
    }

    pub async fn finish<T>(
        self,
        store: &dyn ObjectStore,
        machine: &Machine,
        outcome: Result<T, ReconcilerError>,
    ) -> Result<T, ReconcilerError> {
        let patch = AnnotationsPatch::between(&self.before, machine.annotations());

        if patch.is_empty() {
            return outcome;
        }

        debug!("Patching machine '{}' annotations: {:?}", self.key, patch);

        match store.patch_machine(&self.key, &patch).await {
            Ok(()) => outcome,
            Err(err) => {
                error!("Patching machine '{}' failed: {err}", self.key);

                if let Err(superseded) = &outcome {
                    warn!("Machine '{}' also failed to reconcile: {superseded}", self.key);
                }

                Err(ReconcilerError::PatchCommitError(err))
            }
        }
    }
}
