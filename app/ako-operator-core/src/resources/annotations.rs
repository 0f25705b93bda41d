use std::collections::BTreeMap;

use crate::OPERATOR_NAME;

/// Machines carrying any annotation under this prefix are held in the
/// pre-terminate phase by Cluster API until the annotation is gone.
pub const PRE_TERMINATE_HOOK_PREFIX: &str = "pre-terminate.delete.hook.machine.cluster.x-k8s.io";

pub fn pre_terminate_hook_annotation() -> String {
    format!("{PRE_TERMINATE_HOOK_PREFIX}/avi-cleanup")
}

pub fn pre_terminate_hook_value() -> &'static str {
    OPERATOR_NAME
}

pub trait AnnotationsExt {
    fn has_annotation(&self, key: &str) -> bool;
    fn has_annotation_with_prefix(&self, prefix: &str) -> bool;
    fn set_annotation(&mut self, key: impl Into<String>, value: impl Into<String>);
    fn remove_annotation(&mut self, key: &str) -> Option<String>;
}

impl AnnotationsExt for BTreeMap<String, String> {
    fn has_annotation(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    // matches the key itself as well as any "<prefix>/<name>" key
    fn has_annotation_with_prefix(&self, prefix: &str) -> bool {
        self.keys().any(|key| {
            key.strip_prefix(prefix)
                .map_or(false, |rest| rest.is_empty() || rest.starts_with('/'))
        })
    }

    fn set_annotation(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key.into(), value.into());
    }

    fn remove_annotation(&mut self, key: &str) -> Option<String> {
        self.remove(key)
    }
}
