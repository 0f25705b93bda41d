use std::fmt::{Display, Formatter};

use kube::Resource;

pub mod operations;

/// Name/namespace pair addressing a namespaced object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectKey {
    pub namespace: String,
    pub name: String,
}

impl ObjectKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn try_from_resource<K: Resource>(resource: &K) -> Option<Self> {
        let meta = resource.meta();

        Some(Self::new(meta.namespace.clone()?, meta.name.clone()?))
    }
}

impl Display for ObjectKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use crate::resources::crd::capi::{Machine, MachineSpec};

    use super::ObjectKey;

    #[test]
    fn key_is_built_from_resource_metadata() {
        let mut machine = Machine::new("worker-0", MachineSpec::default());
        assert_eq!(ObjectKey::try_from_resource(&machine), None);

        machine.metadata.namespace = Some("default".to_owned());
        let key = ObjectKey::try_from_resource(&machine).unwrap();

        assert_eq!(key, ObjectKey::new("default", "worker-0"));
        assert_eq!(key.to_string(), "default/worker-0");
    }
}
