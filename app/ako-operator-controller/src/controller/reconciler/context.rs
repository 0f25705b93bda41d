use ako_operator_core::config::OperatorConfig;

use super::store::ObjectStore;

pub struct ReconcilerContext {
    pub config: OperatorConfig,
    pub store: Box<dyn ObjectStore>,
}
