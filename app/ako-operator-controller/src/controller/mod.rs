use std::sync::Arc;

use ako_operator_core::config::OperatorConfig;
use kube::Client;

use self::{
    machine::start_machine_controller,
    reconciler::{context::ReconcilerContext, store::KubeObjectStore},
};

pub mod machine;
pub mod reconciler;

pub const CONTROLLER_FIELD_MANAGER: &str = "ako-operator-controller";

pub async fn main_controller(client: Client, config: OperatorConfig) {
    let context = ReconcilerContext {
        config,
        store: Box::new(KubeObjectStore::new(client.clone())),
    };

    start_machine_controller(client, Arc::new(context)).await;
}
