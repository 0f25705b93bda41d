use std::{
    env::{var, VarError},
    num::ParseIntError,
    time::Duration,
};

use thiserror::Error;

pub const WATCH_NAMESPACE_VAR: &str = "AKO_OPERATOR_WATCH_NAMESPACE";
pub const ERROR_REQUEUE_SECS_VAR: &str = "AKO_OPERATOR_ERROR_REQUEUE_SECS";

pub const DEFAULT_ERROR_REQUEUE_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct OperatorConfig {
    /// namespace to watch, all namespaces when unset
    pub watch_namespace: Option<String>,
    pub error_requeue: Duration,
}

#[derive(Debug, Error)]
pub enum FromEnvError {
    #[error("Env var '{}' couldn't be read: {}", .0, .1)]
    VarUnreadable(&'static str, VarError),
    #[error("Env var '{}' is not a valid number of seconds: {}", .0, .1)]
    InvalidSeconds(&'static str, ParseIntError),
}

impl OperatorConfig {
    pub fn from_env() -> Result<Self, FromEnvError> {
        Self::from_lookup(|key| var(key))
    }

    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, VarError>,
    ) -> Result<Self, FromEnvError> {
        let watch_namespace = optional_var(&lookup, WATCH_NAMESPACE_VAR)?
            .filter(|namespace| !namespace.is_empty());

        let error_requeue = match optional_var(&lookup, ERROR_REQUEUE_SECS_VAR)? {
            Some(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .map_err(|err| FromEnvError::InvalidSeconds(ERROR_REQUEUE_SECS_VAR, err))?,
            ),
            None => Duration::from_secs(DEFAULT_ERROR_REQUEUE_SECS),
        };

        Ok(Self {
            watch_namespace,
            error_requeue,
        })
    }
}

fn optional_var(
    lookup: &impl Fn(&'static str) -> Result<String, VarError>,
    key: &'static str,
) -> Result<Option<String>, FromEnvError> {
    match lookup(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(FromEnvError::VarUnreadable(key, err)),
    }
}
