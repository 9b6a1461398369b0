//! Application state management

use crate::model::Classifier;

use super::ServerConfig;

/// State shared across handlers. Built once in `run_server` before the
/// listener binds and never mutated afterwards, so no locking is needed.
pub struct AppState {
    pub config: ServerConfig,
    pub classifier: Box<dyn Classifier>,
}

impl AppState {
    pub fn new(config: ServerConfig, classifier: Box<dyn Classifier>) -> Self {
        Self { config, classifier }
    }
}
