//! Shared application state

use std::sync::Arc;

use crate::config::Config;

/// Cheap-to-clone handle threaded into every handler.
///
/// The storage directories live here rather than as process-wide globals so
/// tests can run against isolated temporary directories.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
