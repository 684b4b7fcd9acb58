use std::sync::Arc;

use haze_core::storage::Storage;

use crate::config::AppConfig;
use crate::email::Mailer;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    pub storage: Storage,
    pub config: AppConfig,
    /// `None` when SMTP is not configured; inquiry notifications are
    /// skipped in that case.
    pub mailer: Option<Mailer>,
}

impl AppState {
    pub fn new(storage: Storage, config: AppConfig, mailer: Option<Mailer>) -> Self {
        Self {
            inner: Arc::new(InnerState {
                storage,
                config,
                mailer,
            }),
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.inner.storage
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn mailer(&self) -> Option<&Mailer> {
        self.inner.mailer.as_ref()
    }
}
