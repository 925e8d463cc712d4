use std::sync::Arc;

use psora_export::error::ExportError;
use psora_export::render::{load_template, DEFAULT_REPORT_TEMPLATE};
use psora_export::styles::DocumentStyles;

use crate::config::ApiConfig;

/// Shared application state, injected into all route handlers via Axum state.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub report_template: Arc<String>,
    pub styles: Arc<DocumentStyles>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            report_template: Arc::new(DEFAULT_REPORT_TEMPLATE.to_string()),
            styles: Arc::new(DocumentStyles::default()),
        }
    }
}

impl AppState {
    pub fn from_config(config: &ApiConfig) -> Result<Self, ExportError> {
        let Some(path) = &config.report_template else {
            return Ok(Self::default());
        };
        let template = load_template(path)?;
        tracing::info!(path = %path.display(), "loaded report template");
        Ok(Self {
            report_template: Arc::new(template),
            ..Self::default()
        })
    }
}
