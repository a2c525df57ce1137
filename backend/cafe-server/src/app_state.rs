use crate::Metrics;

use cafe_config::ValidationConfig;
use cafe_core::Language;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub validation: ValidationConfig,
    /// Used when a request carries no `lang`
    pub default_language: Language,
    pub metrics: Metrics,
    /// None when no Prometheus recorder is installed (tests)
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            validation: ValidationConfig::default(),
            default_language: Language::default(),
            metrics: Metrics::new(),
            prometheus: None,
        }
    }
}
