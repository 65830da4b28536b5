use crs_engine::scoring::{CrsScoringService, ScoringConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn scoring_service(config: ScoringConfig) -> Arc<CrsScoringService> {
    Arc::new(CrsScoringService::new(config))
}
