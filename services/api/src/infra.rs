use crs_points::assessment::EngineConfig;
use crs_points::PointsEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn shared_engine(config: EngineConfig) -> Arc<PointsEngine> {
    Arc::new(PointsEngine::new(config))
}
