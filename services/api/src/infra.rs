use campus_events::catalog::{format::parse_timestamp, UserRole};
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(raw)
        .ok_or_else(|| format!("failed to parse '{raw}' as an ISO-8601 timestamp"))
}

pub(crate) fn parse_role(raw: &str) -> Result<UserRole, String> {
    UserRole::parse(raw)
        .ok_or_else(|| format!("unknown role '{raw}' (expected student, organizer, or admin)"))
}
