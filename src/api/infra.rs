use super::cli::RosterArgs;
use crate::config::{AppConfig, PortalConfig};
use crate::error::AppError;
use crate::portal::PortalService;
use crate::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Applies a `--roster` flag on top of the environment configuration.
pub(crate) fn portal_config(config: &AppConfig, roster: RosterArgs) -> PortalConfig {
    let mut portal = config.portal.clone();
    if let Some(path) = roster.roster {
        portal.roster_csv = Some(path);
    }
    portal
}

/// Shared setup for the one-shot commands.
pub(crate) fn load_cli_portal(roster: RosterArgs) -> Result<PortalService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_cli(&config.telemetry)?;
    let portal = portal_config(&config, roster);
    Ok(PortalService::from_config(&portal)?)
}
