//! Service activation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::DeploymentSpec;
use crate::domain::ports::{CommandRunner, DeployEvent, DeployEventSink, HostCommand};
use crate::error::{DeployError, DeployResult, ProxyStage, SupervisorStage};

/// Start the unit, validate and restart the proxy, then the optional smoke
/// check. Returns the smoke check result, `None` when disabled.
pub(super) fn activate<CR: CommandRunner + ?Sized>(
    runner: &CR,
    spec: &DeploymentSpec,
    smoke_check: bool,
    event_sink: &Arc<dyn DeployEventSink>,
) -> DeployResult<Option<bool>> {
    let unit = spec.service_name();
    runner
        .run(&HostCommand::StartUnit { unit: unit.clone() })
        .map_err(|source| DeployError::Supervisor {
            stage: SupervisorStage::Start,
            source,
        })?;
    info!(%unit, "unit started");
    event_sink.on_event(DeployEvent::UnitStarted { unit });

    runner
        .run(&HostCommand::ValidateProxy)
        .map_err(|source| DeployError::Proxy {
            stage: ProxyStage::Validate,
            source,
        })?;
    runner
        .run(&HostCommand::ReloadProxy)
        .map_err(|source| DeployError::Proxy {
            stage: ProxyStage::Reload,
            source,
        })?;
    info!("nginx reloaded");
    event_sink.on_event(DeployEvent::ProxyReloaded);

    if !smoke_check {
        return Ok(None);
    }

    let url = spec.url();
    let ok = match runner.run(&HostCommand::OpenBrowser { url: url.clone() }) {
        Ok(()) => true,
        Err(failure) => {
            warn!("smoke check failed: {}", failure);
            false
        }
    };
    event_sink.on_event(DeployEvent::SmokeChecked { url, ok });
    Ok(Some(ok))
}
