//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Precheck (privilege, supervisor root, project check, confirmation)
//! 2. Render the three artifacts (pure)
//! 3. Inspect the host and resolve conflicts
//! 4. Remove previous artifacts on a fresh run, then install
//! 5. Materialize the project at the serving path
//! 6. Activate the unit and the proxy
//!
//! Each stage runs only if the previous one succeeded. Nothing is rolled
//! back on failure.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{DeploymentSpec, RenderedArtifactSet};
use crate::domain::ports::{
    CommandRunner, DeployEvent, DeployEventSink, EntryKind, FileSystem, HostCommand,
    HostEnvironment, NoopEventSink,
};
use crate::domain::services::{inspect, render, resolve, Resolution};
use crate::error::{DeployError, DeployResult};

use super::activate::activate;
use super::install::{install, remove_previous};
use super::materialize::materialize;
use super::options::DeployOptions;
use super::result::DeployReport;

/// Deploy use case - orchestrates one deployment
///
/// Parameterized by its capabilities so tests can drive it with in-memory
/// fakes.
pub struct DeployUseCase<FS, CR, ENV>
where
    FS: FileSystem,
    CR: CommandRunner,
    ENV: HostEnvironment,
{
    file_system: FS,
    runner: CR,
    environment: ENV,
}

impl<FS, CR, ENV> DeployUseCase<FS, CR, ENV>
where
    FS: FileSystem,
    CR: CommandRunner,
    ENV: HostEnvironment,
{
    pub fn new(file_system: FS, runner: CR, environment: ENV) -> Self {
        Self {
            file_system,
            runner,
            environment,
        }
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    pub fn runner(&self) -> &CR {
        &self.runner
    }

    /// Execute the deploy use case
    pub fn execute(
        &self,
        spec: &DeploymentSpec,
        options: &DeployOptions,
    ) -> DeployResult<DeployReport> {
        self.execute_with_events(spec, options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        spec: &DeploymentSpec,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployResult<DeployReport> {
        event_sink.on_event(DeployEvent::Started {
            deploy_id: spec.deploy_id().to_string(),
            mode: spec.mode(),
            source: spec.source_dir().to_path_buf(),
            fresh: options.fresh,
            dry_run: options.dry_run,
        });

        if !self.precheck(spec, options, &event_sink)? {
            info!("deployment declined by operator");
            event_sink.on_event(DeployEvent::Declined);
            return Ok(DeployReport::declined(spec));
        }

        self.reconcile(spec, options, event_sink)
    }

    /// Run the pipeline from rendering onwards, skipping the precheck.
    pub fn reconcile(
        &self,
        spec: &DeploymentSpec,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployResult<DeployReport> {
        let artifacts = render(spec);
        let mut report = DeployReport::new(spec);

        let state = inspect(&self.file_system, spec, &artifacts, options.integrity);
        let resolution = resolve(&state, options.fresh);
        info!(%resolution, deploy_id = %spec.deploy_id(), "resolved conflicts");
        event_sink.on_event(DeployEvent::Resolved { resolution });

        match resolution {
            Resolution::Abort => {
                return Err(DeployError::AlreadyDeployed {
                    deploy_id: spec.deploy_id().to_string(),
                    path: first_existing(&self.file_system, &artifacts),
                });
            }
            Resolution::RemoveThenProceed => {
                report.removed = remove_previous(&self.file_system, &artifacts, &event_sink)?;
            }
            Resolution::Proceed => {}
        }

        report.written = install(&self.file_system, &self.runner, &artifacts, &event_sink)?;

        let outcome = materialize(
            &self.file_system,
            &self.runner,
            spec,
            &state,
            options,
            &event_sink,
        )?;
        report.materialized = Some(outcome);

        report.smoke_check = activate(&self.runner, spec, options.smoke_check, &event_sink)?;

        event_sink.on_event(DeployEvent::Completed {
            unit: report.unit.clone(),
            url: report.url.clone(),
        });
        Ok(report)
    }

    /// Returns `Ok(false)` when the operator declines.
    fn precheck(
        &self,
        spec: &DeploymentSpec,
        options: &DeployOptions,
        event_sink: &Arc<dyn DeployEventSink>,
    ) -> DeployResult<bool> {
        if !self.environment.has_elevated_access() {
            return Err(DeployError::InsufficientPrivilege);
        }

        let config_root = &spec.layout().systemd_dir;
        match self.file_system.entry_kind(config_root) {
            EntryKind::Directory | EntryKind::Symlink => {}
            kind => {
                debug!(path = %config_root.display(), %kind, "supervisor root unusable");
                return Err(DeployError::MissingConfigRoot {
                    path: config_root.clone(),
                });
            }
        }

        match &options.check_command {
            Some(argv) => {
                let mut argv = argv.clone();
                argv.push("--fail-level".to_string());
                argv.push(options.fail_level.to_string());
                let command = HostCommand::Check {
                    argv,
                    cwd: spec.source_dir().to_path_buf(),
                };
                self.runner
                    .run(&command)
                    .map_err(DeployError::CheckFailed)?;
            }
            None => debug!(fail_level = %options.fail_level, "no pre-deployment check configured"),
        }

        event_sink.on_event(DeployEvent::PrecheckPassed {
            config_root: config_root.clone(),
        });

        if options.assume_yes {
            return Ok(true);
        }
        let prompt = format!(
            "Deploy {} as {} on {}?",
            spec.app_name(),
            spec.service_name(),
            spec.url()
        );
        Ok(self.environment.confirm(&prompt))
    }
}

/// The first guarded artifact found on disk, reported in the abort message
fn first_existing<FS: FileSystem + ?Sized>(
    fs: &FS,
    artifacts: &RenderedArtifactSet,
) -> std::path::PathBuf {
    let guarded = artifacts.guarded_paths();
    guarded
        .iter()
        .find(|p| fs.exists(p))
        .unwrap_or(&guarded[0])
        .to_path_buf()
}
