//! Command handlers
//!
//! Each handler loads the layered configuration for the project, builds the
//! deployment spec and hands it to a use case.

pub mod deploy;
pub mod diff;
pub mod render;
pub mod status;

use anyhow::{Context, Result};
use crossterm::style::Stylize;

use django_deploy::config::{Config, ConfigWarning};
use django_deploy::domain::entities::DeploymentSpec;
use django_deploy::presentation::cli::ProjectArgs;
use django_deploy::presentation::factory;

use crate::ui::{json, terminal, theme};

/// Resolve the project directory, load configuration and build the spec
pub(crate) fn load_project(args: &ProjectArgs, json: bool) -> Result<(Config, DeploymentSpec)> {
    let project = std::fs::canonicalize(&args.project)
        .with_context(|| format!("project directory not found: {}", args.project.display()))?;

    let (config, warnings) = factory::load_config(&project, args.config.as_deref())?;
    report_warnings(&warnings, json);

    let spec = config.deployment_spec(&project, &args.overrides())?;
    tracing::debug!(
        deploy_id = %spec.deploy_id(),
        source = %spec.source_dir().display(),
        "deployment spec built"
    );
    Ok((config, spec))
}

fn report_warnings(warnings: &[ConfigWarning], json: bool) {
    for warning in warnings {
        if json {
            let _ = json::emit(serde_json::json!({
                "event": "config_warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }));
            continue;
        }

        let caps = terminal::detect_capabilities();
        let icon = if caps.supports_unicode {
            theme::icons::WARNING
        } else {
            theme::icons_ascii::WARNING
        };
        let icon = if caps.supports_color {
            format!("{}", icon.with(theme::colors::WARNING))
        } else {
            icon.to_string()
        };
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => eprintln!(
                "{} unknown key '{}' in {} (did you mean '{}'?)",
                icon, warning.key, location, suggestion
            ),
            None => eprintln!("{} unknown key '{}' in {}", icon, warning.key, location),
        }
    }
}
