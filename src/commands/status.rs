//! Status command handler

use anyhow::Result;
use crossterm::style::Stylize;

use django_deploy::application::StatusReport;
use django_deploy::presentation::cli::StatusArgs;
use django_deploy::presentation::factory;

use crate::ui::{json, terminal, theme};

pub fn cmd_status(args: &StatusArgs, json: bool) -> Result<()> {
    let (config, spec) = super::load_project(&args.project, json)?;
    let report =
        factory::create_status_use_case().execute(&spec, config.integrity(), args.dry_run);

    if json {
        json::emit(status_json(&report))?;
    } else {
        let caps = terminal::detect_capabilities();
        print!(
            "{}",
            render_status(&report, caps.supports_color, caps.supports_unicode)
        );
    }
    Ok(())
}

fn status_json(report: &StatusReport) -> serde_json::Value {
    let artifacts: Vec<_> = report
        .artifacts
        .iter()
        .map(|a| {
            serde_json::json!({
                "kind": a.kind.label(),
                "path": a.path.display().to_string(),
                "exists": a.exists,
            })
        })
        .collect();

    serde_json::json!({
        "event": "status",
        "deploy_id": report.deploy_id,
        "unit": report.unit,
        "deployed": report.is_deployed(),
        "artifacts": artifacts,
        "serving_dir": report.serving_dir.display().to_string(),
        "serving_entry": report.state.serving_entry.to_string(),
        "project_matches": report.state.project_matches,
        "resolution": report.resolution.to_string(),
        "fresh_resolution": report.fresh_resolution.to_string(),
        "materialize": report.plan.to_string(),
        "fresh_materialize": report.fresh_plan.to_string(),
    })
}

pub(crate) fn render_status(
    report: &StatusReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Deployment {} ({})\n", report.deploy_id, report.unit));

    for artifact in &report.artifacts {
        let (icon, color) = match (artifact.exists, supports_unicode) {
            (true, true) => (theme::icons::SUCCESS, theme::colors::SUCCESS),
            (true, false) => (theme::icons_ascii::SUCCESS, theme::colors::SUCCESS),
            (false, true) => (theme::icons::PENDING, theme::colors::DIM),
            (false, false) => (theme::icons_ascii::PENDING, theme::colors::DIM),
        };
        let icon = if supports_color {
            format!("{}", icon.with(color))
        } else {
            icon.to_string()
        };
        out.push_str(&format!(
            "  {} {:<14} {}\n",
            icon,
            artifact.kind.label(),
            artifact.path.display()
        ));
    }

    out.push_str(&format!(
        "  project: {} ({}, {})\n",
        report.serving_dir.display(),
        report.state.serving_entry,
        if report.state.project_matches {
            "matches source"
        } else {
            "does not match source"
        }
    ));
    out.push_str(&format!(
        "deploy:         {}, project {}\n",
        report.resolution, report.plan
    ));
    out.push_str(&format!(
        "deploy --fresh: {}, project {}\n",
        report.fresh_resolution, report.fresh_plan
    ));
    out
}
