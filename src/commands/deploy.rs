//! Deploy command handler

use std::sync::Arc;

use anyhow::Result;

use django_deploy::application::{DeployOptions, DeployReport};
use django_deploy::domain::ports::DeployEventSink;
use django_deploy::infrastructure::{ConsoleEventSink, JsonEventSink};
use django_deploy::presentation::cli::DeployArgs;
use django_deploy::presentation::factory;

pub fn cmd_deploy(args: &DeployArgs, json: bool) -> Result<()> {
    let (config, spec) = super::load_project(&args.project, json)?;

    let options = DeployOptions::new()
        .with_fresh(args.fresh)
        .with_dry_run(args.dry_run)
        .with_assume_yes(args.yes)
        .with_fail_level(args.fail_level)
        .with_check_command(config.check_command())
        .with_integrity(config.integrity())
        .with_smoke_check(!args.no_browser);

    let sink: Arc<dyn DeployEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout())
    };

    let use_case = factory::create_deploy_use_case(&config);
    let report = use_case.execute_with_events(&spec, &options, sink)?;

    if !json {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &DeployReport) {
    if report.declined {
        println!("Deployment of {} cancelled", report.deploy_id);
        return;
    }
    println!();
    println!("{} is served at {}", report.unit, report.url);
    println!("  project: {}", report.serving_dir.display());
    if !report.removed.is_empty() {
        println!("  replaced {} previous files", report.removed.len());
    }
}
