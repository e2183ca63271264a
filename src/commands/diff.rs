//! Diff command handler
//!
//! Shows how the generated files differ from those installed on the host.

use anyhow::Result;

use django_deploy::application::{ArtifactChange, ArtifactDiff};
use django_deploy::presentation::cli::ProjectArgs;
use django_deploy::presentation::factory;

use crate::ui::components::diff::colorize_unified_diff;
use crate::ui::{json, terminal};

pub fn cmd_diff(args: &ProjectArgs, json: bool) -> Result<()> {
    let (_, spec) = super::load_project(args, json)?;
    let diffs = factory::create_diff_use_case().execute(&spec);

    if json {
        for diff in &diffs {
            json::emit(diff_json(diff))?;
        }
        return Ok(());
    }

    let caps = terminal::detect_capabilities();
    for diff in &diffs {
        match &diff.change {
            ArtifactChange::Create => {
                println!("{} {}: not installed", diff.kind.label(), diff.path.display())
            }
            ArtifactChange::Unchanged => {
                println!("{} {}: up to date", diff.kind.label(), diff.path.display())
            }
            ArtifactChange::Update { unified } => {
                println!("{} {}: differs", diff.kind.label(), diff.path.display());
                print!("{}", colorize_unified_diff(unified, caps.supports_color));
            }
            ArtifactChange::Unreadable { reason } => println!(
                "{} {}: cannot read ({})",
                diff.kind.label(),
                diff.path.display(),
                reason
            ),
        }
    }

    let changed = diffs.iter().filter(|d| d.has_changes()).count();
    println!("\n{} of {} files differ", changed, diffs.len());
    Ok(())
}

fn diff_json(diff: &ArtifactDiff) -> serde_json::Value {
    let (change, detail) = match &diff.change {
        ArtifactChange::Create => ("create", None),
        ArtifactChange::Unchanged => ("unchanged", None),
        ArtifactChange::Update { unified } => ("update", Some(unified.clone())),
        ArtifactChange::Unreadable { reason } => ("unreadable", Some(reason.clone())),
    };
    serde_json::json!({
        "event": "diff",
        "kind": diff.kind.label(),
        "path": diff.path.display().to_string(),
        "change": change,
        "detail": detail,
    })
}
