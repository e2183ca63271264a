//! Render command handler
//!
//! Prints the generated unit, socket and vhost without touching the host.

use anyhow::Result;

use django_deploy::domain::services::render;
use django_deploy::presentation::cli::ProjectArgs;

use crate::ui::json;

pub fn cmd_render(args: &ProjectArgs, json: bool) -> Result<()> {
    let (_, spec) = super::load_project(args, json)?;
    let rendered = render(&spec);

    if json {
        for artifact in rendered.files() {
            json::emit(serde_json::json!({
                "event": "artifact",
                "kind": artifact.kind.label(),
                "path": artifact.path.display().to_string(),
                "content": artifact.content,
            }))?;
        }
        return Ok(());
    }

    // The enabled vhost is a copy of the available one; print it once.
    for artifact in [rendered.service(), rendered.socket(), rendered.vhost()] {
        println!("# {}", artifact.path.display());
        print!("{}", artifact.content);
        if !artifact.content.ends_with('\n') {
            println!();
        }
        println!();
    }
    println!(
        "# also installed at {}",
        rendered.vhost_enabled_path().display()
    );
    Ok(())
}
