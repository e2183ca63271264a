use crossterm::style::Stylize;
use django_deploy::DeployError;

use crate::ui::{json, terminal, theme};

/// Process exit code for an error returned by a command handler
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DeployError>()
        .map(DeployError::exit_code)
        .unwrap_or(1)
}

/// Message plus the chain of causes, one per line
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = if supports_unicode {
        theme::icons::ERROR
    } else {
        theme::icons_ascii::ERROR
    };
    let head = format!("{} {}", icon, err);
    let mut out = if supports_color {
        format!("{}", head.with(theme::colors::ERROR))
    } else {
        head
    };
    out.push('\n');

    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("  caused by: {}\n", cause));
        source = cause.source();
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let stage = err
            .downcast_ref::<DeployError>()
            .map(DeployError::stage)
            .unwrap_or("error");
        let output = serde_json::json!({
            "event": "error",
            "stage": stage,
            "message": format!("{:#}", err),
            "exit_code": exit_code(err),
        });
        let _ = json::emit(output);
        return;
    }

    let caps = terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
