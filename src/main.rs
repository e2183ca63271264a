//! django-deploy CLI
//!
//! Usage: django-deploy <COMMAND>
//!
//! Commands:
//!   deploy  Install units and vhost, place the project and start serving it
//!   render  Print the generated files without touching the host
//!   status  Show what a deploy would find and do
//!   diff    Compare generated files with the installed ones

use std::env;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use django_deploy::presentation::cli::{Cli, Commands};

mod commands;
mod ui;

/// Overrides `-v` and `RUST_LOG` when set
const LOG_ENV: &str = "DJANGO_DEPLOY_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(ui::error::exit_code(&err));
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Deploy(args) => commands::deploy::cmd_deploy(args, cli.json),
        Commands::Render(args) => commands::render::cmd_render(args, cli.json),
        Commands::Status(args) => commands::status::cmd_status(args, cli.json),
        Commands::Diff(args) => commands::diff::cmd_diff(args, cli.json),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) => {
            let mut filter = EnvFilter::from_default_env();
            if env::var("RUST_LOG").is_err() {
                if let Ok(directive) = format!("django_deploy={}", level_for(verbose)).parse() {
                    filter = filter.add_directive(directive);
                }
            }
            filter
        }
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
