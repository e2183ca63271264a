//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (`--json`, `-v`) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::SpecOverrides;
use crate::domain::value_objects::{FailLevel, ServingMode};

/// django-deploy - one-shot deployment of Django projects behind systemd and nginx
#[derive(Parser, Debug)]
#[command(name = "django-deploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install units and vhost, place the project and start serving it
    Deploy(DeployArgs),

    /// Print the generated unit, socket and vhost without touching the host
    Render(ProjectArgs),

    /// Show what a deploy would find and do on this host
    Status(StatusArgs),

    /// Compare generated files with the ones installed on this host
    Diff(ProjectArgs),
}

/// Where the project is and how it should be served
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Django project directory
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Configuration file (default: <project>/deploy.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Application name (overrides deploy.name)
    #[arg(long)]
    pub name: Option<String>,

    /// Host serving this production server (default: <name>.localhost)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Use wsgi instead of asgi
    #[arg(long, conflicts_with = "asgi")]
    pub wsgi: bool,

    /// Use asgi even if the configuration selects wsgi
    #[arg(long)]
    pub asgi: bool,

    /// Deploy this project with ssl enabled
    #[arg(long)]
    pub ssl: bool,

    /// Access log file (default: /tmp/<id>_django_<mode>)
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn overrides(&self) -> SpecOverrides {
        SpecOverrides {
            name: self.name.clone(),
            host: self.host.clone(),
            mode: if self.wsgi {
                Some(ServingMode::Wsgi)
            } else if self.asgi {
                Some(ServingMode::Asgi)
            } else {
                None
            },
            log: self.log.clone(),
            ssl: self.ssl,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct DeployArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Deploy behind nginx (the only supported proxy, always on)
    #[arg(long)]
    pub nginx: bool,

    /// Message level that makes the pre-deployment check fail
    #[arg(long, value_enum, default_value_t = FailLevel::Error)]
    pub fail_level: FailLevel,

    /// Assume yes and run without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Delete the previous deployment with the same name first
    #[arg(short, long)]
    pub fresh: bool,

    /// Use a symbolic link instead of copying the project
    #[arg(long)]
    pub dry_run: bool,

    /// Do not open the site once it is served
    #[arg(long)]
    pub no_browser: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Plan as if --dry-run were given
    #[arg(long)]
    pub dry_run: bool,
}
