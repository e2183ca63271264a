//! Temporary host and project fixtures.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use django_deploy::domain::entities::DeploymentSpec;
use django_deploy::domain::ports::{
    CommandFailure, CommandResult, CommandRunner, HostCommand, HostEnvironment,
};
use django_deploy::domain::value_objects::{HostLayout, ServingMode};

pub const MANAGE_PY: &str = "#!/usr/bin/env python\nimport django\n";
pub const SETTINGS_PY: &str = "DEBUG = False\nALLOWED_HOSTS = ['demo.localhost']\n";

/// A host root with an existing systemd configuration directory and a
/// small Django project named `demo`.
pub struct HostFixture {
    pub host: TempDir,
    pub projects: TempDir,
}

impl HostFixture {
    pub fn new() -> Self {
        let host = tempfile::tempdir().unwrap();
        let projects = tempfile::tempdir().unwrap();

        fs::create_dir_all(host.path().join("etc/systemd/system")).unwrap();
        fs::create_dir_all(host.path().join("etc/nginx")).unwrap();

        let source = projects.path().join("demo");
        fs::create_dir_all(source.join("demo")).unwrap();
        fs::write(source.join("manage.py"), MANAGE_PY).unwrap();
        fs::write(source.join("demo/settings.py"), SETTINGS_PY).unwrap();

        Self { host, projects }
    }

    /// Host with no supervisor configuration root
    pub fn without_systemd() -> Self {
        let fixture = Self::new();
        fs::remove_dir_all(fixture.host.path().join("etc/systemd")).unwrap();
        fixture
    }

    pub fn layout(&self) -> HostLayout {
        HostLayout::rooted_at(self.host.path())
    }

    pub fn source(&self) -> PathBuf {
        self.projects.path().join("demo")
    }

    pub fn spec(&self, mode: ServingMode) -> DeploymentSpec {
        DeploymentSpec::builder("demo", self.source())
            .with_mode(mode)
            .with_layout(self.layout())
            .build()
            .unwrap()
    }

    pub fn serving_dir(&self) -> PathBuf {
        self.layout().www_dir.join("demo")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.host.path().join(relative)
    }
}

/// Records every command; links and copies really happen.
#[derive(Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<HostCommand>>,
    fail_on: Option<fn(&HostCommand) -> bool>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(predicate: fn(&HostCommand) -> bool) -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            fail_on: Some(predicate),
        }
    }

    pub fn commands(&self) -> Vec<HostCommand> {
        self.commands.borrow().clone()
    }

    pub fn clear(&self) {
        self.commands.borrow_mut().clear();
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &HostCommand) -> CommandResult {
        self.commands.borrow_mut().push(command.clone());
        if self.fail_on.is_some_and(|f| f(command)) {
            return Err(CommandFailure::new(command.to_string(), Some(1), "rejected"));
        }
        match command {
            HostCommand::Link { source, target } => {
                std::os::unix::fs::symlink(source, target)
                    .map_err(|e| CommandFailure::spawn(command.to_string(), &e))?;
            }
            HostCommand::Copy { source, target } => {
                copy_tree(source, target)
                    .map_err(|e| CommandFailure::spawn(command.to_string(), &e))?;
            }
            _ => {}
        }
        Ok(())
    }
}

fn copy_tree(source: &Path, target: &Path) -> std::io::Result<()> {
    fs::create_dir_all(target)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let dest = target.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), dest)?;
        }
    }
    Ok(())
}

pub struct FakeEnvironment {
    pub root: bool,
    pub answer: bool,
}

impl FakeEnvironment {
    pub fn root() -> Self {
        Self {
            root: true,
            answer: true,
        }
    }

    pub fn unprivileged() -> Self {
        Self {
            root: false,
            answer: true,
        }
    }
}

impl HostEnvironment for FakeEnvironment {
    fn has_elevated_access(&self) -> bool {
        self.root
    }

    fn confirm(&self, _prompt: &str) -> bool {
        self.answer
    }
}
