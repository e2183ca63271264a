//! Scenario: external systems rejecting the deployment.

use django_deploy::domain::ports::HostCommand;
use django_deploy::domain::value_objects::ServingMode;
use django_deploy::infrastructure::LocalFs;
use django_deploy::{DeployError, DeployOptions, DeployUseCase};

use crate::common::*;

fn options() -> DeployOptions {
    DeployOptions::new().with_assume_yes(true).with_smoke_check(false)
}

#[test]
fn scenario_proxy_validation_failure_leaves_unit_started() {
    let fixture = HostFixture::new();
    let spec = fixture.spec(ServingMode::Asgi);
    let runner = RecordingRunner::failing_on(|c| matches!(c, HostCommand::ValidateProxy));
    let use_case = DeployUseCase::new(LocalFs::new(), runner, FakeEnvironment::root());

    let err = use_case.execute(&spec, &options()).unwrap_err();

    assert!(matches!(err, DeployError::Proxy { .. }));
    assert_eq!(err.exit_code(), 3);
    let commands = use_case.runner().commands();
    assert!(commands.contains(&HostCommand::StartUnit {
        unit: "demo_django_asgi".to_string()
    }));
    assert!(!commands.contains(&HostCommand::ReloadProxy));
    assert!(fixture.serving_dir().join("manage.py").is_file());
}

#[test]
fn scenario_supervisor_reload_failure_stops_before_materializing() {
    let fixture = HostFixture::new();
    let spec = fixture.spec(ServingMode::Wsgi);
    let runner = RecordingRunner::failing_on(|c| matches!(c, HostCommand::ReloadSupervisor));
    let use_case = DeployUseCase::new(LocalFs::new(), runner, FakeEnvironment::root());

    let err = use_case.execute(&spec, &options()).unwrap_err();

    assert_eq!(err.exit_code(), 6);
    assert!(fixture.path("etc/systemd/system/demo_django_wsgi.service").is_file());
    assert!(!fixture.serving_dir().exists());
}

#[test]
fn scenario_unit_start_failure_exits_five() {
    let fixture = HostFixture::new();
    let spec = fixture.spec(ServingMode::Asgi);
    let runner = RecordingRunner::failing_on(|c| matches!(c, HostCommand::StartUnit { .. }));
    let use_case = DeployUseCase::new(LocalFs::new(), runner, FakeEnvironment::root());

    let err = use_case.execute(&spec, &options()).unwrap_err();

    assert_eq!(err.exit_code(), 5);
    assert!(!use_case
        .runner()
        .commands()
        .contains(&HostCommand::ValidateProxy));
}

#[test]
fn scenario_unprivileged_run_changes_nothing() {
    let fixture = HostFixture::new();
    let spec = fixture.spec(ServingMode::Asgi);
    let use_case = DeployUseCase::new(
        LocalFs::new(),
        RecordingRunner::new(),
        FakeEnvironment::unprivileged(),
    );

    let err = use_case.execute(&spec, &options()).unwrap_err();

    assert!(matches!(err, DeployError::InsufficientPrivilege));
    assert!(!fixture.path("etc/systemd/system/demo_django_asgi.service").exists());
    assert!(use_case.runner().commands().is_empty());
}

#[test]
fn scenario_missing_systemd_root_is_a_precheck_failure() {
    let fixture = HostFixture::without_systemd();
    let spec = fixture.spec(ServingMode::Asgi);
    let use_case = DeployUseCase::new(LocalFs::new(), RecordingRunner::new(), FakeEnvironment::root());

    let err = use_case.execute(&spec, &options()).unwrap_err();

    assert!(matches!(err, DeployError::MissingConfigRoot { .. }));
    assert_eq!(err.stage(), "precheck");
}

#[test]
fn scenario_failed_smoke_check_still_succeeds() {
    let fixture = HostFixture::new();
    let spec = fixture.spec(ServingMode::Asgi);
    let runner = RecordingRunner::failing_on(|c| matches!(c, HostCommand::OpenBrowser { .. }));
    let use_case = DeployUseCase::new(LocalFs::new(), runner, FakeEnvironment::root());

    let report = use_case
        .execute(&spec, &DeployOptions::new().with_assume_yes(true))
        .unwrap();

    assert_eq!(report.smoke_check, Some(false));
    assert!(report.is_complete());
}
