//! Scenario: running the deployment again for the same identifier.

use std::fs;

use django_deploy::domain::ports::HostCommand;
use django_deploy::domain::services::MaterializeOutcome;
use django_deploy::domain::value_objects::ServingMode;
use django_deploy::infrastructure::LocalFs;
use django_deploy::{DeployError, DeployOptions, DeployUseCase};

use crate::common::*;

fn options() -> DeployOptions {
    DeployOptions::new().with_assume_yes(true).with_smoke_check(false)
}

#[test]
fn scenario_rerun_without_fresh_aborts_without_touching_the_host() {
    let fixture = HostFixture::new();
    let spec = fixture.spec(ServingMode::Asgi);
    let use_case = DeployUseCase::new(LocalFs::new(), RecordingRunner::new(), FakeEnvironment::root());
    use_case.execute(&spec, &options()).unwrap();

    let service = fixture.path("etc/systemd/system/demo_django_asgi.service");
    fs::write(&service, "# edited by hand\n").unwrap();
    use_case.runner().clear();

    let err = use_case.execute(&spec, &options()).unwrap_err();

    assert!(matches!(err, DeployError::AlreadyDeployed { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("current name: demo"));
    assert_eq!(fs::read_to_string(&service).unwrap(), "# edited by hand\n");
    assert!(use_case.runner().commands().is_empty());
}

#[test]
fn scenario_fresh_rerun_replaces_artifacts_and_linked_project() {
    let fixture = HostFixture::new();
    let spec = fixture.spec(ServingMode::Asgi);
    let use_case = DeployUseCase::new(LocalFs::new(), RecordingRunner::new(), FakeEnvironment::root());
    use_case
        .execute(&spec, &options().with_dry_run(true))
        .unwrap();
    assert!(fixture.serving_dir().is_symlink());

    let service = fixture.path("etc/systemd/system/demo_django_asgi.service");
    fs::write(&service, "# stale\n").unwrap();

    let report = use_case.execute(&spec, &options().with_fresh(true)).unwrap();

    assert_eq!(report.removed.len(), 4);
    assert_eq!(report.materialized, Some(MaterializeOutcome::Replaced));
    assert!(fs::read_to_string(&service).unwrap().contains("[Service]"));
    let serving = fixture.serving_dir();
    assert!(!serving.is_symlink());
    assert!(serving.join("manage.py").is_file());
    assert!(fixture.source().join("manage.py").is_file());
}

#[test]
fn scenario_fresh_rerun_never_deletes_a_copied_directory() {
    let fixture = HostFixture::new();
    let spec = fixture.spec(ServingMode::Asgi);
    let use_case = DeployUseCase::new(LocalFs::new(), RecordingRunner::new(), FakeEnvironment::root());
    use_case.execute(&spec, &options()).unwrap();

    let marker = fixture.serving_dir().join("media/upload.png");
    fs::create_dir_all(marker.parent().unwrap()).unwrap();
    fs::write(&marker, "png").unwrap();
    use_case.runner().clear();

    let err = use_case.execute(&spec, &options().with_fresh(true)).unwrap_err();

    assert!(matches!(err, DeployError::MaterializeRefused { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(marker.is_file());
    assert_eq!(use_case.runner().commands(), [HostCommand::ReloadSupervisor]);
}

#[test]
fn scenario_dry_run_rerun_keeps_existing_project() {
    let fixture = HostFixture::new();
    let spec = fixture.spec(ServingMode::Asgi);
    let use_case = DeployUseCase::new(LocalFs::new(), RecordingRunner::new(), FakeEnvironment::root());
    use_case.execute(&spec, &options()).unwrap();

    let report = use_case
        .execute(&spec, &options().with_fresh(true).with_dry_run(true))
        .unwrap();

    assert_eq!(report.materialized, Some(MaterializeOutcome::AlreadyPresent));
    assert!(!fixture.serving_dir().is_symlink());
}
