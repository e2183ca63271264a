//! Scenario: deploying a project on a host that has never seen it.

use std::fs;

use django_deploy::domain::ports::HostCommand;
use django_deploy::domain::services::MaterializeOutcome;
use django_deploy::domain::value_objects::ServingMode;
use django_deploy::infrastructure::LocalFs;
use django_deploy::{DeployOptions, DeployUseCase};

use crate::common::*;

#[test]
fn scenario_first_deploy_copies_project_and_starts_serving() {
    let fixture = HostFixture::new();
    let spec = fixture.spec(ServingMode::Asgi);
    let use_case = DeployUseCase::new(LocalFs::new(), RecordingRunner::new(), FakeEnvironment::root());

    let report = use_case
        .execute(&spec, &DeployOptions::new().with_assume_yes(true))
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.unit, "demo_django_asgi");
    assert_eq!(report.materialized, Some(MaterializeOutcome::Copied));
    assert_eq!(report.written.len(), 4);
    assert_eq!(report.smoke_check, Some(true));

    let service = fixture.path("etc/systemd/system/demo_django_asgi.service");
    let socket = fixture.path("etc/systemd/system/demo_django_asgi.socket");
    let available = fixture.path("etc/nginx/sites-available/demo_django_asgi");
    let enabled = fixture.path("etc/nginx/sites-enabled/demo_django_asgi");
    for path in [&service, &socket, &available, &enabled] {
        assert!(path.is_file(), "{} should be installed", path.display());
    }
    assert_eq!(
        fs::read_to_string(&available).unwrap(),
        fs::read_to_string(&enabled).unwrap()
    );

    let socket_path = fixture.path("run/demo_django_asgi.sock");
    let socket_ref = socket_path.display().to_string();
    assert!(fs::read_to_string(&service).unwrap().contains(&socket_ref));
    assert!(fs::read_to_string(&socket).unwrap().contains(&socket_ref));
    assert!(fs::read_to_string(&available).unwrap().contains(&socket_ref));

    let serving = fixture.serving_dir();
    assert!(!serving.is_symlink());
    assert_eq!(fs::read_to_string(serving.join("manage.py")).unwrap(), MANAGE_PY);
    assert_eq!(
        fs::read_to_string(serving.join("demo/settings.py")).unwrap(),
        SETTINGS_PY
    );

    let commands = use_case.runner().commands();
    assert_eq!(commands[0], HostCommand::ReloadSupervisor);
    assert!(matches!(commands[1], HostCommand::Copy { .. }));
    assert_eq!(
        commands[2..],
        [
            HostCommand::StartUnit {
                unit: "demo_django_asgi".to_string()
            },
            HostCommand::ValidateProxy,
            HostCommand::ReloadProxy,
            HostCommand::OpenBrowser {
                url: "http://demo.localhost".to_string()
            },
        ]
    );
}

#[test]
fn scenario_dry_run_links_instead_of_copying() {
    let fixture = HostFixture::new();
    let spec = fixture.spec(ServingMode::Wsgi);
    let use_case = DeployUseCase::new(LocalFs::new(), RecordingRunner::new(), FakeEnvironment::root());

    let report = use_case
        .execute(
            &spec,
            &DeployOptions::new()
                .with_assume_yes(true)
                .with_dry_run(true)
                .with_smoke_check(false),
        )
        .unwrap();

    assert_eq!(report.materialized, Some(MaterializeOutcome::Linked));
    assert_eq!(report.smoke_check, None);

    let serving = fixture.serving_dir();
    assert!(serving.is_symlink());
    assert_eq!(fs::read_link(&serving).unwrap(), fixture.source());

    let commands = use_case.runner().commands();
    assert!(!commands.iter().any(|c| matches!(c, HostCommand::Copy { .. })));
    assert!(!commands.iter().any(|c| matches!(c, HostCommand::OpenBrowser { .. })));
}

#[test]
fn scenario_both_modes_coexist_and_share_the_project() {
    let fixture = HostFixture::new();
    let use_case = DeployUseCase::new(LocalFs::new(), RecordingRunner::new(), FakeEnvironment::root());
    let options = DeployOptions::new().with_assume_yes(true).with_smoke_check(false);

    let first = use_case.execute(&fixture.spec(ServingMode::Wsgi), &options).unwrap();
    let second = use_case.execute(&fixture.spec(ServingMode::Asgi), &options).unwrap();

    assert_eq!(first.materialized, Some(MaterializeOutcome::Copied));
    assert_eq!(second.materialized, Some(MaterializeOutcome::AlreadyPresent));
    assert!(fixture.path("etc/systemd/system/demo_django_wsgi.service").is_file());
    assert!(fixture.path("etc/systemd/system/demo_django_asgi.service").is_file());
}
