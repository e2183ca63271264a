//! Property tests for artifact rendering.

use proptest::prelude::*;

use django_deploy::domain::entities::DeploymentSpec;
use django_deploy::domain::services::render;
use django_deploy::domain::value_objects::{DeployId, ServingMode};

fn app_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9_-]{0,15}").unwrap()
}

fn host() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9]([A-Za-z0-9-]{0,10}[A-Za-z0-9])?(\\.[A-Za-z]{2,6}){0,2}").unwrap()
}

fn mode() -> impl Strategy<Value = ServingMode> {
    prop_oneof![Just(ServingMode::Wsgi), Just(ServingMode::Asgi)]
}

fn spec(name: &str, host: &str, mode: ServingMode, ssl: bool) -> DeploymentSpec {
    DeploymentSpec::builder(name, "/home/dev/project")
        .with_host(host)
        .with_mode(mode)
        .with_ssl(ssl)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendering the same spec twice yields identical artifacts.
    #[test]
    fn property_render_is_deterministic(
        name in app_name(),
        host in host(),
        mode in mode(),
        ssl in any::<bool>(),
    ) {
        let spec = spec(&name, &host, mode, ssl);
        prop_assert_eq!(render(&spec), render(&spec));
    }

    /// PROPERTY: Unit, socket and vhost all reference the same socket path.
    #[test]
    fn property_artifacts_share_one_socket(
        name in app_name(),
        host in host(),
        mode in mode(),
        ssl in any::<bool>(),
    ) {
        let spec = spec(&name, &host, mode, ssl);
        let rendered = render(&spec);
        let socket = spec.socket_path().display().to_string();

        let service_binds = rendered
            .service()
            .content
            .contains(&format!("--bind unix:{}", socket));
        let socket_listens = rendered
            .socket()
            .content
            .contains(&format!("ListenStream={}", socket));
        let vhost_proxies = rendered
            .vhost()
            .content
            .contains(&format!("proxy_pass http://unix:{};", socket));

        prop_assert!(service_binds, "service does not bind {}", socket);
        prop_assert!(socket_listens, "socket unit does not listen on {}", socket);
        prop_assert!(vhost_proxies, "vhost does not proxy to {}", socket);
    }

    /// PROPERTY: Every artifact path carries the identifier and the mode.
    #[test]
    fn property_paths_are_namespaced_by_identifier(
        name in app_name(),
        mode in mode(),
    ) {
        let spec = spec(&name, "example.com", mode, false);
        let stem = format!("{}_django_{}", name.to_lowercase(), mode);
        let rendered = render(&spec);

        for path in rendered.all_paths() {
            let file = path.file_name().unwrap().to_string_lossy().into_owned();
            prop_assert!(file.starts_with(&stem), "{} does not start with {}", file, stem);
        }
    }

    /// PROPERTY: Only asgi units carry the worker-count flag.
    #[test]
    fn property_worker_count_only_for_asgi(
        name in app_name(),
        mode in mode(),
    ) {
        let rendered = render(&spec(&name, "example.com", mode, false));
        let has_workers = rendered.service().content.contains("--workers");
        prop_assert_eq!(has_workers, mode == ServingMode::Asgi);
    }

    /// PROPERTY: Identifier parsing never panics and always normalizes to
    /// lowercase when it succeeds.
    #[test]
    fn property_deploy_id_parse_never_panics(raw in "(?s).{0,64}") {
        if let Ok(id) = DeployId::parse(&raw) {
            prop_assert_eq!(id.as_str(), id.as_str().to_lowercase());
            prop_assert!(!id.as_str().is_empty());
        }
    }
}
