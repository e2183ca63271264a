//! Artifact Renderer
//!
//! Pure functions from a [`DeploymentSpec`] to the text of the systemd
//! service unit, the systemd socket unit and the nginx vhost. All three
//! point at the same UNIX socket, `DeploymentSpec::socket_path`.

use crate::domain::entities::{Artifact, ArtifactKind, DeploymentSpec, RenderedArtifactSet};

/// Largest request body nginx forwards to the application
pub const MAX_BODY_SIZE: &str = "10M";

/// User and group the application server runs as
pub const SERVICE_USER: &str = "www-data";

/// Render all artifacts and their target paths
pub fn render(spec: &DeploymentSpec) -> RenderedArtifactSet {
    let layout = spec.layout();
    let name = spec.service_name();

    let service = Artifact::new(
        ArtifactKind::ServiceUnit,
        layout.unit_dir().join(format!("{}.service", name)),
        render_service_unit(spec),
    );
    let socket = Artifact::new(
        ArtifactKind::SocketUnit,
        layout.unit_dir().join(format!("{}.socket", name)),
        render_socket_unit(spec),
    );
    let vhost = Artifact::new(
        ArtifactKind::VhostAvailable,
        layout.sites_available_dir().join(&name),
        render_vhost(spec),
    );

    RenderedArtifactSet::new(service, socket, vhost, layout.sites_enabled_dir().join(&name))
}

/// systemd service unit running gunicorn on the shared socket
pub fn render_service_unit(spec: &DeploymentSpec) -> String {
    let serving_dir = spec.serving_dir();
    let mode = spec.mode();

    let mut exec = vec![
        format!("{}/venv/bin/gunicorn", serving_dir.display()),
        "--access-logfile".to_string(),
        spec.log_path().display().to_string(),
    ];
    exec.extend(mode.worker_args());
    exec.push("--bind".to_string());
    exec.push(format!("unix:{}", spec.socket_path().display()));
    exec.push(format!("{}.{}:application", spec.module(), mode));

    format!(
        "[Unit]
Description=Daemon for {app} {mode} server
Requires={name}.socket
After=network.target

[Service]
User={user}
Group={user}
WorkingDirectory={workdir}
ExecStart={exec}

[Install]
WantedBy=multi-user.target
",
        app = spec.app_name(),
        mode = mode,
        name = spec.service_name(),
        user = SERVICE_USER,
        workdir = serving_dir.display(),
        exec = exec.join(" "),
    )
}

/// systemd socket unit listening on the shared socket
pub fn render_socket_unit(spec: &DeploymentSpec) -> String {
    format!(
        "[Unit]
Description=Gunicorn Socket for {module} Web Server

[Socket]
ListenStream={socket}

[Install]
WantedBy=sockets.target
",
        module = spec.module(),
        socket = spec.socket_path().display(),
    )
}

/// nginx server block for the deployment host.
///
/// The TLS stanza is always emitted and stays commented out unless SSL is
/// enabled, so switching later is a matter of uncommenting four lines.
pub fn render_vhost(spec: &DeploymentSpec) -> String {
    let tls = |line: String| {
        if spec.ssl() {
            format!("    {}", line)
        } else {
            format!("    # {}", line)
        }
    };
    let cert_dir = format!("/etc/letsencrypt/live/{}", spec.host());
    let serving_dir = spec.serving_dir();

    let lines = [
        "server {".to_string(),
        "    listen 80;".to_string(),
        "    listen [::]:80;".to_string(),
        tls("listen 443 ssl;".to_string()),
        tls("listen [::]:443 ssl;".to_string()),
        tls(format!("ssl_certificate {}/fullchain.pem;", cert_dir)),
        tls(format!("ssl_certificate_key {}/privkey.pem;", cert_dir)),
        format!("    server_name {};", spec.host()),
        String::new(),
        "    location = /favicon.ico { access_log off; log_not_found off; }".to_string(),
        "    location /static/ {".to_string(),
        format!("        root {};", serving_dir.display()),
        "    }".to_string(),
        "    location /media/ {".to_string(),
        format!("        root {};", serving_dir.display()),
        "    }".to_string(),
        "    location / {".to_string(),
        "        include proxy_params;".to_string(),
        format!("        proxy_pass http://unix:{};", spec.socket_path().display()),
        format!("        client_max_body_size {};", MAX_BODY_SIZE),
        "    }".to_string(),
        "}".to_string(),
    ];

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
