use signage_models::Settings;
use signage_web::AppState;
use tempfile::TempDir;

pub const TEST_PASSWORD: &str = "panel-secret";

/// Isolated application state backed by a temporary directory tree.
pub struct TestCtx {
    // Held so the directory outlives the test.
    pub _dir: TempDir,
    pub settings: Settings,
    pub state: AppState,
}

pub fn ctx() -> TestCtx {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let toml = format!(
        r#"
[auth]
admin_password = "{TEST_PASSWORD}"
session_secret = "integration-test-secret"

[upload]
dir = "{root}/static/uploads"

[screens]
config_dir = "{root}/data/config"
output_dir = "{root}/data/screens"
"#,
        root = root.display()
    );
    let config_path = root.join("signage.toml");
    std::fs::write(&config_path, toml).unwrap();

    let settings = Settings::new(&config_path.to_string_lossy()).unwrap();
    for d in settings.startup_dirs() {
        std::fs::create_dir_all(d).unwrap();
    }
    let state = AppState::from_settings(settings.clone()).unwrap();

    TestCtx {
        _dir: dir,
        settings,
        state,
    }
}

/// Build a raw multipart body with a single file field.
pub fn multipart_payload(field: &str, filename: &str, data: &[u8]) -> (String, Vec<u8>) {
    let boundary = "----signage-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}
