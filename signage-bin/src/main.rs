use clap::Parser;
use signage_common::Logger;
use signage_error::{SignageError, SignageResult};
use signage_models::{constants::DEFAULT_CONFIG_FILE_NAME, ScreenId, Settings};
use signage_web::SignageWebServer;
use std::{env::current_dir, path::PathBuf};
use tracing::info;

/// Signage Panel - control panel for five digital signage displays
///
/// Serves a session-gated admin panel and JSON API for editing per-display
/// slide lists, uploading media and generating static presentation pages,
/// plus public `/pantalla{id}` routes the displays point at.
#[derive(Parser)]
#[command(name = "signage-panel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Signage Panel", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the panel will look for 'signage.toml'
    /// in the current working directory.
    #[arg(short, long, env = "SIGNAGE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> SignageResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| SignageError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let settings = Settings::new(&config_path.to_string_lossy())?;

    let mut logger = Logger::new(None);
    logger.initialize()?;

    // The original deployment expects its directory tree to exist before the
    // first request comes in.
    for dir in settings.startup_dirs() {
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| SignageError::from(format!("Failed to create directory {dir}: {e}")))?;
    }

    let base = format!("http://{}:{}", settings.web.host, settings.web.port);
    info!("Admin panel: {base}/");
    for id in ScreenId::all() {
        info!("{}: {base}{}", id.display_name(), id.public_url());
    }

    SignageWebServer::run(&settings).await
}
