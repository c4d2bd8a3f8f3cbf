use config::{Config, File};
use serde::Deserialize;
use signage_error::SignageResult;
use std::{ops::Deref, sync::Arc};

use crate::screen::ScreenId;

/// Application settings, shared cheaply across workers.
///
/// Loaded from an optional TOML file plus `SIGNAGE__`-prefixed environment
/// overrides (`SIGNAGE__WEB__PORT=8080`, `SIGNAGE__AUTH__ADMIN_PASSWORD=...`).
/// The extension allow-lists accept comma-separated env values.
#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    pub fn new(config_path: &str) -> SignageResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SIGNAGE")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("upload.allowed_image_exts")
                    .with_list_parse_key("upload.allowed_video_exts")
                    .with_list_parse_key("general.create_dirs"),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }

    /// Directories ensured to exist at startup: the configured extra list
    /// plus everything the store, uploader and generator write under,
    /// including the five per-display output directories.
    pub fn startup_dirs(&self) -> Vec<String> {
        let mut dirs = self.general.create_dirs.clone();
        dirs.push(self.upload.dir.clone());
        dirs.push(self.screens.config_dir.clone());
        for id in ScreenId::all() {
            dirs.push(format!("{}/{}", self.screens.output_dir, id.slug()));
        }
        dirs
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub auth: Auth,
    #[serde(default)]
    pub upload: Upload,
    #[serde(default)]
    pub screens: Screens,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct General {
    /// Extra directories created at startup, beyond the derived ones.
    #[serde(default)]
    pub create_dirs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    /// Actix worker count; 0 selects the actix default (one per core).
    #[serde(default)]
    pub workers: usize,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            host: Web::host_default(),
            port: Web::port_default(),
            workers: 0,
        }
    }
}

impl Web {
    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn port_default() -> u16 {
        5000
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Auth {
    /// Shared admin password. An empty value refuses every login rather
    /// than opening the panel up.
    #[serde(default)]
    pub admin_password: String,
    /// Key material for signing session cookies.
    #[serde(default)]
    pub session_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Upload {
    #[serde(default = "Upload::dir_default")]
    pub dir: String,
    #[serde(default = "Upload::max_bytes_default")]
    pub max_bytes: usize,
    #[serde(default = "Upload::image_exts_default")]
    pub allowed_image_exts: Vec<String>,
    #[serde(default = "Upload::video_exts_default")]
    pub allowed_video_exts: Vec<String>,
}

impl Default for Upload {
    fn default() -> Self {
        Upload {
            dir: Upload::dir_default(),
            max_bytes: Upload::max_bytes_default(),
            allowed_image_exts: Upload::image_exts_default(),
            allowed_video_exts: Upload::video_exts_default(),
        }
    }
}

impl Upload {
    fn dir_default() -> String {
        "static/uploads".into()
    }

    fn max_bytes_default() -> usize {
        50 * 1024 * 1024
    }

    fn image_exts_default() -> Vec<String> {
        ["jpg", "jpeg", "png", "gif", "webp"]
            .map(String::from)
            .to_vec()
    }

    fn video_exts_default() -> Vec<String> {
        ["mp4", "webm", "ogg", "mov"].map(String::from).to_vec()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Screens {
    /// Directory holding the per-display JSON records.
    #[serde(default = "Screens::config_dir_default")]
    pub config_dir: String,
    /// Directory holding the per-display generated page directories.
    #[serde(default = "Screens::output_dir_default")]
    pub output_dir: String,
}

impl Default for Screens {
    fn default() -> Self {
        Screens {
            config_dir: Screens::config_dir_default(),
            output_dir: Screens::output_dir_default(),
        }
    }
}

impl Screens {
    fn config_dir_default() -> String {
        "data/config".into()
    }

    fn output_dir_default() -> String {
        "data/screens".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let settings = Settings::new("does-not-exist").unwrap();
        assert_eq!(settings.web.port, 5000);
        assert_eq!(settings.upload.max_bytes, 50 * 1024 * 1024);
        assert!(settings
            .upload
            .allowed_image_exts
            .iter()
            .any(|e| e == "jpg"));
        assert!(settings.auth.admin_password.is_empty());
    }

    #[test]
    fn startup_dirs_cover_all_screens() {
        let settings = Settings::new("does-not-exist").unwrap();
        let dirs = settings.startup_dirs();
        assert!(dirs.contains(&"static/uploads".to_string()));
        assert!(dirs.contains(&"data/config".to_string()));
        for id in 1..=5 {
            assert!(dirs.contains(&format!("data/screens/pantalla{id}")));
        }
    }
}
