use signage_error::SignageResult;
use signage_models::{ScreenConfig, ScreenId, ScreenSummary};
use std::{io::ErrorKind, path::PathBuf};
use tokio::fs;
use tracing::debug;

/// Per-display configuration storage: one JSON document per display under a
/// fixed directory, read and written wholesale.
///
/// There is no locking. Concurrent saves to the same id race and the last
/// completed write wins, which is acceptable for a single-admin panel.
#[derive(Debug, Clone)]
pub struct ScreenStore {
    config_dir: PathBuf,
}

impl ScreenStore {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        ScreenStore {
            config_dir: config_dir.into(),
        }
    }

    /// Path of the JSON record for a display, e.g. `<dir>/pantalla3.json`.
    pub fn record_path(&self, id: ScreenId) -> PathBuf {
        self.config_dir.join(format!("{}.json", id.slug()))
    }

    /// Load a display's record, defaulting to an empty one when no file has
    /// been saved yet. I/O and parse errors on an existing file propagate.
    pub async fn load(&self, id: ScreenId) -> SignageResult<ScreenConfig> {
        let path = self.record_path(id);
        match fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ScreenConfig::empty(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite a display's record wholesale.
    pub async fn save(&self, id: ScreenId, config: &ScreenConfig) -> SignageResult<()> {
        let path = self.record_path(id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(config)?;
        fs::write(&path, json).await?;
        debug!(screen = %id, path = %path.display(), "screen config saved");
        Ok(())
    }

    /// Summaries for all five displays, in id order. Always exactly five
    /// entries regardless of which records exist on disk.
    pub async fn summaries(&self) -> SignageResult<Vec<ScreenSummary>> {
        let mut out = Vec::with_capacity(signage_models::constants::SCREEN_COUNT);
        for id in ScreenId::all() {
            let config = self.load(id).await?;
            out.push(ScreenSummary::from_config(id, &config));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> (tempfile::TempDir, ScreenStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ScreenStore::new(dir.path().join("config"));
        (dir, store)
    }

    #[tokio::test]
    async fn load_defaults_when_never_saved() {
        let (_dir, store) = store();
        for id in ScreenId::all() {
            let cfg = store.load(id).await.unwrap();
            assert_eq!(cfg, ScreenConfig::empty(id));
            assert!(cfg.slides().is_empty());
        }
    }

    #[tokio::test]
    async fn save_load_round_trip() {
        let (_dir, store) = store();
        let id = ScreenId::new(2u8).unwrap();
        let cfg: ScreenConfig = serde_json::from_value(json!({
            "screen_id": 2,
            "slides": [
                {"url": "/static/uploads/a.jpg", "type": "image", "duration": 5},
                {"url": "/static/uploads/b.mp4", "type": "video"}
            ],
            "marquee_enabled": true,
            "marquee_text": "ticker",
            "custom": {"nested": [1, 2, 3]}
        }))
        .unwrap();

        store.save(id, &cfg).await.unwrap();
        assert_eq!(store.load(id).await.unwrap(), cfg);
    }

    #[tokio::test]
    async fn save_overwrites_wholesale() {
        let (_dir, store) = store();
        let id = ScreenId::new(1u8).unwrap();

        let first = ScreenConfig::from(json!({
            "slides": [{"url": "/x.png", "type": "image"}]
        }));
        store.save(id, &first).await.unwrap();

        let second = ScreenConfig::empty(id);
        store.save(id, &second).await.unwrap();
        assert_eq!(store.load(id).await.unwrap(), second);
    }

    #[tokio::test]
    async fn arbitrary_documents_round_trip() {
        let (_dir, store) = store();
        let id = ScreenId::new(4u8).unwrap();
        for doc in [
            json!({"marquee_enabled": "yes", "slides": {"not": "a list"}}),
            json!(["bare", "array"]),
            json!("scalar"),
        ] {
            let cfg = ScreenConfig::from(doc);
            store.save(id, &cfg).await.unwrap();
            assert_eq!(store.load(id).await.unwrap(), cfg);
        }
    }

    #[tokio::test]
    async fn summaries_always_five() {
        let (_dir, store) = store();
        let id = ScreenId::new(3u8).unwrap();
        let cfg = ScreenConfig::from(json!({
            "screen_id": 3,
            "slides": [{"url": "/x.png", "type": "image"}]
        }));
        store.save(id, &cfg).await.unwrap();

        let summaries = store.summaries().await.unwrap();
        assert_eq!(summaries.len(), 5);
        assert_eq!(summaries[2].id, 3);
        assert_eq!(summaries[2].name, "Pantalla 3");
        assert!(summaries[2].has_content);
        assert!(!summaries[0].has_content);
    }

    #[tokio::test]
    async fn corrupt_record_propagates_error() {
        let (_dir, store) = store();
        let id = ScreenId::new(5u8).unwrap();
        let path = store.record_path(id);
        fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        fs::write(&path, b"{not json").await.unwrap();
        assert!(store.load(id).await.is_err());
    }
}
