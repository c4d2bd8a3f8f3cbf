use chrono::Local;
use rand::RngCore;
use signage_error::SignageResult;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Media classification derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Stores uploaded media under the public upload directory.
///
/// Accepted extensions come from the two configured allow-lists. Stored names
/// are `<timestamp>_<token>_<sanitized-original>`; the random token makes
/// collisions between same-named uploads within the same second negligible,
/// and the sanitized original name is kept as display metadata.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    image_exts: Vec<String>,
    video_exts: Vec<String>,
}

impl UploadStore {
    pub fn new(
        dir: impl Into<PathBuf>,
        image_exts: Vec<String>,
        video_exts: Vec<String>,
    ) -> Self {
        UploadStore {
            dir: dir.into(),
            image_exts: lowered(image_exts),
            video_exts: lowered(video_exts),
        }
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Classify a filename by extension, case-insensitively. Filenames
    /// without a dot are never accepted.
    pub fn classify(&self, filename: &str) -> Option<MediaKind> {
        let ext = extension(filename)?;
        if self.image_exts.iter().any(|e| *e == ext) {
            Some(MediaKind::Image)
        } else if self.video_exts.iter().any(|e| *e == ext) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Build the name a file will be stored under.
    pub fn stored_name(&self, original: &str) -> String {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let mut token = [0u8; 6];
        rand::thread_rng().fill_bytes(&mut token);
        format!(
            "{timestamp}_{}_{}",
            hex::encode(token),
            sanitize_file_name(original)
        )
    }

    /// Write the uploaded bytes under the stored name and return that name.
    pub async fn store(&self, original: &str, bytes: &[u8]) -> SignageResult<String> {
        let name = self.stored_name(original);
        fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(&name);
        fs::write(&path, bytes).await?;
        info!(file = %name, size = bytes.len(), "upload stored");
        Ok(name)
    }
}

/// Extension after the last dot, lowercased. `None` when there is no dot.
fn extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// Strip path components and unsafe characters from a client-supplied
/// filename. Never returns an empty string.
pub fn sanitize_file_name(original: &str) -> String {
    // Only the last path component matters; clients should not be able to
    // steer where the file lands.
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    // No hidden files and no `..` remnants.
    let cleaned = cleaned.trim_start_matches('.').replace("..", "_");
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

fn lowered(exts: Vec<String>) -> Vec<String> {
    exts.into_iter()
        .map(|e| e.trim().to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploads() -> (tempfile::TempDir, UploadStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(
            dir.path().join("uploads"),
            vec!["jpg".into(), "png".into()],
            vec!["mp4".into(), "webm".into()],
        );
        (dir, store)
    }

    #[test]
    fn classify_is_case_insensitive() {
        let (_dir, store) = uploads();
        assert_eq!(store.classify("photo.JPG"), Some(MediaKind::Image));
        assert_eq!(store.classify("clip.Mp4"), Some(MediaKind::Video));
    }

    #[test]
    fn classify_rejects_disallowed_and_dotless() {
        let (_dir, store) = uploads();
        assert_eq!(store.classify("movie.exe"), None);
        assert_eq!(store.classify("noextension"), None);
        assert_eq!(store.classify("trailingdot."), None);
    }

    #[test]
    fn sanitize_strips_paths_and_unsafe_chars() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("dir\\sub\\a b.png"), "a_b.png");
        assert_eq!(sanitize_file_name(".hidden"), "hidden");
        assert_eq!(sanitize_file_name("ñandú.jpg"), "_and_.jpg");
        assert_eq!(sanitize_file_name("///"), "file");
    }

    #[test]
    fn stored_names_differ_for_same_original() {
        let (_dir, store) = uploads();
        let a = store.stored_name("photo.jpg");
        let b = store.stored_name("photo.jpg");
        assert_ne!(a, b);
        assert!(a.ends_with("_photo.jpg"));
    }

    #[tokio::test]
    async fn store_writes_file() {
        let (_dir, store) = uploads();
        let name = store.store("photo.jpg", b"binary").await.unwrap();
        let written = tokio::fs::read(store.dir().join(&name)).await.unwrap();
        assert_eq!(written, b"binary");
    }
}
