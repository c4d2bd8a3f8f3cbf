use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use signage_error::SignageError;
use std::fmt;

use crate::constants::{SCREEN_MAX, SCREEN_MIN, SCREEN_PREFIX};

/// Identifier of one of the five fixed displays.
///
/// Construction validates the range; everything downstream (store paths,
/// generated page paths, public URLs) can assume a valid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(u8);

impl ScreenId {
    pub fn new(id: impl Into<i64>) -> Result<Self, SignageError> {
        let id = id.into();
        if !(SCREEN_MIN as i64..=SCREEN_MAX as i64).contains(&id) {
            return Err(SignageError::InvalidScreenId(id));
        }
        Ok(ScreenId(id as u8))
    }

    #[inline]
    pub fn get(&self) -> u8 {
        self.0
    }

    /// All valid ids, in display order.
    pub fn all() -> impl Iterator<Item = ScreenId> {
        (SCREEN_MIN..=SCREEN_MAX).map(ScreenId)
    }

    /// Human-facing display name, e.g. `Pantalla 3`.
    pub fn display_name(&self) -> String {
        format!("Pantalla {}", self.0)
    }

    /// Directory/file stem for this display, e.g. `pantalla3`.
    pub fn slug(&self) -> String {
        format!("{SCREEN_PREFIX}{}", self.0)
    }

    /// Public viewing URL for this display's generated page.
    pub fn public_url(&self) -> String {
        format!("/{SCREEN_PREFIX}{}", self.0)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-display configuration document.
///
/// The document is opaque to the server: whatever JSON the panel posts is
/// stored wholesale and echoed back verbatim on the next load. No schema is
/// enforced, not even "is an object". The accessors read the well-known
/// fields leniently and fall back to defaults when a field is absent or has
/// an unexpected shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ScreenConfig(Value);

impl ScreenConfig {
    /// Default document for a display that has never been saved.
    pub fn empty(id: ScreenId) -> Self {
        ScreenConfig(json!({
            "screen_id": id.get(),
            "slides": [],
            "marquee_enabled": false,
            "marquee_text": "",
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The slide list, or empty when `slides` is missing or not an array.
    pub fn slides(&self) -> &[Value] {
        self.0
            .get("slides")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn slides_count(&self) -> usize {
        self.slides().len()
    }

    #[inline]
    pub fn has_content(&self) -> bool {
        !self.slides().is_empty()
    }

    pub fn marquee_enabled(&self) -> bool {
        self.0
            .get("marquee_enabled")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn marquee_text(&self) -> &str {
        self.0
            .get("marquee_text")
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

impl From<Value> for ScreenConfig {
    fn from(doc: Value) -> Self {
        ScreenConfig(doc)
    }
}

/// One row of the `GET /api/screens` listing. The listing always contains
/// exactly five entries, one per display, regardless of configuration state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenSummary {
    pub id: u8,
    pub name: String,
    pub slides_count: usize,
    pub has_content: bool,
}

impl ScreenSummary {
    pub fn from_config(id: ScreenId, config: &ScreenConfig) -> Self {
        ScreenSummary {
            id: id.get(),
            name: id.display_name(),
            slides_count: config.slides_count(),
            has_content: config.has_content(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn screen_id_range() {
        for id in 1..=5u8 {
            assert!(ScreenId::new(id).is_ok());
        }
        assert!(ScreenId::new(0u8).is_err());
        assert!(ScreenId::new(6u8).is_err());
        assert!(ScreenId::new(-3i8 as i64).is_err());
    }

    #[test]
    fn screen_id_naming() {
        let id = ScreenId::new(3u8).unwrap();
        assert_eq!(id.display_name(), "Pantalla 3");
        assert_eq!(id.slug(), "pantalla3");
        assert_eq!(id.public_url(), "/pantalla3");
    }

    #[test]
    fn config_preserves_unknown_keys() {
        let doc = json!({
            "screen_id": 2,
            "slides": [{"url": "/static/uploads/a.jpg", "type": "image"}],
            "marquee_enabled": true,
            "marquee_text": "hello",
            "theme": "dark",
            "transition_ms": 400
        });
        let cfg: ScreenConfig = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(cfg.slides_count(), 1);
        assert!(cfg.has_content());
        assert!(cfg.marquee_enabled());
        assert_eq!(cfg.marquee_text(), "hello");
        assert_eq!(serde_json::to_value(&cfg).unwrap(), doc);
    }

    #[test]
    fn config_accepts_any_document_shape() {
        // Ill-typed fields and non-object documents are legal; accessors
        // just fall back to defaults.
        for doc in [
            json!({"marquee_enabled": "yes", "slides": {"not": "a list"}}),
            json!(["a", "bare", "array"]),
            json!("just a string"),
            json!(42),
        ] {
            let cfg: ScreenConfig = serde_json::from_value(doc.clone()).unwrap();
            assert_eq!(cfg.slides_count(), 0);
            assert!(!cfg.marquee_enabled());
            assert_eq!(cfg.marquee_text(), "");
            assert_eq!(serde_json::to_value(&cfg).unwrap(), doc);
        }
    }

    #[test]
    fn empty_config_defaults() {
        let cfg = ScreenConfig::empty(ScreenId::new(4u8).unwrap());
        assert_eq!(cfg.as_value()["screen_id"], 4);
        assert!(cfg.slides().is_empty());
        assert!(!cfg.marquee_enabled());
        assert!(cfg.marquee_text().is_empty());
        assert!(!cfg.has_content());
    }
}
