use handlebars::Handlebars;
use serde_json::json;
use signage_error::SignageResult;
use signage_models::{constants::GENERATED_PAGE_NAME, ScreenId};
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

use crate::store::ScreenStore;

/// Embedded presentation template. Slides are inlined as raw JSON; the
/// marquee text goes through the default HTML escaping.
const SCREEN_TEMPLATE: &str = include_str!("../templates/screen.hbs");
const SCREEN_TEMPLATE_NAME: &str = "screen";

/// Renders a display's current configuration into a self-contained static
/// HTML page under `<output_dir>/pantalla{id}/index.html`.
#[derive(Clone)]
pub struct PageGenerator {
    store: ScreenStore,
    output_dir: PathBuf,
    registry: Handlebars<'static>,
}

impl PageGenerator {
    pub fn new(store: ScreenStore, output_dir: impl Into<PathBuf>) -> SignageResult<Self> {
        let mut registry = Handlebars::new();
        registry.register_template_string(SCREEN_TEMPLATE_NAME, SCREEN_TEMPLATE)?;
        Ok(PageGenerator {
            store,
            output_dir: output_dir.into(),
            registry,
        })
    }

    /// Path the generated page for a display lives at.
    pub fn page_path(&self, id: ScreenId) -> PathBuf {
        self.output_dir.join(id.slug()).join(GENERATED_PAGE_NAME)
    }

    /// Render and write the page for a display, overwriting any prior
    /// version. On failure the previous version, if any, is left intact.
    pub async fn generate(&self, id: ScreenId) -> SignageResult<PathBuf> {
        let config = self.store.load(id).await?;

        let data = json!({
            "screen_id": id.get(),
            "slides_json": serde_json::to_string(config.slides())?,
            "marquee_enabled": config.marquee_enabled(),
            "marquee_text": config.marquee_text(),
        });
        let html = self.registry.render(SCREEN_TEMPLATE_NAME, &data)?;

        let path = self.page_path(id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, html).await?;

        info!(screen = %id, path = %path.display(), slides = config.slides_count(), "presentation generated");
        Ok(path)
    }
}
