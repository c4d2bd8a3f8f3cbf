//! Functional core of the signage panel: per-display configuration storage,
//! media upload handling and static page generation.

pub mod generate;
pub mod store;
pub mod upload;

pub use generate::PageGenerator;
pub use store::ScreenStore;
pub use upload::{MediaKind, UploadStore};
