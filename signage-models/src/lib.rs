pub mod constants;
pub mod screen;
pub mod settings;
pub mod web;

pub use screen::{ScreenConfig, ScreenId, ScreenSummary};
pub use settings::Settings;
