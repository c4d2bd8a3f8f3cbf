/// Lowest valid display id.
pub const SCREEN_MIN: u8 = 1;
/// Highest valid display id. The set of displays is fixed; ids are never
/// reassigned at runtime.
pub const SCREEN_MAX: u8 = 5;
/// Number of managed displays.
pub const SCREEN_COUNT: usize = (SCREEN_MAX - SCREEN_MIN + 1) as usize;

/// Session key holding the admin login flag.
pub const SESSION_LOGGED_IN: &str = "logged_in";

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "signage.toml";

/// Per-display file/route prefix (`pantalla1` .. `pantalla5`).
pub const SCREEN_PREFIX: &str = "pantalla";

/// File name of a generated presentation page inside its display directory.
pub const GENERATED_PAGE_NAME: &str = "index.html";

/// Public URL prefix under which uploaded media is served.
pub const UPLOADS_URL_PREFIX: &str = "/static/uploads";
