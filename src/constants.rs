//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and retrieval defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "credview";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent header sent with every outbound request.
pub const USER_AGENT: &str = concat!("credview/", env!("CARGO_PKG_VERSION"));

/// Local config filename (e.g. `.credview.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".credview.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "credview";

/// Default endpoint serving the credential collection.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/credentials";

/// Default cap on the number of records requested per fetch.
pub const DEFAULT_LIMIT: u32 = 4000;


// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "CREDVIEW_BASE_URL";
pub const ENV_LIMIT: &str = "CREDVIEW_LIMIT";
