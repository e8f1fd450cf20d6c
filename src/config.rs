//! Fixed locations used by a run.
//!
//! The tool reads no flags or environment variables; everything it touches is
//! named here. [`Config`] carries the same values so tests can redirect them.

use std::path::PathBuf;

/// Published list of Google owned IP ranges.
pub const GOOG_IP_RANGES_URL: &str = "https://www.gstatic.com/ipranges/goog.json";

/// Optional list of extra CIDR ranges, read from the working directory.
pub const EXTRAS_FILE: &str = "extras.json";

/// Output file, recreated on every run.
pub const ROUTES_FILE: &str = "routes.txt";

/// log4rs configuration, used when present in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Locations for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL of the published range document.
    pub url: String,
    /// Extras file. `None` disables the extras stage.
    pub extras_file: Option<PathBuf>,
    /// File receiving the route commands.
    pub routes_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: GOOG_IP_RANGES_URL.to_string(),
            extras_file: Some(PathBuf::from(EXTRAS_FILE)),
            routes_file: PathBuf::from(ROUTES_FILE),
        }
    }
}
