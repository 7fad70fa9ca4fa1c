use std::env;
use std::path::PathBuf;

/// Conventional config filename, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Template config shipped in the repository for users to copy.
pub const EXAMPLE_CONFIG_FILE: &str = "config.example.yaml";

/// Path resolution for herald.
pub struct Paths;

impl Paths {
    /// Returns the config file path.
    /// - Default: ./config.yaml
    /// - Override: HERALD_CONFIG env var
    pub fn config_file() -> PathBuf {
        if let Ok(path) = env::var("HERALD_CONFIG") {
            return PathBuf::from(path);
        }
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }
}
