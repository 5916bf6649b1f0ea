//! Generator configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for page generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory the `.html` tree is written under.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    /// Location of shared page assets (stylesheets, scripts). A leading
    /// `.` makes it relative to each generated page's depth.
    #[serde(default = "default_data_path")]
    pub data_path: String,
    /// Directory searched for `.common` / `.coverage` sidecars. Defaults
    /// to the working directory.
    pub sidecar_dir: Option<PathBuf>,
    /// Warning paragraph embedded verbatim above and below the table.
    pub warning: Option<String>,
}

fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_data_path() -> String {
    "../data".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            data_path: default_data_path(),
            sidecar_dir: None,
            warning: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output root directory.
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Set the shared asset path.
    pub fn with_data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the sidecar lookup directory.
    pub fn with_sidecar_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sidecar_dir = Some(dir.into());
        self
    }

    /// Set the warning message.
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_root, PathBuf::from("."));
        assert_eq!(config.data_path, "../data");
        assert!(config.sidecar_dir.is_none());
        assert!(config.warning.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::new()
            .with_output_root("/tmp/out")
            .with_data_path("../assets")
            .with_warning("stale");
        assert_eq!(config.output_root, PathBuf::from("/tmp/out"));
        assert_eq!(config.data_path, "../assets");
        assert_eq!(config.warning.as_deref(), Some("stale"));
    }

    #[test]
    fn test_config_serialization() {
        let config = GeneratorConfig::new().with_sidecar_dir("/var/overlays");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sidecar_dir, config.sidecar_dir);
        assert_eq!(parsed.data_path, config.data_path);
    }
}
