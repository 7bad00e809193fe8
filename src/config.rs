use crate::settings::SamplingPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of a Monte Carlo run, for export/import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Version field for future compatibility
    pub version: u32,
    /// Side length of the grid
    pub grid_size: i64,
    /// Number of independent trials
    pub trials: i64,
    /// RNG seed, None for an entropy-seeded run
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub policy: SamplingPolicy,
}

impl RunConfig {
    /// Export config to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        fs::write(path, json).map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }

    /// Import config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            version: 1,
            grid_size: 200,
            trials: 100,
            seed: None,
            policy: SamplingPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_file_save_and_load() {
        let config = RunConfig {
            version: 1,
            grid_size: 64,
            trials: 250,
            seed: Some(1234),
            policy: SamplingPolicy::ClosedSites,
        };

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        config.save_to_file(&path).unwrap();
        let loaded = RunConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{ "version": 1, "grid_size": 10, "trials": 3 }"#;
        let parsed: RunConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.seed, None);
        assert_eq!(parsed.policy, SamplingPolicy::AllSites);
    }

    #[test]
    fn test_invalid_config_file() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "not valid json").unwrap();

        let result = RunConfig::load_from_file(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let result = RunConfig::load_from_file(Path::new("/nonexistent/path/config.json"));
        assert!(result.is_err());
    }
}
