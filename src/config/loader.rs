// Configuration file loading

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Discovery configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DiscoveryConfig {
    /// Prompt generation settings
    #[serde(default)]
    pub prompts: PromptConfig,
    /// Session storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Prompt generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PromptConfig {
    /// Use the enhanced script-generation prompt instead of the standard one
    #[serde(
        rename = "useEnhancedPrompt",
        alias = "use_enhanced_prompt",
        default
    )]
    pub use_enhanced_prompt: bool,
    /// Directory holding `{name}.tera` overrides for built-in templates
    #[serde(rename = "templatesDir", alias = "templates_dir", default)]
    pub templates_dir: Option<String>,
}

/// Session storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Base directory for `.content-assembly/` (defaults to the working directory)
    #[serde(rename = "dataDir", alias = "data_dir", default)]
    pub data_dir: Option<String>,
}

/// Config loader
pub struct ConfigLoader {
    /// Global config path
    global_path: Option<PathBuf>,
    /// Project config path
    project_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            global_path: Self::get_global_config_path(),
            project_path: None,
        }
    }

    /// Set the project path
    pub fn with_project_path(mut self, path: &Path) -> Self {
        self.project_path = Some(path.join(".content-assembly").join("config.toml"));
        self
    }

    /// Replace the global config path (tests, explicit `--config`)
    pub fn with_global_path(mut self, path: Option<PathBuf>) -> Self {
        self.global_path = path;
        self
    }

    /// Get the global config path
    fn get_global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("content-assembly").join("config.toml"))
    }

    /// Load global config
    pub fn load_global(&self) -> Result<Option<DiscoveryConfig>> {
        match self.global_path {
            Some(ref path) => self.load_from_path(path),
            None => Ok(None),
        }
    }

    /// Load project config
    pub fn load_project(&self) -> Result<Option<DiscoveryConfig>> {
        match self.project_path {
            Some(ref path) => self.load_from_path(path),
            None => Ok(None),
        }
    }

    /// Load config from a specific path
    pub fn load_from_path(&self, path: &Path) -> Result<Option<DiscoveryConfig>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: DiscoveryConfig = toml::from_str(&contents)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        self.validate_config(&config)?;

        Ok(Some(config))
    }

    /// Validate config values
    fn validate_config(&self, config: &DiscoveryConfig) -> Result<()> {
        if let Some(dir) = &config.prompts.templates_dir {
            if dir.trim().is_empty() {
                return Err(anyhow!("templatesDir cannot be empty"));
            }
        }

        if let Some(dir) = &config.storage.data_dir {
            if dir.trim().is_empty() {
                return Err(anyhow!("dataDir cannot be empty"));
            }
        }

        Ok(())
    }

    /// Get the global config path
    pub fn global_config_path(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the project config path
    pub fn project_config_path(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path, config: &DiscoveryConfig) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    anyhow!(
                        "Failed to create config directory '{}': {}",
                        parent.display(),
                        e
                    )
                })?;
            }
        }

        self.validate_config(config)?;

        let contents = toml::to_string_pretty(config)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        fs::write(path, contents)
            .map_err(|e| anyhow!("Failed to write config file '{}': {}", path.display(), e))?;

        log::info!("Saved config to: {}", path.display());
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DiscoveryConfig::default();
        assert!(!config.prompts.use_enhanced_prompt);
        assert!(config.prompts.templates_dir.is_none());
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new();
        let result = loader
            .load_from_path(&temp_dir.path().join("nope.toml"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_accepts_both_key_styles() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[prompts]
use_enhanced_prompt = true

[storage]
dataDir = "/tmp/videos"
"#,
        )
        .unwrap();

        let config = ConfigLoader::new().load_from_path(&path).unwrap().unwrap();
        assert!(config.prompts.use_enhanced_prompt);
        assert_eq!(config.storage.data_dir.as_deref(), Some("/tmp/videos"));
    }

    #[test]
    fn test_load_rejects_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        fs::write(&path, "[prompts]\nuseEnhancedPrompt = \"yes\"\n").unwrap();
        assert!(ConfigLoader::new().load_from_path(&path).is_err());

        fs::write(&path, "[storage]\ndataDir = \"  \"\n").unwrap();
        assert!(ConfigLoader::new().load_from_path(&path).is_err());
    }

    #[test]
    fn test_config_paths() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global.toml");
        let loader = ConfigLoader::new()
            .with_project_path(temp_dir.path())
            .with_global_path(Some(global.clone()));

        assert_eq!(loader.global_config_path(), Some(global.as_path()));
        assert_eq!(
            loader.project_config_path(),
            Some(temp_dir.path().join(".content-assembly").join("config.toml").as_path())
        );

        let mut config = DiscoveryConfig::default();
        config.prompts.use_enhanced_prompt = true;
        let project = loader.project_config_path().unwrap().to_path_buf();
        loader.save_to_path(&project, &config).unwrap();
        assert_eq!(loader.load_project().unwrap(), Some(config));
        assert!(loader.load_global().unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let loader = ConfigLoader::new();

        let mut config = DiscoveryConfig::default();
        config.prompts.use_enhanced_prompt = true;
        loader.save_to_path(&path, &config).unwrap();

        let loaded = loader.load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }
}
