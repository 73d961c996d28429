// Configuration merging with priority

use crate::config::loader::{DiscoveryConfig, PromptConfig, StorageConfig};
use serde::{Deserialize, Serialize};

/// Partial configuration for merging
/// Uses Option<T> for all fields to support partial overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PartialConfig {
    #[serde(default)]
    pub prompts: Option<PartialPromptConfig>,
    #[serde(default)]
    pub storage: Option<PartialStorageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PartialPromptConfig {
    pub use_enhanced_prompt: Option<bool>,
    pub templates_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PartialStorageConfig {
    pub data_dir: Option<String>,
}

/// Configuration merger
/// Priority order: CLI -> Project -> Global -> Defaults
pub struct ConfigMerger {
    defaults: DiscoveryConfig,
    global: Option<DiscoveryConfig>,
    project: Option<DiscoveryConfig>,
    cli: Option<PartialConfig>,
}

impl ConfigMerger {
    /// Create a new config merger with defaults
    pub fn new() -> Self {
        Self {
            defaults: DiscoveryConfig::default(),
            global: None,
            project: None,
            cli: None,
        }
    }

    /// Set global config
    pub fn with_global(mut self, config: Option<DiscoveryConfig>) -> Self {
        self.global = config;
        self
    }

    /// Set project config
    pub fn with_project(mut self, config: Option<DiscoveryConfig>) -> Self {
        self.project = config;
        self
    }

    /// Set CLI overrides
    pub fn with_cli(mut self, config: Option<PartialConfig>) -> Self {
        self.cli = config;
        self
    }

    /// Merge all configs with priority
    pub fn merge(&self) -> DiscoveryConfig {
        let mut result = self.defaults.clone();

        if let Some(ref global) = self.global {
            result = self.merge_full(&result, global);
        }

        if let Some(ref project) = self.project {
            result = self.merge_full(&result, project);
        }

        if let Some(ref cli) = self.cli {
            result = self.merge_partial(&result, cli);
        }

        result
    }

    /// Overlay a full config file. Booleans from the overlay win; optional
    /// paths only replace the base when the overlay sets them.
    fn merge_full(&self, base: &DiscoveryConfig, overlay: &DiscoveryConfig) -> DiscoveryConfig {
        DiscoveryConfig {
            prompts: PromptConfig {
                use_enhanced_prompt: overlay.prompts.use_enhanced_prompt,
                templates_dir: overlay
                    .prompts
                    .templates_dir
                    .clone()
                    .or_else(|| base.prompts.templates_dir.clone()),
            },
            storage: StorageConfig {
                data_dir: overlay
                    .storage
                    .data_dir
                    .clone()
                    .or_else(|| base.storage.data_dir.clone()),
            },
        }
    }

    fn merge_partial(&self, base: &DiscoveryConfig, partial: &PartialConfig) -> DiscoveryConfig {
        let mut result = base.clone();

        if let Some(ref prompts) = partial.prompts {
            if let Some(enhanced) = prompts.use_enhanced_prompt {
                result.prompts.use_enhanced_prompt = enhanced;
            }
            if let Some(ref dir) = prompts.templates_dir {
                result.prompts.templates_dir = Some(dir.clone());
            }
        }

        if let Some(ref storage) = partial.storage {
            if let Some(ref dir) = storage.data_dir {
                result.storage.data_dir = Some(dir.clone());
            }
        }

        result
    }
}

impl Default for ConfigMerger {
    fn default() -> Self {
        Self::new()
    }
}
