// Layered configuration system

pub mod loader;
pub mod merger;

// Re-export main types
pub use loader::{ConfigLoader, DiscoveryConfig, PromptConfig, StorageConfig};
pub use merger::{ConfigMerger, PartialConfig, PartialPromptConfig, PartialStorageConfig};

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Load and merge configuration from all sources
/// Priority: CLI -> Project -> Global -> Defaults
///
/// `global_override` replaces the default global config location. Unlike the
/// default location, an explicit file that fails to parse is an error.
pub fn load_merged_config(
    project_path: Option<&Path>,
    global_override: Option<PathBuf>,
    cli_overrides: Option<PartialConfig>,
) -> Result<DiscoveryConfig> {
    let explicit = global_override.is_some();
    let mut loader = ConfigLoader::new();
    if explicit {
        loader = loader.with_global_path(global_override);
    }
    if let Some(path) = project_path {
        loader = loader.with_project_path(path);
    }

    let global = match loader.load_global() {
        Ok(config) => config,
        Err(e) if !explicit => {
            log::warn!("Ignoring global config: {}", e);
            None
        }
        Err(e) => return Err(e),
    };

    let project = match loader.load_project() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring project config: {}", e);
            None
        }
    };

    let config = ConfigMerger::new()
        .with_global(global)
        .with_project(project)
        .with_cli(cli_overrides)
        .merge();

    Ok(config)
}
