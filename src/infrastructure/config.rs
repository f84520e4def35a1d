use crate::domain::{
    config::MorseComConfig,
    error::{MorseComError, MorseComResult},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager
///
/// Layers a global file under the user's config directory with an
/// optional per-project `.morsecom/config.toml` found by walking up
/// from the working directory. The project file, when present, is
/// self-contained and takes precedence over the global one.
pub struct ConfigManager {
    global_config_path: PathBuf,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> MorseComResult<Self> {
        let global_config_path = Self::locate_global_config()?;
        let project_config_path = Self::find_project_config();

        Ok(Self {
            global_config_path,
            project_config_path,
        })
    }

    /// Load configuration from files
    pub fn load_config(&self) -> MorseComResult<MorseComConfig> {
        let mut config = MorseComConfig::default();

        if self.global_config_path.exists() {
            config = self.load_config_from_path(&self.global_config_path)?;
        }

        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                config = self.load_config_from_path(project_path)?;
            }
        }

        Ok(config)
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> MorseComResult<MorseComConfig> {
        let content = fs::read_to_string(path).map_err(|e| MorseComError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| MorseComError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Save configuration to specific path, creating parent directories
    pub fn save_config_to_path(&self, path: &Path, config: &MorseComConfig) -> MorseComResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| MorseComError::Config {
                message: format!("Failed to create config directory: {}", e),
            })?;
        }

        let content = toml::to_string_pretty(config).map_err(|e| MorseComError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, content).map_err(|e| MorseComError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })
    }

    /// Create default project configuration under `path`
    pub fn init_project_config(&self, path: &Path) -> MorseComResult<()> {
        let config_file = path.join(".morsecom").join("config.toml");

        if config_file.exists() {
            return Err(MorseComError::Config {
                message: "Project configuration already exists".to_string(),
            });
        }

        self.save_config_to_path(&config_file, &MorseComConfig::default())
    }

    /// The current project config path (if any)
    pub fn project_config_path(&self) -> Option<&PathBuf> {
        self.project_config_path.as_ref()
    }

    /// The global config path
    pub fn global_config_path(&self) -> &PathBuf {
        &self.global_config_path
    }

    fn locate_global_config() -> MorseComResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| MorseComError::Config {
            message: "Could not determine home directory".to_string(),
        })?;

        Ok(home.join(".config").join("morsecom").join("config.toml"))
    }

    /// Walk up from the working directory looking for a project file
    fn find_project_config() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(".morsecom").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }
}
