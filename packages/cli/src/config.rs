use folio_editor::EditorConfig;
use folio_storage::FileRepository;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "folio.config.json";

/// Folio configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding saved portfolios
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Prefix of published portfolio URLs
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    /// Undo levels kept per document (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_storage_dir() -> String {
    ".folio".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8080/p".to_string()
}

fn default_history_limit() -> usize {
    EditorConfig::default().history_limit
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to storage directory
    pub fn get_storage_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.storage_dir)
    }

    pub fn repository(&self, cwd: &str) -> FileRepository {
        FileRepository::new(self.get_storage_dir(cwd), self.public_base_url.clone())
    }

    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            history_limit: self.history_limit,
            ..EditorConfig::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            public_base_url: default_public_base_url(),
            history_limit: default_history_limit(),
        }
    }
}
