use crate::store::DEFAULT_PAGE_SIZE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows per page in the unfiltered view.
    pub page_size: usize,
    /// Task file override; defaults to the platform data dir.
    pub data_file: Option<PathBuf>,
    /// Export target override; defaults to the download dir.
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            data_file: None,
            export_dir: None,
        }
    }
}

impl Config {
    fn get_path() -> Option<PathBuf> {
        if let Some(proj) = ProjectDirs::from("com", "feito", "feito") {
            return Some(proj.config_dir().join("config.toml"));
        }
        None
    }

    /// Reads the config from the platform config directory.
    pub fn load() -> Self {
        match Self::get_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Path-taking twin of [`Config::load`]. Missing or corrupt config
    /// degrades to defaults, the same normalization rule as the task blob.
    pub fn load_from(path: &Path) -> Self {
        if path.exists()
            && let Ok(content) = fs::read_to_string(path)
            && let Ok(cfg) = toml::from_str::<Config>(&content)
        {
            return cfg.sanitized();
        }
        Self::default()
    }

    fn sanitized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self
    }
}
