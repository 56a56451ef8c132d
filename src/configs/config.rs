use std::{
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::constants;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ip: IpAddr,
    pub port: u16,
    pub api_root: String,
    pub cohort: String,
    pub assets_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: constants::DEFAULT_PORT,
            api_root: constants::DEFAULT_API_ROOT.to_string(),
            cohort: constants::DEFAULT_COHORT.to_string(),
            assets_dir: PathBuf::from(constants::DEFAULT_ASSETS_DIR),
        }
    }
}

impl Config {
    /// Reads `Config.toml` from the working directory, or the defaults when
    /// there is no such file.
    pub fn new() -> Result<Config, ConfigError> {
        let path = Path::new(constants::CONFIG_FILE);
        if !path.exists() {
            tracing::info!("no {} found, using default configuration", path.display());
            return Ok(Config::default());
        }
        Config::load(path)
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Config::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Collection endpoint, `{api_root}/{cohort}/players`.
    pub fn players_url(&self) -> String {
        format!(
            "{}/{}/players",
            self.api_root.trim_end_matches('/'),
            self.cohort.trim_matches('/')
        )
    }
}
