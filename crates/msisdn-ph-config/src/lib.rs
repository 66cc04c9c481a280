use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use msisdn_ph_core::error::CoreError;
use msisdn_ph_core::table::{PrefixTable, CHECK_ORDER};
use msisdn_ph_core::{Operator, DEFAULT_COUNTRY_PREFIX};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "msisdn-ph";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub country_prefix: String,
    pub table: PrefixTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            country_prefix: DEFAULT_COUNTRY_PREFIX.to_string(),
            table: PrefixTable::builtin().clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid country_prefix value: {0:?}")]
    InvalidCountryPrefix(String),
    #[error("invalid prefix table: {0}")]
    Table(#[from] CoreError),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    country_prefix: Option<String>,
    prefixes: Option<PrefixesFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PrefixesFile {
    globe: Option<Vec<String>>,
    smart: Option<Vec<String>>,
    sun: Option<Vec<String>>,
    dito: Option<Vec<String>>,
    gomo: Option<Vec<String>>,
}

impl PrefixesFile {
    fn take(&mut self, operator: Operator) -> Option<Vec<String>> {
        match operator {
            Operator::Globe => self.globe.take(),
            Operator::Smart => self.smart.take(),
            Operator::Sun => self.sun.take(),
            Operator::Dito => self.dito.take(),
            Operator::Gomo => self.gomo.take(),
            Operator::Unknown => None,
        }
    }
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(prefix) = parsed.country_prefix {
        let trimmed = prefix.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidCountryPrefix(prefix));
        }
        config.country_prefix = trimmed.to_string();
    }

    if let Some(mut prefixes) = parsed.prefixes {
        let builtin = PrefixTable::builtin();
        let lists: Vec<_> = CHECK_ORDER
            .iter()
            .map(|&operator| {
                let list = prefixes
                    .take(operator)
                    .unwrap_or_else(|| builtin.prefixes_for(operator).to_vec());
                (operator, list)
            })
            .collect();
        config.table = PrefixTable::new(lists)?;
    }

    Ok(config)
}
