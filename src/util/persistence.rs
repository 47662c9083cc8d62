use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::{OrderSpec, PricingConfig, PricingError};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ScreenprintPricing";
const APP_NAME: &str = "ScreenprintPricing";

const CONFIG_FILENAME: &str = "pricing.json";
const LAST_ORDER_FILENAME: &str = "last_order.json";

fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILENAME))
}

pub fn last_order_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LAST_ORDER_FILENAME))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("malformed {}: {source}", .path.display())]
    Parse { path: PathBuf, source: SerdeError },
    #[error("invalid {}: {source}", .path.display())]
    Invalid { path: PathBuf, source: PricingError },
}

/// Reads a JSON document, treating a missing file as `None`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Pricing terms from `path`, or the standard terms when the file is absent.
pub fn load_pricing_config_from(path: &Path) -> Result<PricingConfig, ConfigError> {
    match load_json::<PricingConfig>(path)? {
        Some(config) => {
            config.validate().map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), "loaded pricing config");
            Ok(config)
        }
        None => {
            debug!(path = %path.display(), "no pricing config, using standard terms");
            Ok(PricingConfig::default())
        }
    }
}

pub fn load_pricing_config() -> Result<PricingConfig, ConfigError> {
    match config_file() {
        Some(path) => load_pricing_config_from(&path),
        None => {
            warn!("config directory unavailable, using standard pricing terms");
            Ok(PricingConfig::default())
        }
    }
}

/// The last order quoted, if one was saved and still parses.
pub fn load_last_order() -> Option<OrderSpec> {
    let path = last_order_file()?;
    match load_json(&path) {
        Ok(order) => order,
        Err(err) => {
            warn!("ignoring saved order: {err}");
            None
        }
    }
}

pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn save_last_order(order: &OrderSpec) -> Result<(), PersistSaveError> {
    let path = last_order_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_json(&path, order)
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
