use std::{
    ffi::OsString,
    io::Read,
    path::{Path, PathBuf},
};

use gridpager::ConfigFile;
use thiserror::Error;

const CONFIG_NAME: &str = "config.ron";
const APP_NAME: &str = "gridpager";

#[derive(Error, Debug)]
pub enum ConfigReadError {
    #[error("Deserialization error, {0}")]
    Deserialization(#[from] serde_path_to_error::Error<ron::Error>),
    #[error("Failed to deserialize ron config file, {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Configuration file not found at any of the possible paths")]
    ConfigNotFound,
    #[error("IO error, {0}")]
    Io(#[from] std::io::Error),
    #[error("No configuration paths available")]
    NoConfigPaths,
}

pub fn config_paths(cli_arg_config_path: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = cli_arg_config_path {
        return vec![path.to_path_buf()];
    }

    config_paths_from(std::env::var_os("XDG_CONFIG_HOME"), std::env::var_os("HOME"))
}

/// Candidate config files in lookup order: `$XDG_CONFIG_HOME` when it is
/// absolute, then `$HOME/.config`.
fn config_paths_from(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Vec<PathBuf> {
    let home = home.filter(|home| !home.is_empty()).map(PathBuf::from);
    let xdg_config_home = xdg_config_home.map(PathBuf::from).filter(|p| p.is_absolute());

    let mut result = Vec::new();
    if let Some(config_dir) = xdg_config_home {
        result.push(config_dir.join(APP_NAME).join(CONFIG_NAME));
    }

    match home {
        Some(home) => result.push(home.join(".config").join(APP_NAME).join(CONFIG_NAME)),
        None if result.is_empty() => log::warn!("Could not determine configuration directory"),
        None => {}
    }

    result.dedup();
    result
}

fn find_first_existing_path(paths: Vec<PathBuf>) -> Option<PathBuf> {
    paths.into_iter().find(|path| {
        let exists = path.exists();
        log::trace!(path:? = path, exists; "Checking config path");
        exists
    })
}

/// Reads the first config file found. Without an explicit path a missing file
/// falls back to the defaults.
pub fn read_config(cli_arg_config_path: Option<&Path>) -> Result<ConfigFile, ConfigReadError> {
    let config_paths = config_paths(cli_arg_config_path);
    if config_paths.is_empty() {
        return Err(ConfigReadError::NoConfigPaths);
    }

    match find_first_existing_path(config_paths) {
        Some(path) => read_config_file(&path),
        None if cli_arg_config_path.is_some() => Err(ConfigReadError::ConfigNotFound),
        None => {
            log::info!("No config file found, using defaults");
            Ok(ConfigFile::default())
        }
    }
}

pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigReadError> {
    let mut content = String::new();
    std::fs::File::open(path)?.read_to_string(&mut content)?;
    let config = parse_config(&content)?;
    log::debug!(path:? = path; "Read config file");
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<ConfigFile, ConfigReadError> {
    let mut deserializer = ron::de::Deserializer::from_str(content)?;
    Ok(serde_path_to_error::deserialize(&mut deserializer)?)
}
