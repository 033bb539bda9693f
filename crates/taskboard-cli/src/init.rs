use taskboard_common::{
    error::{TaskboardError, TaskboardResult},
    settings::{get_config, Settings, CONFIG_INSTANCE},
};

use crate::Cli;

/// Loads settings once for the process. `--settings` wins over `--root`.
pub fn init_config(cli: &Cli) -> TaskboardResult<&'static Settings> {
    let settings = load_settings(cli)?;
    CONFIG_INSTANCE
        .set(settings)
        .map_err(|_| TaskboardError::Cli("Config already initialized".to_string()))?;
    get_config()
}

pub fn load_settings(cli: &Cli) -> TaskboardResult<Settings> {
    match &cli.settings {
        None => Settings::from_root(cli.root.clone()),
        Some(settings) => Settings::from_root(Some(settings.clone())),
    }
}
