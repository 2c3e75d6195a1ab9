use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;

/// Initialize the configuration file and storage directory.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.test || cli.data_dir.is_some() {
        // test mode / custom dir: create the storage dir only
        fs::create_dir_all(&cfg.storage_dir)?;
        success(format!("Storage dir: {}", cfg.storage_dir));
    } else {
        Config::init_all(false)?;
    }
    Ok(())
}
