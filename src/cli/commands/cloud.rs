use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::CloudConfig;
use crate::ui::messages::{info, success, warning};

/// Configure, clear, or trigger cloud mirroring.
///
/// Setting a URL and key persists the credentials and runs a first full
/// sync. Submitting two empty values (or --clear) disables mirroring; the
/// local in-memory data is left untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cloud {
        url,
        key,
        clear,
        sync,
    } = cmd
    {
        let mut session = Session::open(cfg);

        let clearing = *clear
            || matches!((url.as_deref(), key.as_deref()), (Some(""), Some("")));

        if clearing {
            session.configure_cloud(None)?;
            success("Cloud mirroring disabled.");
            return Ok(());
        }

        match (url, key) {
            (Some(url), Some(key)) => {
                let refreshed = session.configure_cloud(Some(CloudConfig {
                    url: url.clone(),
                    key: key.clone(),
                }))?;
                if refreshed {
                    success(format!(
                        "Cloud mirroring enabled; pulled {} students and {} records.",
                        session.store().roster().len(),
                        session.store().records().len()
                    ));
                } else {
                    warning("Cloud mirroring enabled, but the first sync did not refresh data (see `log --print`).");
                }
            }
            (None, None) => {
                if *sync {
                    if session.cloud_config().is_none() {
                        warning("Cloud is not configured. Set it up with --url and --key.");
                    } else if session.pull_cloud()? {
                        success(format!(
                            "Sync completed: {} students, {} records.",
                            session.store().roster().len(),
                            session.store().records().len()
                        ));
                    } else {
                        warning("Sync did not refresh data (see `log --print`).");
                    }
                } else {
                    // status
                    match session.cloud_config() {
                        Some(config) => info(format!("Cloud mirroring is active: {}", config.url)),
                        None => info("Cloud mirroring is not configured."),
                    }
                }
            }
            _ => {
                return Err(AppError::Config(
                    "both --url and --key are required to configure the cloud".to_string(),
                ))
            }
        }
    }

    Ok(())
}
