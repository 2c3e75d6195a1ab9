use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the durable state blobs and the audit log
    pub storage_dir: String,
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
}

fn default_top_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: Self::storage_dir_default().to_string_lossy().to_string(),
            top_limit: default_top_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tardylog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tardylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tardylog.conf")
    }

    /// Default location of the state blobs
    pub fn storage_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A corrupt config file falls back to defaults rather than aborting:
    /// durable state lives elsewhere and must stay reachable.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_yaml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Config::default()
        }
    }

    /// Initialize configuration file and storage directory
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&config.storage_dir)?;
        println!("✅ Storage dir: {}", config.storage_dir);

        Ok(())
    }
}
