use crate::ui::messages::{success, warning};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the storage slot holding the serialized episode log.
    pub storage: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: Self::storage_file().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".frecuencia")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("frecuencia.conf")
    }

    /// Return the full path of the default storage slot
    pub fn storage_file() -> PathBuf {
        Self::config_dir().join("frecuencia.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable config never blocks startup.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!("Unreadable configuration file ({}), using defaults", e));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!("Failed to read configuration file ({}), using defaults", e));
                Self::default()
            }
        }
    }

    /// Initialize configuration and an empty storage slot
    pub fn init_all(custom_storage: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Storage path: user provided or default
        let storage_path = if let Some(name) = custom_storage {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::storage_file()
        };

        let config = Config {
            storage: storage_path.to_string_lossy().to_string(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file:  {:?}", Self::config_file()));
        }

        // Create an empty episode log if the slot does not exist yet
        if !storage_path.exists() {
            fs::write(&storage_path, "[]")?;
        }

        success(format!("Episode log:  {:?}", storage_path));

        Ok(())
    }
}
