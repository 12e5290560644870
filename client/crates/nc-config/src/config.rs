use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRNAME,
    DeviceConfig, LoggingConfig, RegistrationConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub registration: RegistrationConfig,
    pub storage: StorageConfig,
    pub device: DeviceConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for NC_CONFIG_DIR env var, else use ./.nutrichecker/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply NC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: NC_CONFIG_DIR env var > ./.nutrichecker/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRNAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.registration.validate()?;
        self.storage.validate()?;
        self.device.validate()?;
        Ok(())
    }

    /// Absolute path of the key-value store file.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.path))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  registration: {}", self.registration.endpoint_url);
        info!(
            "  identifier domain: {}",
            self.registration.identifier_domain
        );
        info!("  storage: {}", self.storage.path);
        info!(
            "  device: {} {} {} (physical: {})",
            self.device.platform,
            self.device.brand.as_deref().unwrap_or("unknown"),
            self.device.model_name.as_deref().unwrap_or("unknown"),
            self.device.physical_device
        );
        info!(
            "  timezone: {}",
            self.device.timezone.as_deref().unwrap_or("host")
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Registration
        Self::apply_env_string(
            "NC_REGISTRATION_ENDPOINT_URL",
            &mut self.registration.endpoint_url,
        );
        Self::apply_env_string(
            "NC_IDENTIFIER_DOMAIN",
            &mut self.registration.identifier_domain,
        );

        // Storage
        Self::apply_env_string("NC_STORAGE_PATH", &mut self.storage.path);

        // Device
        Self::apply_env_string("NC_DEVICE_PLATFORM", &mut self.device.platform);
        Self::apply_env_option_string("NC_DEVICE_BRAND", &mut self.device.brand);
        Self::apply_env_option_string("NC_DEVICE_MODEL_NAME", &mut self.device.model_name);
        Self::apply_env_option_string("NC_DEVICE_OS_NAME", &mut self.device.os_name);
        Self::apply_env_option_string("NC_DEVICE_OS_VERSION", &mut self.device.os_version);
        Self::apply_env_option_string("NC_DEVICE_TIMEZONE", &mut self.device.timezone);
        Self::apply_env_bool("NC_DEVICE_PHYSICAL", &mut self.device.physical_device);

        // Logging
        Self::apply_env_parse("NC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("NC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("NC_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
