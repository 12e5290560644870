mod config;
mod device_config;
mod error;
mod log_level;
mod logging_config;
mod registration_config;
mod storage_config;


pub use config::Config;
pub use device_config::DeviceConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use registration_config::RegistrationConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "NC_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".nutrichecker";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_ENDPOINT_URL: &str = "https://n8n.nutrichecker.top/webhook/register-push-token";
const DEFAULT_STORAGE_FILENAME: &str = "storage.db";
const DEFAULT_PLATFORM: nc_core::Platform = nc_core::Platform::Android;
const DEFAULT_PHYSICAL_DEVICE: bool = true;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
