use crate::{ConfigError, ConfigErrorResult, DEFAULT_PHYSICAL_DEVICE, DEFAULT_PLATFORM};

use nc_core::{DeviceInfo, Platform};

use serde::Deserialize;

/// Description of the device this client runs on.
///
/// On a handset these values come from the OS; here they are configured so
/// the registration flow can run from a workstation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub platform: String,
    pub brand: Option<String>,
    pub model_name: Option<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    /// IANA timezone override; host zone when unset
    pub timezone: Option<String>,
    /// Push tokens are only issued to physical devices
    pub physical_device: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            platform: DEFAULT_PLATFORM.as_str().to_string(),
            brand: None,
            model_name: None,
            os_name: None,
            os_version: None,
            timezone: None,
            physical_device: DEFAULT_PHYSICAL_DEVICE,
        }
    }
}

impl DeviceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.platform()?;
        Ok(())
    }

    pub fn platform(&self) -> ConfigErrorResult<Platform> {
        self.platform.parse().map_err(|_| {
            ConfigError::device(format!(
                "device.platform must be 'ios' or 'android', got '{}'",
                self.platform
            ))
        })
    }

    pub fn device_info(&self) -> DeviceInfo {
        DeviceInfo::new(
            self.brand.clone(),
            self.model_name.clone(),
            self.os_name.clone(),
            self.os_version.clone(),
        )
    }
}
