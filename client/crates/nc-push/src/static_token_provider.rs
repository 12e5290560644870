use crate::{PushError, PushResult, PushTokenProvider};

use nc_config::{ConfigErrorResult, DeviceConfig};
use nc_core::{DeviceInfo, PermissionStatus, Platform, PushToken};

use async_trait::async_trait;

/// Provider that hands out a token supplied up front.
///
/// Used where no OS push service is reachable, e.g. when driving the flow
/// from a workstation with a token copied off a handset.
#[derive(Debug)]
pub struct StaticTokenProvider {
    token: Option<String>,
    platform: Platform,
    device: DeviceInfo,
    physical_device: bool,
    permission: PermissionStatus,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>, platform: Platform, device: DeviceInfo) -> Self {
        Self {
            token,
            platform,
            device,
            physical_device: true,
            permission: PermissionStatus::Undetermined,
        }
    }

    pub fn from_config(device: &DeviceConfig, token: Option<String>) -> ConfigErrorResult<Self> {
        Ok(Self::new(token, device.platform()?, device.device_info())
            .with_physical_device(device.physical_device))
    }

    pub fn with_physical_device(mut self, physical_device: bool) -> Self {
        self.physical_device = physical_device;
        self
    }

    pub fn with_permission(mut self, permission: PermissionStatus) -> Self {
        self.permission = permission;
        self
    }
}

#[async_trait]
impl PushTokenProvider for StaticTokenProvider {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn is_physical_device(&self) -> bool {
        self.physical_device
    }

    async fn permission_status(&self) -> PushResult<PermissionStatus> {
        Ok(self.permission)
    }

    /// Supplying a token counts as consent; an explicit denial stands.
    async fn request_permission(&self) -> PushResult<PermissionStatus> {
        match self.permission {
            PermissionStatus::Denied => Ok(PermissionStatus::Denied),
            _ => Ok(PermissionStatus::Granted),
        }
    }

    async fn acquire_token(&self) -> PushResult<PushToken> {
        let value = self
            .token
            .as_deref()
            .ok_or_else(|| PushError::token_acquisition("no push token supplied"))?;

        Ok(PushToken::new(value, self.platform, self.device.clone())?)
    }
}
