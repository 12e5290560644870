use nc_core::{DeviceInfo, PermissionStatus, Platform, PushToken};
use nc_push::{PushError, PushResult, PushTokenProvider};

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Scriptable push service
pub struct MockProvider {
    pub platform: Platform,
    pub physical_device: bool,
    pub token: Option<String>,
    pub failure: Option<String>,
    /// Status before and after the prompt
    pub status: Mutex<PermissionStatus>,
    pub answer: PermissionStatus,
    pub permission_requests: AtomicUsize,
    pub acquisitions: AtomicUsize,
}

impl MockProvider {
    pub fn granted(token: &str) -> Self {
        Self {
            platform: Platform::Android,
            physical_device: true,
            token: Some(token.to_string()),
            failure: None,
            status: Mutex::new(PermissionStatus::Granted),
            answer: PermissionStatus::Granted,
            permission_requests: AtomicUsize::new(0),
            acquisitions: AtomicUsize::new(0),
        }
    }

    pub fn undetermined(token: &str, answer: PermissionStatus) -> Self {
        Self {
            status: Mutex::new(PermissionStatus::Undetermined),
            answer,
            ..Self::granted(token)
        }
    }

    pub fn set_status(&self, status: PermissionStatus) {
        *self.status.lock().unwrap() = status;
    }

    pub fn permission_requests(&self) -> usize {
        self.permission_requests.load(Ordering::SeqCst)
    }

    pub fn acquisitions(&self) -> usize {
        self.acquisitions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PushTokenProvider for MockProvider {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn is_physical_device(&self) -> bool {
        self.physical_device
    }

    async fn permission_status(&self) -> PushResult<PermissionStatus> {
        Ok(*self.status.lock().unwrap())
    }

    async fn request_permission(&self) -> PushResult<PermissionStatus> {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        let answer = self.answer;
        *self.status.lock().unwrap() = answer;
        Ok(answer)
    }

    async fn acquire_token(&self) -> PushResult<PushToken> {
        self.acquisitions.fetch_add(1, Ordering::SeqCst);

        if let Some(ref message) = self.failure {
            return Err(PushError::token_acquisition(message.clone()));
        }

        let value = self
            .token
            .clone()
            .ok_or_else(|| PushError::token_acquisition("no token"))?;
        Ok(PushToken::new(value, self.platform, DeviceInfo::default())?)
    }
}
