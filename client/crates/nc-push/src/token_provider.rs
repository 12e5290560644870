use crate::PushResult;

use nc_core::{PermissionStatus, Platform, PushToken};

use async_trait::async_trait;

/// Device push service (APNs / FCM) as seen by the registration flow.
#[async_trait]
pub trait PushTokenProvider: Send + Sync {
    fn platform(&self) -> Platform;

    /// Simulators and emulators never receive tokens.
    fn is_physical_device(&self) -> bool;

    async fn permission_status(&self) -> PushResult<PermissionStatus>;

    /// Prompt the user. Suspends until they answer.
    async fn request_permission(&self) -> PushResult<PermissionStatus>;

    async fn acquire_token(&self) -> PushResult<PushToken>;
}
