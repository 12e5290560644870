use nc_core::PushToken;

use std::sync::atomic::{AtomicBool, Ordering};

use log::info;
use tokio::sync::RwLock;

/// Per-process push state, created once at startup and shared by `Arc`.
///
/// Holds at most one token; a new token replaces the old one.
#[derive(Debug, Default)]
pub struct PushContext {
    token: RwLock<Option<PushToken>>,
    initialized: AtomicBool,
    permission_requested: AtomicBool,
}

impl PushContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn token(&self) -> Option<PushToken> {
        self.token.read().await.clone()
    }

    pub async fn set_token(&self, token: PushToken) {
        let mut held = self.token.write().await;
        if let Some(previous) = held.as_ref()
            && previous.value != token.value
        {
            info!("Push token rotated");
        }
        *held = Some(token);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    pub(crate) fn mark_initialized(&self) {
        self.initialized.store(true, Ordering::Release);
    }

    /// Record that the permission prompt was shown. Returns whether it had
    /// already been shown this session.
    pub(crate) fn mark_permission_requested(&self) -> bool {
        self.permission_requested.swap(true, Ordering::AcqRel)
    }
}
