//! Push-token registration for the NutriChecker client.
//!
//! Resolves the installation's user id, obtains a push token from the device
//! and keeps the remote registration webhook's copy of that pairing current.
//! Every public operation reports failure as a value; nothing here can abort
//! app startup.

pub(crate) mod client;
pub(crate) mod diagnostics;
pub(crate) mod error;
pub(crate) mod push_context;
pub(crate) mod push_service;
pub(crate) mod registration_synchronizer;
pub(crate) mod static_token_provider;
pub(crate) mod token_provider;


pub use client::{RegistrationClient, RegistrationError, RegistrationResult};
pub use diagnostics::failure_hint;
pub use error::{PushError, Result as PushResult};
pub use push_context::PushContext;
pub use push_service::PushService;
pub use registration_synchronizer::RegistrationSynchronizer;
pub use static_token_provider::StaticTokenProvider;
pub use token_provider::PushTokenProvider;
