pub(crate) mod error;
pub(crate) mod registration_client;

pub use error::{RegistrationError, Result as RegistrationResult};
pub use registration_client::RegistrationClient;
