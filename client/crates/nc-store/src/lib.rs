pub mod connection;
pub mod error;
pub mod key_value_store;
pub mod repositories;

pub use connection::sqlite_key_value_store::SqliteKeyValueStore;
pub use error::{Result, StoreError};
pub use key_value_store::KeyValueStore;
pub use repositories::identity_repository::IdentityRepository;
pub use repositories::registration_flag_repository::RegistrationFlagRepository;

/// Current identifier
pub const USER_ID_KEY: &str = "nutrichecker_user_id";
/// Identifier location used by earlier releases; migrated on first read
pub const LEGACY_USER_ID_KEY: &str = "userId";
/// Set to `"true"` after the first successful registration
pub const REGISTERED_FLAG_KEY: &str = "user_registered_in_profiles";
