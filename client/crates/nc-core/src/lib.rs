pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use models::device_info::DeviceInfo;
pub use models::permission_status::PermissionStatus;
pub use models::platform::Platform;
pub use models::push_token::PushToken;
pub use models::registration_record::RegistrationRecord;
pub use models::timezone_info::TimezoneInfo;
pub use models::user_id::UserId;

/// Domain suffix of every generated identifier.
pub const DEFAULT_IDENTIFIER_DOMAIN: &str = "nutrichecker.top";
