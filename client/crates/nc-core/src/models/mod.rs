pub mod device_info;
pub mod permission_status;
pub mod platform;
pub mod push_token;
pub mod registration_record;
pub mod timezone_info;
pub mod user_id;
