pub mod identity_repository;
pub mod registration_flag_repository;
