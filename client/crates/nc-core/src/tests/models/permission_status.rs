use crate::PermissionStatus;

use std::str::FromStr;

#[test]
fn test_permission_status_default_is_undetermined() {
    assert_eq!(PermissionStatus::default(), PermissionStatus::Undetermined);
}

#[test]
fn test_permission_status_from_str() {
    assert_eq!(
        PermissionStatus::from_str("granted").unwrap(),
        PermissionStatus::Granted
    );
    assert_eq!(
        PermissionStatus::from_str("denied").unwrap(),
        PermissionStatus::Denied
    );
    assert!(PermissionStatus::from_str("maybe").is_err());
}

#[test]
fn test_permission_status_is_granted() {
    assert!(PermissionStatus::Granted.is_granted());
    assert!(!PermissionStatus::Denied.is_granted());
    assert!(!PermissionStatus::Undetermined.is_granted());
}
