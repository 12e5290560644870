use crate::Platform;

use std::str::FromStr;

#[test]
fn test_platform_as_str() {
    assert_eq!(Platform::Ios.as_str(), "ios");
    assert_eq!(Platform::Android.as_str(), "android");
}

#[test]
fn test_platform_from_str() {
    assert_eq!(Platform::from_str("ios").unwrap(), Platform::Ios);
    assert_eq!(Platform::from_str("Android").unwrap(), Platform::Android);
    assert!(Platform::from_str("windows").is_err());
}

#[test]
fn test_platform_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Platform::Ios).unwrap(), "\"ios\"");
}
