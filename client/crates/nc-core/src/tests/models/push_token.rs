use crate::{DeviceInfo, Platform, PushToken};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok};

#[test]
fn given_blank_token_when_new_then_error() {
    let result = PushToken::new("   ", Platform::Ios, DeviceInfo::default());

    assert_that!(result, err(anything()));
}

#[test]
fn given_token_when_new_then_ok() {
    let result = PushToken::new("ExponentPushToken[abc]", Platform::Android, DeviceInfo::default());

    assert_that!(result, ok(anything()));
    let token = result.unwrap();
    assert_that!(token.value.as_str(), eq("ExponentPushToken[abc]"));
    assert_that!(token.platform, eq(Platform::Android));
}

#[test]
fn given_blank_device_fields_when_new_then_treated_as_unknown() {
    let device = DeviceInfo::new(Some("".to_string()), None, Some("iOS".to_string()), None);

    assert_that!(device.brand, none());
    assert_that!(device.os_name.as_deref(), eq(Some("iOS")));
}
