use crate::{
    DEFAULT_IDENTIFIER_DOMAIN, DeviceInfo, Platform, PushToken, RegistrationRecord, TimezoneInfo,
    UserId,
};

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

fn sample_record() -> RegistrationRecord {
    let user_id = UserId::from_stored("2025060110304512345@nutrichecker.top");
    let token = PushToken::new(
        "tok-abc",
        Platform::Ios,
        DeviceInfo::new(
            Some("Apple".to_string()),
            Some("iPhone 15".to_string()),
            Some("iOS".to_string()),
            None,
        ),
    )
    .unwrap();
    let timezone = TimezoneInfo::new("Europe/Berlin", 120);
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 45).unwrap();

    RegistrationRecord::new(&user_id, &token, &timezone, at)
}

#[test]
fn test_registration_record_wire_shape() {
    let value = serde_json::to_value(sample_record()).unwrap();

    assert_eq!(
        value,
        json!({
            "userId": "2025060110304512345@nutrichecker.top",
            "pushToken": "tok-abc",
            "platform": "ios",
            "deviceInfo": {
                "brand": "Apple",
                "modelName": "iPhone 15",
                "osName": "iOS",
                "osVersion": null
            },
            "timezone": "Europe/Berlin",
            "timezoneOffset": 120,
            "registeredAt": "2025-06-01T08:30:45.000Z"
        })
    );
}

#[test]
fn test_registered_at_is_iso8601() {
    let record = sample_record();

    assert!(DateTime::parse_from_rfc3339(&record.registered_at).is_ok());
}

#[test]
fn test_generated_user_id_carried_verbatim() {
    let user_id = UserId::generate(DEFAULT_IDENTIFIER_DOMAIN);
    let token = PushToken::new("tok", Platform::Android, DeviceInfo::default()).unwrap();

    let record = RegistrationRecord::new(
        &user_id,
        &token,
        &TimezoneInfo::current(Some("UTC")),
        Utc::now(),
    );

    assert_eq!(record.user_id, user_id.as_str());
    assert_eq!(record.timezone, "UTC");
}
