use crate::{DEFAULT_IDENTIFIER_DOMAIN, UserId};

use chrono::{Local, NaiveDate};
use googletest::assert_that;
use googletest::prelude::{anything, ends_with, eq, err, ok, starts_with};

fn fixed_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(10, 30, 45)
        .unwrap()
}

#[test]
fn given_fixed_time_when_generate_at_then_timestamp_prefix_and_domain() {
    let id = UserId::generate_at(DEFAULT_IDENTIFIER_DOMAIN, fixed_time());

    assert_that!(id.as_str(), starts_with("20250601103045"));
    assert_that!(id.as_str(), ends_with("@nutrichecker.top"));
    assert_that!(id.as_str().len(), eq(14 + 5 + 1 + DEFAULT_IDENTIFIER_DOMAIN.len()));
}

#[test]
fn given_generated_id_when_parse_then_ok() {
    for _ in 0..100 {
        let id = UserId::generate(DEFAULT_IDENTIFIER_DOMAIN);
        let parsed = UserId::parse(id.as_str(), DEFAULT_IDENTIFIER_DOMAIN);
        assert_that!(parsed, ok(anything()));
    }
}

#[test]
fn given_generated_id_then_suffix_is_five_digits_without_leading_zero() {
    for _ in 0..100 {
        let id = UserId::generate_at(DEFAULT_IDENTIFIER_DOMAIN, fixed_time());
        let suffix: u32 = id.as_str()[14..19].parse().unwrap();
        assert!((10_000..=99_999).contains(&suffix));
    }
}

#[test]
fn given_generated_id_then_created_at_is_not_in_the_future() {
    let id = UserId::generate(DEFAULT_IDENTIFIER_DOMAIN);

    let created_at = id.created_at().unwrap();

    assert!(created_at <= Local::now().naive_local());
}

#[test]
fn given_fixed_time_when_created_at_then_roundtrips() {
    let id = UserId::generate_at(DEFAULT_IDENTIFIER_DOMAIN, fixed_time());

    assert_that!(id.created_at(), eq(Some(fixed_time())));
}

#[test]
fn given_wrong_domain_when_parse_then_error() {
    let result = UserId::parse("2025060110304512345@example.com", DEFAULT_IDENTIFIER_DOMAIN);

    assert_that!(result, err(anything()));
}

#[test]
fn given_invalid_month_when_parse_then_error() {
    let result = UserId::parse("2025130110304512345@nutrichecker.top", DEFAULT_IDENTIFIER_DOMAIN);

    assert_that!(result, err(anything()));
}

#[test]
fn given_short_local_part_when_parse_then_error() {
    let result = UserId::parse("20250601103045123@nutrichecker.top", DEFAULT_IDENTIFIER_DOMAIN);

    assert_that!(result, err(anything()));
}

#[test]
fn given_legacy_value_when_from_stored_then_kept_verbatim() {
    let id = UserId::from_stored("legacy-user");

    assert_that!(id.as_str(), eq("legacy-user"));
    assert!(id.created_at().is_none());
}
