use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};
use serde_json::json;

use super::{PostDate, SiteUrl};

const DOMAIN: &str = "https://hujiacheng.netlify.app";

#[test]
fn plain_dates_are_utc_midnight() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&(1970i32..=2100, 1u32..=12, 1u32..=28), |(year, month, day)| {
            let s = format!("{year:04}-{month:02}-{day:02}");
            let parsed = PostDate::parse(&s).expect("valid date");
            prop_assert_eq!(parsed.to_rfc3339(), format!("{s}T00:00:00.000Z"));
            Ok(())
        })
        .unwrap();
}

#[test]
fn out_of_range_dates_are_rejected() {
    let mut runner = TestRunner::new(Config {
        cases: 16,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&(1970i32..=2100, 13u32..=99, 32u32..=99), |(year, month, day)| {
            let s = format!("{year:04}-{month:02}-{day:02}");
            prop_assert!(PostDate::parse(&s).is_none());
            Ok(())
        })
        .unwrap();
}

#[test]
fn offsets_are_normalised_to_utc() {
    let date = PostDate::parse("2024-03-01T08:30:00+08:00").unwrap();
    assert_eq!(date.to_rfc3339(), "2024-03-01T00:30:00.000Z");

    let spaced = PostDate::parse("2024-03-01 08:30:00+08:00").unwrap();
    assert_eq!(spaced, date);

    let rfc2822 = PostDate::parse("Fri, 01 Mar 2024 00:30:00 +0000").unwrap();
    assert_eq!(rfc2822, date);
}

#[test]
fn naive_datetimes_are_read_as_utc() {
    let date = PostDate::parse("2023-12-31 23:59").unwrap();
    assert_eq!(date.to_rfc3339(), "2023-12-31T23:59:00.000Z");
    assert_eq!(
        PostDate::parse("2023-12-31T23:59:10").unwrap().to_rfc3339(),
        "2023-12-31T23:59:10.000Z"
    );
}

#[test]
fn garbage_is_not_a_date() {
    for raw in ["", "   ", "yesterday", "2024-13-40", "not a date at all"] {
        assert!(PostDate::parse(raw).is_none(), "{raw:?} parsed");
    }
}

#[test]
fn values_accept_strings_and_millis() {
    assert_eq!(
        PostDate::from_value(&json!("2024-01-02")),
        PostDate::parse("2024-01-02")
    );
    let millis = PostDate::from_value(&json!(86_400_000)).unwrap();
    assert_eq!(millis.to_rfc3339(), "1970-01-02T00:00:00.000Z");
    assert!(PostDate::from_value(&json!(true)).is_none());
    assert!(PostDate::from_value(&json!(["2024-01-02"])).is_none());
}

#[test]
fn ordering_follows_time() {
    let mut runner = TestRunner::new(Config {
        cases: 64,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&(0i64..4_000_000_000_000, 0i64..4_000_000_000_000), |(a, b)| {
            let da = PostDate::from_value(&json!(a)).unwrap();
            let db = PostDate::from_value(&json!(b)).unwrap();
            prop_assert_eq!(da.cmp(&db), a.cmp(&b));
            prop_assert_eq!(da.timestamp_millis(), a);
            Ok(())
        })
        .unwrap();
}

#[test]
fn epoch_is_the_default() {
    assert_eq!(PostDate::epoch().timestamp_millis(), 0);
    assert!(PostDate::epoch().to_rfc2822().ends_with("Jan 1970 00:00:00 +0000"));
}

#[test]
fn absolutize_only_touches_root_relative_paths() {
    let site = SiteUrl::new(DOMAIN);
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[A-Za-z0-9/._-]{0,24}", |tail| {
            let rooted = format!("/{tail}");
            prop_assert_eq!(site.absolutize(&rooted), format!("{DOMAIN}{rooted}"));

            let remote = format!("https://example.com/{tail}");
            prop_assert_eq!(site.absolutize(&remote), remote.clone());
            Ok(())
        })
        .unwrap();
}

#[test]
fn trailing_slash_is_dropped() {
    let site = SiteUrl::new("https://hujiacheng.netlify.app/");
    assert_eq!(site.as_str(), DOMAIN);
    assert_eq!(site.join("/feed.xml"), format!("{DOMAIN}/feed.xml"));
    assert_eq!(site.join("feed.xml"), format!("{DOMAIN}/feed.xml"));
}

#[test]
fn only_the_first_src_is_rewritten() {
    let site = SiteUrl::new(DOMAIN);
    let html = r#"<img src="/images/a.png"><img src="/images/a.png">"#;
    let out = site.absolutize_first_src(html);
    assert_eq!(
        out,
        format!(r#"<img src="{DOMAIN}/images/a.png"><img src="/images/a.png">"#)
    );

    let untouched = r#"<img src="images/a.png">"#;
    assert_eq!(site.absolutize_first_src(untouched), untouched);
}
