//! Shared data types for the feed builder.
//! Implemented as newtypes to enforce invariants.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Date formats without an offset; these are read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Publish date of a post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostDate(DateTime<Utc>);

impl PostDate {
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.with_timezone(&Utc)));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Some(Self(dt.with_timezone(&Utc)));
        }
        if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%:z") {
            return Some(Self(dt.with_timezone(&Utc)));
        }

        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| {
                NAIVE_DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .map(|naive| Self(naive.and_utc()))
    }

    /// Read a front matter value. Strings are parsed, integers are
    /// milliseconds since the Unix epoch.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => n
                .as_i64()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(Self),
            _ => None,
        }
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// The Unix epoch.
    pub fn epoch() -> Self {
        Self::default()
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn to_rfc2822(&self) -> String {
        self.0.to_rfc2822()
    }

    /// RFC 3339 with millisecond precision and a `Z` suffix.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn as_fixed(&self) -> DateTime<FixedOffset> {
        DateTime::<FixedOffset>::from(self.0)
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Absolute site origin, stored without a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SiteUrl(String);

impl SiteUrl {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL for a path below the site root.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }

    /// Prefix the site origin onto a root-relative path. Anything else is
    /// returned untouched.
    pub fn absolutize(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.0)
        } else {
            path.to_string()
        }
    }

    /// Point the first root-relative `src="/` in `html` at the site origin.
    /// Later occurrences are left as they are.
    pub fn absolutize_first_src(&self, html: &str) -> String {
        html.replacen(r#"src="/"#, &format!(r#"src="{}/"#, self.0), 1)
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests;
