//! Hour-bucketed cache keys.
//!
//! Every key embeds the local wall-clock hour, so each resource gets a fresh
//! slot once per hour regardless of the TTL its entry was stored with.

use chrono::{DateTime, Local, TimeZone};

/// Build a cache key for `resource` at the current local time.
///
/// Format: `resource-YYMMDDHH[-param:value-param:value...]`, with params
/// sorted by name so argument order never changes the key.
pub fn cache_key<'a, I>(resource: &str, params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    cache_key_at(resource, params, Local::now())
}

/// Same as [`cache_key`] with an explicit clock reading.
pub fn cache_key_at<'a, I, Tz>(resource: &str, params: I, at: DateTime<Tz>) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut params: Vec<(&str, &str)> = params.into_iter().collect();
    params.sort_unstable();

    let mut key = format!("{}-{}", resource, at.format("%y%m%d%H"));
    for (name, value) in params {
        key.push('-');
        key.push_str(name);
        key.push(':');
        key.push_str(value);
    }
    key
}
