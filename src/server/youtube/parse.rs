//! Parsing of user supplied channel identifiers and API values.

use std::sync::LazyLock;

use regex::Regex;

static CHANNEL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^UC[\w-]{22}$").expect("channel id regex"));
static CHANNEL_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"youtube\.com/channel/(UC[\w-]{22})").expect("channel url regex")
});
static HANDLE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/@([\w-]+)").expect("handle url regex"));
static CUSTOM_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/c/([\w-]+)").expect("custom url regex"));
static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$").expect("duration regex")
});

/// What a channel URL, handle or id resolved to before any API lookup.
#[derive(Debug, PartialEq, Eq)]
pub enum ChannelIdentifier {
    /// A `UC…` channel id, usable directly.
    Id(String),
    /// A handle (`@name`) or custom name that needs a search lookup.
    Query(String),
}

/// Parses a channel id, channel URL, handle URL, custom URL or bare handle.
///
/// Input that matches none of the URL forms is treated as a handle, adding the
/// leading `@` when missing.
pub fn parse_channel_identifier(input: &str) -> ChannelIdentifier {
    let input = input.trim();

    if CHANNEL_ID.is_match(input) {
        return ChannelIdentifier::Id(input.to_string());
    }
    if let Some(caps) = CHANNEL_URL.captures(input) {
        return ChannelIdentifier::Id(caps[1].to_string());
    }
    if let Some(caps) = HANDLE_URL.captures(input) {
        return ChannelIdentifier::Query(format!("@{}", &caps[1]));
    }
    if let Some(caps) = CUSTOM_URL.captures(input) {
        return ChannelIdentifier::Query(caps[1].to_string());
    }
    if input.starts_with('@') {
        ChannelIdentifier::Query(input.to_string())
    } else {
        ChannelIdentifier::Query(format!("@{}", input))
    }
}

/// Seconds in an ISO-8601 duration such as `P1DT1H2M10S`; 0 when unparseable.
///
/// Saturates at `i32::MAX`.
pub fn parse_duration_seconds(duration: &str) -> i32 {
    let Some(caps) = ISO_DURATION.captures(duration) else {
        return 0;
    };

    let part = |i: usize| {
        caps.get(i)
            .map(|m| m.as_str().parse::<i64>().unwrap_or(i64::MAX))
            .unwrap_or(0)
    };

    let seconds = part(1)
        .saturating_mul(86_400)
        .saturating_add(part(2).saturating_mul(3600))
        .saturating_add(part(3).saturating_mul(60))
        .saturating_add(part(4));

    i32::try_from(seconds).unwrap_or(i32::MAX)
}

/// True when any tag contains any required tag, ignoring case.
pub fn is_eligible(tags: &[String], required_tags: &[String]) -> bool {
    let tags: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();

    required_tags.iter().any(|required| {
        let required = required.to_lowercase();
        tags.iter().any(|tag| tag.contains(&required))
    })
}
