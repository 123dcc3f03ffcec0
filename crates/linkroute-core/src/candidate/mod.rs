//! Candidate navigation URLs.
//!
//! A `CandidateUrl` is created per navigation event from the raw string the
//! browser host offers, and keeps that string untouched so every fallback can
//! open the exact URL the user tapped.

mod extract;
mod host;
mod intent;

pub use extract::{instagram_username, twitter_screen_name, youtube_video_id};
pub use host::host_matches;
pub use intent::IntentUri;

use crate::error::RouteError;
use serde::{Serialize, Serializer};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateUrl {
    raw: String,
    parsed: Url,
}

impl CandidateUrl {
    /// Parses a raw navigation target. Surrounding whitespace is dropped from
    /// both the parsed URL and the kept text; the rest is kept as given.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let raw = raw.trim();
        let parsed =
            Url::parse(raw).map_err(|e| RouteError::MalformedUrl(format!("{raw}: {e}")))?;
        Ok(Self {
            raw: raw.to_string(),
            parsed,
        })
    }

    /// The original navigation string, without surrounding whitespace.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lower-case scheme (the `url` crate normalises case on parse).
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    pub fn is_web(&self) -> bool {
        matches!(self.scheme(), "http" | "https")
    }

    /// Lower-cased host without a trailing dot, if the URL has one.
    pub fn host(&self) -> Option<String> {
        self.parsed
            .host_str()
            .map(|h| h.trim_end_matches('.').to_ascii_lowercase())
            .filter(|h| !h.is_empty())
    }

    pub fn path(&self) -> &str {
        self.parsed.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.parsed.query()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.parsed.fragment()
    }

    /// Decoded value of the first query parameter named `key`.
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.parsed
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Decoded values of every query parameter.
    pub fn query_values(&self) -> impl Iterator<Item = String> + '_ {
        self.parsed.query_pairs().map(|(_, v)| v.into_owned())
    }

    /// Non-empty path segments, in order.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.parsed
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
    }
}

/// Serialises as the original navigation string.
impl Serialize for CandidateUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_web_url() {
        let c = CandidateUrl::parse("https://My-PVL.com/wrapper.html?l=QKNK9F").unwrap();
        assert!(c.is_web());
        assert_eq!(c.scheme(), "https");
        assert_eq!(c.host().as_deref(), Some("my-pvl.com"));
        assert_eq!(c.path(), "/wrapper.html");
        assert_eq!(c.query_param("l").as_deref(), Some("QKNK9F"));
        assert_eq!(c.as_str(), "https://My-PVL.com/wrapper.html?l=QKNK9F");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let c = CandidateUrl::parse("HTTPS://example.com/").unwrap();
        assert_eq!(c.scheme(), "https");
        assert!(c.is_web());
        let c = CandidateUrl::parse("Twitter://user?screen_name=foo").unwrap();
        assert_eq!(c.scheme(), "twitter");
        assert!(!c.is_web());
    }

    #[test]
    fn parses_opaque_scheme() {
        let c = CandidateUrl::parse("mailto:someone@example.com").unwrap();
        assert_eq!(c.scheme(), "mailto");
        assert_eq!(c.host(), None);
    }

    #[test]
    fn keeps_raw_text() {
        let raw = "https://example.com";
        let c = CandidateUrl::parse(raw).unwrap();
        assert_eq!(c.as_str(), raw);
    }

    #[test]
    fn surrounding_whitespace_is_dropped() {
        let c = CandidateUrl::parse("  https://example.com/a\n").unwrap();
        assert_eq!(c.as_str(), "https://example.com/a");
        assert_eq!(c.scheme(), "https");
    }

    #[test]
    fn rejects_relative_and_garbage() {
        assert!(matches!(
            CandidateUrl::parse("/wrapper.html"),
            Err(RouteError::MalformedUrl(_))
        ));
        assert!(CandidateUrl::parse("").is_err());
    }

    #[test]
    fn path_segments_skip_empty() {
        let c = CandidateUrl::parse("https://instagram.com//someuser/").unwrap();
        let segs: Vec<_> = c.path_segments().collect();
        assert_eq!(segs, vec!["someuser"]);
    }
}
