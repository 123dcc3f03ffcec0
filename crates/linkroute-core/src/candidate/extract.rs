//! Per-platform identifier extraction from web URLs.
//!
//! Each extractor returns `RouteError::MalformedUrl` when the URL does not
//! carry a usable identifier; the dispatcher then falls through.

use super::{host_matches, CandidateUrl};
use crate::error::RouteError;

const INSTAGRAM_RESERVED: &[&str] = &[
    "p", "reel", "reels", "stories", "explore", "tv", "accounts", "direct", "about", "legal",
];

const TWITTER_RESERVED: &[&str] = &[
    "i",
    "home",
    "intent",
    "search",
    "hashtag",
    "share",
    "explore",
    "settings",
    "messages",
    "notifications",
];

fn malformed(c: &CandidateUrl, what: &str) -> RouteError {
    RouteError::MalformedUrl(format!("{what} not found in {}", c.as_str()))
}

fn is_video_id(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Video id from `watch?v=<id>`, `youtu.be/<id>`, or `/shorts|embed|live|v/<id>`.
pub fn youtube_video_id(c: &CandidateUrl) -> Result<String, RouteError> {
    let host = c.host().unwrap_or_default();
    let mut segments = c.path_segments();

    let id = if host_matches(&host, "youtu.be") {
        segments.next().map(str::to_string)
    } else {
        match segments.next() {
            Some("watch") => c.query_param("v"),
            Some("shorts" | "embed" | "live" | "v") => segments.next().map(str::to_string),
            _ => c.query_param("v"),
        }
    };

    id.filter(|id| is_video_id(id))
        .ok_or_else(|| malformed(c, "YouTube video id"))
}

/// Profile username: the first path segment, unless it names a non-profile page.
pub fn instagram_username(c: &CandidateUrl) -> Result<String, RouteError> {
    let first = c
        .path_segments()
        .next()
        .ok_or_else(|| malformed(c, "Instagram username"))?;
    let valid = first
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '.' || ch == '_');
    if !valid || INSTAGRAM_RESERVED.contains(&first) {
        return Err(malformed(c, "Instagram username"));
    }
    Ok(first.to_string())
}

/// Screen name: the first non-empty path segment after the domain (`@` stripped).
///
/// `t.co` paths are shortened-link codes and never yield a screen name.
pub fn twitter_screen_name(c: &CandidateUrl) -> Result<String, RouteError> {
    if host_matches(&c.host().unwrap_or_default(), "t.co") {
        return Err(malformed(c, "screen name"));
    }
    let first = c
        .path_segments()
        .next()
        .map(|s| s.trim_start_matches('@'))
        .filter(|s| !s.is_empty())
        .ok_or_else(|| malformed(c, "screen name"))?;
    let valid = first.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
    if !valid || TWITTER_RESERVED.contains(&first.to_ascii_lowercase().as_str()) {
        return Err(malformed(c, "screen name"));
    }
    Ok(first.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> CandidateUrl {
        CandidateUrl::parse(s).unwrap()
    }

    #[test]
    fn youtube_watch_param() {
        assert_eq!(
            youtube_video_id(&url("https://youtube.com/watch?v=abc123&t=5")).unwrap(),
            "abc123"
        );
        assert_eq!(
            youtube_video_id(&url("https://m.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"))
                .unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn youtube_short_host_and_paths() {
        assert_eq!(
            youtube_video_id(&url("https://youtu.be/abc123?si=x")).unwrap(),
            "abc123"
        );
        assert_eq!(
            youtube_video_id(&url("https://www.youtube.com/shorts/Zx_9-q")).unwrap(),
            "Zx_9-q"
        );
        assert_eq!(
            youtube_video_id(&url("https://www.youtube.com/embed/abc")).unwrap(),
            "abc"
        );
    }

    #[test]
    fn youtube_missing_id_is_malformed() {
        assert!(matches!(
            youtube_video_id(&url("https://youtube.com/channel/UC123")),
            Err(RouteError::MalformedUrl(_))
        ));
        assert!(youtube_video_id(&url("https://youtube.com/watch?v=")).is_err());
        assert!(youtube_video_id(&url("https://youtube.com/watch?v=a%20b")).is_err());
        assert!(youtube_video_id(&url("https://youtu.be/")).is_err());
    }

    #[test]
    fn instagram_profile() {
        assert_eq!(
            instagram_username(&url("https://instagram.com/someuser/")).unwrap(),
            "someuser"
        );
        assert_eq!(
            instagram_username(&url("https://www.instagram.com/some.user_1?hl=en")).unwrap(),
            "some.user_1"
        );
    }

    #[test]
    fn instagram_non_profile_pages() {
        assert!(instagram_username(&url("https://instagram.com/")).is_err());
        assert!(instagram_username(&url("https://instagram.com/p/Cxyz/")).is_err());
        assert!(instagram_username(&url("https://instagram.com/reel/Cxyz/")).is_err());
    }

    #[test]
    fn twitter_screen_names() {
        assert_eq!(
            twitter_screen_name(&url("https://twitter.com/foo")).unwrap(),
            "foo"
        );
        assert_eq!(
            twitter_screen_name(&url("https://x.com//foo/status/123")).unwrap(),
            "foo"
        );
        assert_eq!(
            twitter_screen_name(&url("https://x.com/@bar")).unwrap(),
            "bar"
        );
    }

    #[test]
    fn twitter_reserved_and_empty() {
        assert!(twitter_screen_name(&url("https://x.com/")).is_err());
        assert!(twitter_screen_name(&url("https://x.com/i/flow/login")).is_err());
        assert!(twitter_screen_name(&url("https://twitter.com/intent/tweet?text=hi")).is_err());
        assert!(twitter_screen_name(&url("https://twitter.com/Home")).is_err());
        assert!(twitter_screen_name(&url("https://t.co/AbC123xyz")).is_err());
    }
}
