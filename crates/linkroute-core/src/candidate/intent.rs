//! `intent:` URI extras.
//!
//! Format: `intent://host/path#Intent;scheme=s;package=p;S.browser_fallback_url=u;end`.
//! Extras are `;`-separated `key=value` pairs with percent-encoded values.

use super::CandidateUrl;
use crate::error::RouteError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentUri {
    pub scheme: Option<String>,
    pub package: Option<String>,
    pub browser_fallback_url: Option<String>,
}

impl IntentUri {
    pub fn parse(c: &CandidateUrl) -> Result<Self, RouteError> {
        if c.scheme() != "intent" {
            return Err(RouteError::MalformedUrl(format!(
                "not an intent URI: {}",
                c.as_str()
            )));
        }
        let body = c
            .fragment()
            .and_then(|f| f.strip_prefix("Intent;"))
            .ok_or_else(|| {
                RouteError::MalformedUrl(format!("intent URI without extras: {}", c.as_str()))
            })?;

        let mut out = IntentUri::default();
        let pairs = body.replace(';', "&");
        for (key, value) in url::form_urlencoded::parse(pairs.as_bytes()) {
            let value = value.into_owned();
            match &*key {
                "end" => break,
                "scheme" => out.scheme = Some(value.to_ascii_lowercase()),
                "package" => out.package = Some(value),
                "S.browser_fallback_url" => out.browser_fallback_url = Some(value),
                _ => {}
            }
        }
        Ok(out)
    }
}
