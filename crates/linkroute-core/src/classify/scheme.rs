//! Target inference for non-web schemes.

use crate::candidate::{CandidateUrl, IntentUri};
use crate::config::RoutingConfig;
use crate::error::RouteError;
use crate::target::Target;

/// Infers the platform target of a native app-link URL.
///
/// Vendor schemes map to their platform; `intent:` URIs map through their
/// `package=` extra (or the inner `scheme=`), falling back to Generic; configured
/// app-link schemes are Generic. Anything else is `UnrecognizedScheme`.
pub fn native_target(url: &CandidateUrl, config: &RoutingConfig) -> Result<Target, RouteError> {
    let scheme = url.scheme();
    if let Some(target) = Target::from_scheme(scheme) {
        return Ok(target);
    }
    if scheme == "intent" {
        let target = IntentUri::parse(url)
            .ok()
            .and_then(|intent| {
                intent
                    .package
                    .as_deref()
                    .and_then(Target::from_package)
                    .or_else(|| intent.scheme.as_deref().and_then(Target::from_scheme))
            })
            .unwrap_or(Target::Generic);
        return Ok(target);
    }
    if config.is_app_scheme(scheme) {
        return Ok(Target::Generic);
    }
    Err(RouteError::UnrecognizedScheme(scheme.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(s: &str) -> Result<Target, RouteError> {
        native_target(&CandidateUrl::parse(s).unwrap(), &RoutingConfig::default())
    }

    #[test]
    fn vendor_schemes() {
        assert_eq!(infer("twitter://user?screen_name=foo"), Ok(Target::Twitter));
        assert_eq!(infer("vnd.youtube:abc123"), Ok(Target::YouTube));
        assert_eq!(infer("fb://profile/123"), Ok(Target::Facebook));
        assert_eq!(infer("INSTAGRAM://user?username=a"), Ok(Target::Instagram));
    }

    #[test]
    fn intent_uses_package_then_scheme() {
        assert_eq!(
            infer("intent://instagram.com/_u/a#Intent;package=com.instagram.android;scheme=https;end"),
            Ok(Target::Instagram)
        );
        assert_eq!(
            infer("intent://user?screen_name=a#Intent;scheme=twitter;end"),
            Ok(Target::Twitter)
        );
        assert_eq!(
            infer("intent://scan/#Intent;scheme=zxing;package=com.google.zxing.client.android;end"),
            Ok(Target::Generic)
        );
        assert_eq!(infer("intent://nothing"), Ok(Target::Generic));
    }

    #[test]
    fn configured_app_schemes_are_generic() {
        assert_eq!(infer("mailto:someone@example.com"), Ok(Target::Generic));
        assert_eq!(infer("tel:+15551234"), Ok(Target::Generic));
    }

    #[test]
    fn unknown_scheme() {
        assert_eq!(
            infer("myapp://foo"),
            Err(RouteError::UnrecognizedScheme("myapp".to_string()))
        );
    }
}
