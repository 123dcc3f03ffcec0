//! Launch targets: the per-platform strategy families a link can be routed to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which per-platform dispatch strategy applies to an external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    YouTube,
    Facebook,
    Instagram,
    /// Twitter / X.
    Twitter,
    TikTok,
    LinkedIn,
    Pinterest,
    /// No platform-specific handling; goes straight to the default handler.
    Generic,
}

impl Target {
    pub const ALL: [Target; 8] = [
        Target::YouTube,
        Target::Facebook,
        Target::Instagram,
        Target::Twitter,
        Target::TikTok,
        Target::LinkedIn,
        Target::Pinterest,
        Target::Generic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Target::YouTube => "youtube",
            Target::Facebook => "facebook",
            Target::Instagram => "instagram",
            Target::Twitter => "twitter",
            Target::TikTok => "tiktok",
            Target::LinkedIn => "linkedin",
            Target::Pinterest => "pinterest",
            Target::Generic => "generic",
        }
    }

    /// Application package of the platform's native app, if it has one.
    pub fn package(self) -> Option<&'static str> {
        match self {
            Target::YouTube => Some("com.google.android.youtube"),
            Target::Facebook => Some("com.facebook.katana"),
            Target::Instagram => Some("com.instagram.android"),
            Target::Twitter => Some("com.twitter.android"),
            Target::TikTok => Some("com.zhiliaoapp.musically"),
            Target::LinkedIn => Some("com.linkedin.android"),
            Target::Pinterest => Some("com.pinterest"),
            Target::Generic => None,
        }
    }

    /// Vendor URI schemes registered by the platform's native app.
    pub fn native_schemes(self) -> &'static [&'static str] {
        match self {
            Target::YouTube => &["vnd.youtube", "youtube"],
            Target::Facebook => &["fb", "facebook"],
            Target::Instagram => &["instagram"],
            Target::Twitter => &["twitter"],
            Target::TikTok => &["snssdk1233", "snssdk1128", "tiktok"],
            Target::LinkedIn => &["linkedin"],
            Target::Pinterest => &["pinterest"],
            Target::Generic => &[],
        }
    }

    /// Target owning a vendor scheme. `scheme` must already be lower-case.
    pub fn from_scheme(scheme: &str) -> Option<Target> {
        Target::ALL
            .into_iter()
            .find(|t| t.native_schemes().contains(&scheme))
    }

    /// Target owning an application package (as named by an `intent:` URI).
    pub fn from_package(package: &str) -> Option<Target> {
        Target::ALL
            .into_iter()
            .find(|t| t.package() == Some(package))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown target {0:?} (expected one of youtube, facebook, instagram, twitter, tiktok, linkedin, pinterest, generic)")]
pub struct ParseTargetError(String);

impl FromStr for Target {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "x" {
            return Ok(Target::Twitter);
        }
        Target::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or(ParseTargetError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_lookup() {
        assert_eq!(Target::from_scheme("vnd.youtube"), Some(Target::YouTube));
        assert_eq!(Target::from_scheme("fb"), Some(Target::Facebook));
        assert_eq!(Target::from_scheme("snssdk1233"), Some(Target::TikTok));
        assert_eq!(Target::from_scheme("mailto"), None);
    }

    #[test]
    fn package_lookup() {
        assert_eq!(
            Target::from_package("com.instagram.android"),
            Some(Target::Instagram)
        );
        assert_eq!(Target::from_package("com.example.unknown"), None);
        assert_eq!(Target::Generic.package(), None);
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("YouTube".parse::<Target>().unwrap(), Target::YouTube);
        assert_eq!("x".parse::<Target>().unwrap(), Target::Twitter);
        assert!("myspace".parse::<Target>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            target: Target,
        }
        let w: Wrap = toml::from_str(r#"target = "linkedin""#).unwrap();
        assert_eq!(w.target, Target::LinkedIn);
    }
}
