//! Per-target launch strategies.

use serde::Serialize;

use super::attempt::{AttemptOutcome, LaunchAttempt};
use crate::candidate::{
    instagram_username, twitter_screen_name, youtube_video_id, CandidateUrl, IntentUri,
};
use crate::error::RouteError;
use crate::launcher::{LaunchResult, LaunchTarget, PlatformLauncher};
use crate::target::Target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// `vnd.youtube:<video id>`.
    YouTubeApp,
    /// `http://instagram.com/_u/<username>` scoped to the Instagram package.
    InstagramProfile,
    /// `twitter://user?screen_name=<name>`.
    TwitterProfile,
    /// Original URL scoped to the target's application package.
    AppPackage,
    /// Native app-link URL launched exactly as given.
    DirectUri,
    /// `S.browser_fallback_url` of an `intent:` URI, in the default handler.
    IntentFallback,
    /// Original URL in the default external handler. Always last.
    DefaultHandler,
}

impl Strategy {
    /// Ordered target-specific strategies, excluding the terminal default handler.
    pub fn chain(target: Target, url: &CandidateUrl) -> &'static [Strategy] {
        if !url.is_web() {
            return match (url.scheme(), target) {
                ("intent", _) => &[Strategy::DirectUri, Strategy::IntentFallback],
                (_, Target::Generic) => &[],
                _ => &[Strategy::DirectUri],
            };
        }
        match target {
            Target::YouTube => &[Strategy::YouTubeApp],
            Target::Instagram => &[Strategy::InstagramProfile],
            Target::Twitter => &[Strategy::TwitterProfile],
            Target::Facebook | Target::TikTok | Target::LinkedIn | Target::Pinterest => {
                &[Strategy::AppPackage]
            }
            Target::Generic => &[],
        }
    }

    /// Builds the launch request for this strategy without launching it.
    pub fn plan(self, target: Target, url: &CandidateUrl) -> Result<LaunchTarget, RouteError> {
        let launch = match self {
            Strategy::YouTubeApp => LaunchTarget::AppUri {
                uri: format!("vnd.youtube:{}", youtube_video_id(url)?),
            },
            Strategy::InstagramProfile => LaunchTarget::Package {
                package: package_of(Target::Instagram)?,
                uri: format!("http://instagram.com/_u/{}", instagram_username(url)?),
            },
            Strategy::TwitterProfile => LaunchTarget::AppUri {
                uri: format!("twitter://user?screen_name={}", twitter_screen_name(url)?),
            },
            Strategy::AppPackage => LaunchTarget::Package {
                package: package_of(target)?,
                uri: url.as_str().to_string(),
            },
            Strategy::DirectUri => LaunchTarget::AppUri {
                uri: url.as_str().to_string(),
            },
            Strategy::IntentFallback => {
                let fallback = IntentUri::parse(url)?.browser_fallback_url.ok_or_else(|| {
                    RouteError::MalformedUrl(format!(
                        "intent without browser fallback: {}",
                        url.as_str()
                    ))
                })?;
                let web = CandidateUrl::parse(&fallback)
                    .ok()
                    .filter(CandidateUrl::is_web)
                    .ok_or_else(|| {
                        RouteError::MalformedUrl(format!(
                            "intent browser fallback is not http(s): {fallback}"
                        ))
                    })?;
                LaunchTarget::DefaultHandler {
                    uri: web.as_str().to_string(),
                }
            }
            Strategy::DefaultHandler => LaunchTarget::DefaultHandler {
                uri: url.as_str().to_string(),
            },
        };
        Ok(launch)
    }

    /// Plans and launches once, recording the outcome.
    pub fn attempt<L: PlatformLauncher + ?Sized>(
        self,
        target: Target,
        url: &CandidateUrl,
        launcher: &L,
    ) -> LaunchAttempt {
        let launch = match self.plan(target, url) {
            Ok(launch) => launch,
            Err(err) => {
                tracing::debug!(strategy = ?self, %target, "falling through: {err}");
                return LaunchAttempt {
                    strategy: self,
                    launch: None,
                    outcome: AttemptOutcome::Malformed,
                    error: Some(err),
                };
            }
        };

        match launcher.try_launch(&launch) {
            LaunchResult::Resolved => {
                tracing::debug!(strategy = ?self, %target, "launched {launch}");
                LaunchAttempt {
                    strategy: self,
                    launch: Some(launch),
                    outcome: AttemptOutcome::Succeeded,
                    error: None,
                }
            }
            LaunchResult::Unresolved => {
                let err = RouteError::TargetAppAbsent(launch.to_string());
                tracing::debug!(strategy = ?self, %target, "falling through: {err}");
                LaunchAttempt {
                    strategy: self,
                    launch: Some(launch),
                    outcome: AttemptOutcome::AppAbsent,
                    error: Some(err),
                }
            }
        }
    }
}

fn package_of(target: Target) -> Result<String, RouteError> {
    target
        .package()
        .map(str::to_string)
        .ok_or_else(|| RouteError::TargetAppAbsent(format!("{target} has no application package")))
}
