//! Navigation router: the entry point the browser host calls for every
//! navigation attempt.
//!
//! Classification and dispatch run synchronously on the caller's thread. The
//! config is read-only, and no state is carried from one navigation to the next.

use serde::Serialize;
use std::sync::Arc;

use crate::candidate::CandidateUrl;
use crate::classify::{classify, RoutingDecision};
use crate::config::RoutingConfig;
use crate::dispatch::{dispatch, DispatchOutcome, DispatchTerminal};
use crate::launcher::PlatformLauncher;

/// Terminal state of one navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationState {
    /// Host navigates inside the embedded surface.
    Embedded,
    /// Navigation swallowed; nothing launched.
    Blocked,
    /// A platform-specific strategy launched the link.
    Succeeded,
    /// The default external handler opened the original URL.
    DefaultHandlerOpened,
}

impl NavigationState {
    /// Whether the host must not perform the navigation itself.
    pub fn intercepted(self) -> bool {
        !matches!(self, NavigationState::Embedded)
    }
}

/// Everything decided for one navigation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub decision: RoutingDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch: Option<DispatchOutcome>,
    pub state: NavigationState,
}

impl RouteReport {
    pub fn intercepted(&self) -> bool {
        self.state.intercepted()
    }

    fn embedded(decision: RoutingDecision) -> Self {
        Self {
            decision,
            dispatch: None,
            state: NavigationState::Embedded,
        }
    }
}

pub struct Router<L> {
    config: Arc<RoutingConfig>,
    launcher: L,
}

impl<L: PlatformLauncher> Router<L> {
    pub fn new(config: RoutingConfig, launcher: L) -> Self {
        Self::with_shared_config(Arc::new(config), launcher)
    }

    /// Router over a config shared with other browsing surfaces.
    pub fn with_shared_config(config: Arc<RoutingConfig>, launcher: L) -> Self {
        Self { config, launcher }
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Classify `raw` and, for external decisions, launch it.
    ///
    /// A string that does not parse as an absolute URL is left to the host.
    /// An external link nothing can open is also left to the host, so a
    /// navigation is never silently dropped unless the config blocks it.
    pub fn route(&self, raw: &str) -> RouteReport {
        let url = match CandidateUrl::parse(raw) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!("passing navigation through to host: {err}");
                return RouteReport::embedded(RoutingDecision::StayEmbedded);
            }
        };

        let decision = classify(&url, &self.config);
        let (outcome, state) = match &decision {
            RoutingDecision::StayEmbedded => (None, NavigationState::Embedded),
            RoutingDecision::Block => {
                tracing::info!(url = raw, "navigation blocked");
                (None, NavigationState::Blocked)
            }
            RoutingDecision::OpenExternal { target, url } => {
                let outcome = dispatch(*target, url, &self.launcher);
                let state = match outcome.terminal {
                    DispatchTerminal::Succeeded { .. } => NavigationState::Succeeded,
                    DispatchTerminal::DefaultHandlerOpened => {
                        NavigationState::DefaultHandlerOpened
                    }
                    DispatchTerminal::Unhandled => NavigationState::Embedded,
                };
                (Some(outcome), state)
            }
        };

        RouteReport {
            decision,
            dispatch: outcome,
            state,
        }
    }

    /// Host hook: `true` means "handled, do not navigate".
    pub fn should_override(&self, raw: &str) -> bool {
        self.route(raw).intercepted()
    }
}
