//! Navigation classification.
//!
//! `classify` is a pure function of the candidate URL and the routing config.
//! Rules are applied in priority order and the first match wins:
//! 1. non-web scheme: native app link (or the unknown-scheme policy)
//! 2. host outside the home domain: external, by platform if the host is a
//!    known external-by-nature domain
//! 3. home domain: stay embedded

mod scheme;

pub use scheme::native_target;

use serde::Serialize;

use crate::candidate::{host_matches, CandidateUrl};
use crate::config::{HomeReferencePolicy, RoutingConfig, UnknownSchemePolicy};
use crate::error::RouteError;
use crate::target::Target;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RoutingDecision {
    /// Let the embedded browser navigate.
    StayEmbedded,
    /// Launch outside the embedded surface using `target`'s strategies.
    OpenExternal { target: Target, url: CandidateUrl },
    /// Swallow the navigation: no launch, no embedded navigation.
    Block,
}

impl RoutingDecision {
    pub fn label(&self) -> String {
        match self {
            RoutingDecision::StayEmbedded => "stay-embedded".to_string(),
            RoutingDecision::OpenExternal { target, .. } => format!("open-external({target})"),
            RoutingDecision::Block => "block".to_string(),
        }
    }
}

/// Classify a navigation target.
pub fn classify(url: &CandidateUrl, config: &RoutingConfig) -> RoutingDecision {
    let decision = if !url.is_web() {
        classify_native(url, config)
    } else {
        classify_web(url, config)
    };
    tracing::debug!(url = url.as_str(), decision = %decision.label(), "classified");
    decision
}

fn classify_native(url: &CandidateUrl, config: &RoutingConfig) -> RoutingDecision {
    match native_target(url, config) {
        Ok(target) => RoutingDecision::OpenExternal {
            target,
            url: url.clone(),
        },
        Err(err) => {
            tracing::warn!(url = url.as_str(), policy = ?config.unknown_scheme_policy, "{err}");
            match config.unknown_scheme_policy {
                UnknownSchemePolicy::Block => RoutingDecision::Block,
                UnknownSchemePolicy::Generic => RoutingDecision::OpenExternal {
                    target: Target::Generic,
                    url: url.clone(),
                },
            }
        }
    }
}

fn classify_web(url: &CandidateUrl, config: &RoutingConfig) -> RoutingDecision {
    let host = match url.host() {
        Some(h) => h,
        None => {
            // http(s) always carries a host once parsed; keep the rule total anyway.
            tracing::warn!("{}", RouteError::MalformedUrl(url.as_str().to_string()));
            return RoutingDecision::OpenExternal {
                target: Target::Generic,
                url: url.clone(),
            };
        }
    };

    if host_matches(&host, &config.home_domain) {
        return RoutingDecision::StayEmbedded;
    }

    if let Some(entry) = config
        .external_domains
        .iter()
        .find(|d| host_matches(&host, &d.domain))
    {
        return RoutingDecision::OpenExternal {
            target: entry.target,
            url: url.clone(),
        };
    }

    if config.home_reference_policy == HomeReferencePolicy::Embedded
        && references_home(url, &config.home_domain)
    {
        return RoutingDecision::StayEmbedded;
    }

    RoutingDecision::OpenExternal {
        target: Target::Generic,
        url: url.clone(),
    }
}

/// True if some query value is itself a web URL on the home domain.
fn references_home(url: &CandidateUrl, home_domain: &str) -> bool {
    url.query_values().any(|v| {
        CandidateUrl::parse(&v)
            .ok()
            .filter(CandidateUrl::is_web)
            .and_then(|inner| inner.host())
            .is_some_and(|h| host_matches(&h, home_domain))
    })
}
