//! External dispatch.
//!
//! Given an external decision, tries the target's strategies in order, each at
//! most once. Every failure path converges on the same terminal step: the
//! original, unmodified URL in the default external handler.

mod attempt;
mod strategy;

pub use attempt::{AttemptOutcome, LaunchAttempt};
pub use strategy::Strategy;

use serde::Serialize;

use crate::candidate::CandidateUrl;
use crate::launcher::PlatformLauncher;
use crate::target::Target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DispatchTerminal {
    /// A target-specific strategy launched.
    Succeeded { strategy: Strategy },
    /// Every specific strategy fell through; the default handler took the URL.
    DefaultHandlerOpened,
    /// Not even the default handler resolved the URL.
    Unhandled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchOutcome {
    pub target: Target,
    pub attempts: Vec<LaunchAttempt>,
    pub terminal: DispatchTerminal,
}

impl DispatchOutcome {
    pub fn launched(&self) -> bool {
        !matches!(self.terminal, DispatchTerminal::Unhandled)
    }
}

/// Launch `url` outside the embedded surface using `target`'s strategy chain.
pub fn dispatch<L: PlatformLauncher + ?Sized>(
    target: Target,
    url: &CandidateUrl,
    launcher: &L,
) -> DispatchOutcome {
    let mut attempts = Vec::new();

    for &strategy in Strategy::chain(target, url) {
        let attempt = strategy.attempt(target, url, launcher);
        let done = attempt.succeeded();
        attempts.push(attempt);
        if done {
            return DispatchOutcome {
                target,
                attempts,
                terminal: DispatchTerminal::Succeeded { strategy },
            };
        }
    }

    let last = Strategy::DefaultHandler.attempt(target, url, launcher);
    let terminal = if last.succeeded() {
        DispatchTerminal::DefaultHandlerOpened
    } else {
        tracing::info!(url = url.as_str(), %target, "no handler resolved external link");
        DispatchTerminal::Unhandled
    };
    attempts.push(last);

    DispatchOutcome {
        target,
        attempts,
        terminal,
    }
}
