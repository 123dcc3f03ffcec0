//! Launch attempt records.

use serde::Serialize;

use super::Strategy;
use crate::error::RouteError;
use crate::launcher::LaunchTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    Succeeded,
    /// Launcher could not resolve a handler; fall through.
    AppAbsent,
    /// Identifier extraction failed before anything was launched; fall through.
    Malformed,
}

/// Outcome of one strategy. Kept only for the dispatch report and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchAttempt {
    pub strategy: Strategy,
    /// What was handed to the launcher; `None` when extraction failed.
    pub launch: Option<LaunchTarget>,
    pub outcome: AttemptOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RouteError>,
}

impl LaunchAttempt {
    pub fn succeeded(&self) -> bool {
        self.outcome == AttemptOutcome::Succeeded
    }
}
