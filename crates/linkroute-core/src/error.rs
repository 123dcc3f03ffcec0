//! Routing error taxonomy.
//!
//! None of these are fatal: the router records them on launch attempts and
//! logs them, and the worst outcome is a link opening in the default handler.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RouteError {
    /// URL could not be parsed, or a per-target identifier could not be extracted.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),
    /// The launcher could not resolve a native application for the target.
    #[error("target application absent: {0}")]
    TargetAppAbsent(String),
    /// Non-web scheme that no known handler family claims.
    #[error("unrecognized scheme: {0}")]
    UnrecognizedScheme(String),
}
