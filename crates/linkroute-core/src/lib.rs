//! linkroute: decides, for every navigation out of an embedded web app, whether
//! it stays embedded, opens a native platform app, or goes to the default
//! external handler.

pub mod config;
pub mod logging;
pub mod prefs;

pub mod bridge;
pub mod candidate;
pub mod classify;
pub mod dispatch;
pub mod error;
pub mod launcher;
pub mod router;
pub mod target;

pub use candidate::CandidateUrl;
pub use classify::{classify, RoutingDecision};
pub use config::RoutingConfig;
pub use dispatch::{dispatch, DispatchOutcome, DispatchTerminal, LaunchAttempt};
pub use error::RouteError;
pub use launcher::{LaunchResult, LaunchTarget, PlatformLauncher};
pub use router::{NavigationState, RouteReport, Router};
pub use target::Target;
