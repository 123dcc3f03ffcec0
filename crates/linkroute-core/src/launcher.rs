//! Platform launcher interface.
//!
//! The dispatcher only depends on `PlatformLauncher` and does not know how a
//! host actually starts another application. Launches are fire-and-forget:
//! `Resolved` means the host found a handler and handed the URI over.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

use crate::target::Target;

/// What the host is asked to launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LaunchTarget {
    /// View an app-scheme URI (`vnd.youtube:ID`, `twitter://...`) with whatever claims it.
    AppUri { uri: String },
    /// View a URI, restricted to one application package.
    Package { package: String, uri: String },
    /// View a URI with the platform's default external handler (usually a browser).
    DefaultHandler { uri: String },
}

impl LaunchTarget {
    pub fn uri(&self) -> &str {
        match self {
            LaunchTarget::AppUri { uri }
            | LaunchTarget::Package { uri, .. }
            | LaunchTarget::DefaultHandler { uri } => uri,
        }
    }
}

impl fmt::Display for LaunchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchTarget::AppUri { uri } => write!(f, "app uri {uri}"),
            LaunchTarget::Package { package, uri } => write!(f, "{uri} via {package}"),
            LaunchTarget::DefaultHandler { uri } => write!(f, "default handler {uri}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchResult {
    Resolved,
    Unresolved,
}

/// Host capability to start an external target.
pub trait PlatformLauncher {
    fn try_launch(&self, target: &LaunchTarget) -> LaunchResult;
}

impl<L: PlatformLauncher + ?Sized> PlatformLauncher for &L {
    fn try_launch(&self, target: &LaunchTarget) -> LaunchResult {
        (**self).try_launch(target)
    }
}

/// In-memory launcher with a fixed set of installed apps and resolvable schemes.
///
/// Records every launch it resolves so callers can inspect what would have
/// been opened. Used by the CLI `route` command and by tests.
#[derive(Debug, Default)]
pub struct SimulatedLauncher {
    packages: HashSet<String>,
    schemes: HashSet<String>,
    default_handler: bool,
    launched: Mutex<Vec<LaunchTarget>>,
}

impl SimulatedLauncher {
    /// A device with a browser and no platform apps.
    pub fn with_browser() -> Self {
        Self {
            default_handler: true,
            ..Self::default()
        }
    }

    /// A device with nothing able to handle any launch.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Install the platform app for `target`: its package and vendor schemes.
    pub fn install(mut self, target: Target) -> Self {
        if let Some(pkg) = target.package() {
            self.packages.insert(pkg.to_string());
        }
        self.schemes
            .extend(target.native_schemes().iter().map(|s| s.to_string()));
        self
    }

    /// Make an extra URI scheme resolvable (e.g. `mailto` with a mail client).
    pub fn handle_scheme(mut self, scheme: &str) -> Self {
        self.schemes.insert(scheme.to_ascii_lowercase());
        self
    }

    /// Launches resolved so far, in order.
    pub fn launched(&self) -> Vec<LaunchTarget> {
        self.launched
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn scheme_of(uri: &str) -> String {
        uri.split(':').next().unwrap_or_default().to_ascii_lowercase()
    }

    fn resolves(&self, target: &LaunchTarget) -> bool {
        match target {
            LaunchTarget::AppUri { uri } => self.schemes.contains(&Self::scheme_of(uri)),
            LaunchTarget::Package { package, .. } => self.packages.contains(package),
            LaunchTarget::DefaultHandler { uri } => {
                let scheme = Self::scheme_of(uri);
                if scheme == "http" || scheme == "https" {
                    self.default_handler
                } else {
                    self.schemes.contains(&scheme)
                }
            }
        }
    }
}

impl PlatformLauncher for SimulatedLauncher {
    fn try_launch(&self, target: &LaunchTarget) -> LaunchResult {
        if !self.resolves(target) {
            return LaunchResult::Unresolved;
        }
        self.launched
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(target.clone());
        LaunchResult::Resolved
    }
}
