//! Desktop platform launcher backed by `xdg-open` / `xdg-mime`.
//!
//! Launches are fire-and-forget: the opener is spawned and never waited on.
//! Application packages do not exist on a desktop, so package-scoped launches
//! are always unresolved and the dispatcher falls through.

use linkroute_core::launcher::{LaunchResult, LaunchTarget, PlatformLauncher};
use std::ffi::OsString;
use std::process::{Command, Stdio};

pub struct XdgOpenLauncher {
    opener: OsString,
}

impl XdgOpenLauncher {
    /// Uses `$LINKROUTE_OPENER` if set, else `xdg-open`.
    pub fn from_env() -> Self {
        Self {
            opener: std::env::var_os("LINKROUTE_OPENER").unwrap_or_else(|| "xdg-open".into()),
        }
    }

    /// Whether the desktop has a handler registered for `scheme`.
    fn has_scheme_handler(scheme: &str) -> bool {
        let out = Command::new("xdg-mime")
            .args(["query", "default", &format!("x-scheme-handler/{scheme}")])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();
        match out {
            Ok(out) => out.status.success() && !String::from_utf8_lossy(&out.stdout).trim().is_empty(),
            Err(e) => {
                tracing::debug!("xdg-mime unavailable: {e}");
                false
            }
        }
    }

    fn spawn(&self, uri: &str) -> LaunchResult {
        let spawned = Command::new(&self.opener)
            .arg(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(mut child) => {
                // Reap the opener in the background so it never lingers as a zombie.
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
                LaunchResult::Resolved
            }
            Err(e) => {
                tracing::warn!("failed to spawn {:?}: {e}", self.opener);
                LaunchResult::Unresolved
            }
        }
    }
}

fn scheme_of(uri: &str) -> Option<String> {
    url::Url::parse(uri).ok().map(|u| u.scheme().to_string())
}

impl PlatformLauncher for XdgOpenLauncher {
    fn try_launch(&self, target: &LaunchTarget) -> LaunchResult {
        match target {
            LaunchTarget::Package { package, .. } => {
                tracing::debug!(package = package.as_str(), "no application packages on this host");
                LaunchResult::Unresolved
            }
            LaunchTarget::AppUri { uri } | LaunchTarget::DefaultHandler { uri } => {
                match scheme_of(uri).as_deref() {
                    Some("http" | "https" | "file") => self.spawn(uri),
                    Some(scheme) if Self::has_scheme_handler(scheme) => self.spawn(uri),
                    _ => LaunchResult::Unresolved,
                }
            }
        }
    }
}
