//! Persisted startup preferences for the one-time link permission prompt.
//!
//! Read once at startup by the surrounding app; the router never looks at them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionPrefs {
    /// The one-time prompt has been shown.
    #[serde(default)]
    pub prompt_shown: bool,
    /// The user enabled opening supported links in this app.
    #[serde(default)]
    pub permission_granted: bool,
}

impl PermissionPrefs {
    pub fn should_prompt(&self) -> bool {
        !self.prompt_shown && !self.permission_granted
    }

    /// Records the user's answer to the prompt.
    pub fn record_prompt(&mut self, granted: bool) {
        self.prompt_shown = true;
        self.permission_granted = granted;
    }
}

/// Default path: `~/.local/state/linkroute/prefs.toml`.
pub fn prefs_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkroute")?;
    Ok(xdg_dirs.place_state_file("prefs.toml")?)
}

/// Loads prefs from `path`; a missing file means nothing recorded yet.
pub fn load_from(path: &Path) -> Result<PermissionPrefs> {
    if !path.exists() {
        return Ok(PermissionPrefs::default());
    }
    let data =
        fs::read_to_string(path).with_context(|| format!("read prefs: {}", path.display()))?;
    toml::from_str(&data).with_context(|| format!("parse prefs: {}", path.display()))
}

pub fn save_to(path: &Path, prefs: &PermissionPrefs) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let toml = toml::to_string_pretty(prefs)?;
    fs::write(path, toml).with_context(|| format!("write prefs: {}", path.display()))?;
    tracing::debug!("saved prefs to {}", path.display());
    Ok(())
}
