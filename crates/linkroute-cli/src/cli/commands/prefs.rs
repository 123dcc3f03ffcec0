//! `linkroute prefs` – one-time permission prompt state.

use anyhow::Result;
use linkroute_core::prefs::{self, PermissionPrefs};

use crate::cli::PrefsAction;

/// Applies `action` to `current`; `None` means nothing to write.
pub fn apply(action: PrefsAction, current: PermissionPrefs) -> Option<PermissionPrefs> {
    let mut next = current;
    match action {
        PrefsAction::Show => return None,
        PrefsAction::Grant => next.record_prompt(true),
        PrefsAction::Deny => next.record_prompt(false),
        PrefsAction::Reset => next = PermissionPrefs::default(),
    }
    Some(next)
}

pub fn run_prefs(action: PrefsAction) -> Result<()> {
    let path = prefs::prefs_path()?;
    let mut current = prefs::load_from(&path)?;
    if let Some(next) = apply(action, current) {
        prefs::save_to(&path, &next)?;
        current = next;
    }
    println!("prompt_shown = {}", current.prompt_shown);
    println!("permission_granted = {}", current.permission_granted);
    println!("show prompt on start: {}", current.should_prompt());
    Ok(())
}
