//! `linkroute invoke` – run a native bridge action the way hosted script would.

use anyhow::Result;
use linkroute_core::bridge::{MainThreadQueue, NativeBridge, ACTION_OPEN_LINK_SETTINGS};
use linkroute_core::launcher::{LaunchResult, LaunchTarget, PlatformLauncher};
use std::path::Path;

use crate::cli::xdg_open::XdgOpenLauncher;

/// On a desktop the "link settings" are the routing config file itself.
fn settings_uri(config_path: &Path) -> Result<String> {
    let url = url::Url::from_file_path(config_path).map_err(|_| {
        anyhow::anyhow!("config path is not absolute: {}", config_path.display())
    })?;
    Ok(url.to_string())
}

pub fn run_invoke(config_path: &Path, action: &str) -> Result<()> {
    let queue = MainThreadQueue::new();
    let mut bridge = NativeBridge::new(queue.handle());

    let target = LaunchTarget::DefaultHandler {
        uri: settings_uri(config_path)?,
    };
    bridge.register(ACTION_OPEN_LINK_SETTINGS, move || {
        match XdgOpenLauncher::from_env().try_launch(&target) {
            LaunchResult::Resolved => println!("opened {}", target.uri()),
            LaunchResult::Unresolved => eprintln!("could not open {}", target.uri()),
        }
    });

    bridge.invoke(action)?;
    queue.run_pending();
    Ok(())
}
