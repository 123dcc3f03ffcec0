//! `linkroute config` – show the effective routing config.

use anyhow::Result;
use linkroute_core::RoutingConfig;
use std::path::Path;

pub fn run_config(path: &Path, cfg: &RoutingConfig) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
