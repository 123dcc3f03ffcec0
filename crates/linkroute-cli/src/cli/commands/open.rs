//! `linkroute open` – route a URL and really launch it on this desktop.

use anyhow::Result;
use linkroute_core::{Router, RoutingConfig};

use super::report::print_report;
use crate::cli::xdg_open::XdgOpenLauncher;

pub fn run_open(cfg: RoutingConfig, url: &str) -> Result<()> {
    let router = Router::new(cfg, XdgOpenLauncher::from_env());
    let report = router.route(url);
    if !report.intercepted() {
        tracing::info!(url, "not intercepted; a host would load it embedded");
    }
    print_report(&report, false)
}
