//! `linkroute route` – route a URL against a simulated device.

use anyhow::Result;
use linkroute_core::launcher::SimulatedLauncher;
use linkroute_core::{Router, RoutingConfig, Target};

use super::report::print_report;

/// What the simulated device has installed.
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    pub installed: Vec<Target>,
    pub schemes: Vec<String>,
    pub browser: bool,
    pub json: bool,
}

impl RouteOptions {
    fn launcher(&self) -> SimulatedLauncher {
        let base = if self.browser {
            SimulatedLauncher::with_browser()
        } else {
            SimulatedLauncher::empty()
        };
        let with_apps = self
            .installed
            .iter()
            .fold(base, |l, &target| l.install(target));
        self.schemes
            .iter()
            .fold(with_apps, |l, scheme| l.handle_scheme(scheme))
    }
}

pub fn run_route(cfg: RoutingConfig, url: &str, opts: &RouteOptions) -> Result<()> {
    let router = Router::new(cfg, opts.launcher());
    let report = router.route(url);
    print_report(&report, opts.json)
}
