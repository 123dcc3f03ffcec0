//! CLI for the linkroute link-routing engine.

mod commands;
mod xdg_open;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use linkroute_core::config::{self, RoutingConfig};
use linkroute_core::Target;
use std::path::PathBuf;

use commands::{
    run_classify, run_completions, run_config, run_invoke, run_man, run_open, run_prefs,
    run_route, RouteOptions,
};

/// Top-level CLI for linkroute.
#[derive(Debug, Parser)]
#[command(name = "linkroute")]
#[command(about = "linkroute: decide where tapped links open", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/linkroute/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a URL without launching anything.
    Classify {
        /// Navigation target as the browser host would offer it.
        url: String,
        /// Print the decision as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Route a URL against a simulated device and show every launch attempt.
    Route {
        /// Navigation target as the browser host would offer it.
        url: String,
        /// Platform app installed on the simulated device (repeatable).
        #[arg(long = "installed", value_name = "TARGET")]
        installed: Vec<Target>,
        /// Extra URI scheme the simulated device can handle, e.g. mailto (repeatable).
        #[arg(long = "scheme", value_name = "SCHEME")]
        schemes: Vec<String>,
        /// Simulate a device without a default browser.
        #[arg(long)]
        no_browser: bool,
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Route a URL and launch external targets on this desktop via xdg-open.
    Open {
        /// Navigation target as the browser host would offer it.
        url: String,
    },

    /// Invoke a native bridge action by name (e.g. openLinkSettings).
    Invoke {
        /// Action name as hosted script content would call it.
        action: String,
    },

    /// Show the effective routing config and where it is loaded from.
    Config,

    /// Show or update the one-time permission prompt preferences.
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Shell to generate completions for.
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum PrefsAction {
    /// Print stored preferences and whether the prompt would be shown.
    Show,
    /// Record that the prompt was shown and permission granted.
    Grant,
    /// Record that the prompt was shown and permission declined.
    Deny,
    /// Forget everything; the prompt shows again on next start.
    Reset,
}

impl Cli {
    fn load_config(&self) -> Result<RoutingConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config::config_path(),
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Classify { url, json } => run_classify(&cli.load_config()?, url, *json)?,
            CliCommand::Route {
                url,
                installed,
                schemes,
                no_browser,
                json,
            } => {
                let opts = RouteOptions {
                    installed: installed.clone(),
                    schemes: schemes.clone(),
                    browser: !no_browser,
                    json: *json,
                };
                run_route(cli.load_config()?, url, &opts)?;
            }
            CliCommand::Open { url } => run_open(cli.load_config()?, url)?,
            CliCommand::Invoke { action } => run_invoke(&cli.config_path()?, action)?,
            CliCommand::Config => run_config(&cli.config_path()?, &cli.load_config()?)?,
            CliCommand::Prefs { action } => run_prefs(action.unwrap_or(PrefsAction::Show))?,
            CliCommand::Completions { shell } => run_completions(*shell, &mut Cli::command()),
            CliCommand::Man => run_man(Cli::command())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
