use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::target::Target;

/// What to do with a non-web scheme that no known handler family claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSchemePolicy {
    /// Hand the URL to the default external handler.
    #[default]
    Generic,
    /// Swallow the navigation: no launch, no embedded navigation.
    Block,
}

/// How to treat a non-home URL whose query string points back at the home domain
/// (e.g. a redirect wrapper carrying `?u=https://my-pvl.com/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeReferencePolicy {
    /// Host decides: any non-home host is external.
    #[default]
    External,
    /// Keep such URLs inside the embedded surface.
    Embedded,
}

/// One external-by-nature domain suffix and the platform it routes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDomain {
    pub domain: String,
    pub target: Target,
}

impl ExternalDomain {
    fn new(domain: &str, target: Target) -> Self {
        Self {
            domain: domain.to_string(),
            target,
        }
    }
}

/// Routing configuration loaded from `~/.config/linkroute/config.toml`.
///
/// Built once at startup and only read afterwards; share it behind an `Arc`
/// if several surfaces route concurrently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Hostname whose pages stay embedded. Subdomains count as home.
    pub home_domain: String,
    /// Non-web schemes opened through the default handler (`mailto`, `tel`, ...).
    #[serde(default)]
    pub app_schemes: Vec<String>,
    #[serde(default)]
    pub unknown_scheme_policy: UnknownSchemePolicy,
    #[serde(default)]
    pub home_reference_policy: HomeReferencePolicy,
    /// Checked in order; the first suffix matching the host wins.
    #[serde(default)]
    pub external_domains: Vec<ExternalDomain>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            home_domain: "my-pvl.com".to_string(),
            app_schemes: ["mailto", "tel", "sms", "whatsapp", "market", "geo"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            unknown_scheme_policy: UnknownSchemePolicy::default(),
            home_reference_policy: HomeReferencePolicy::default(),
            external_domains: default_external_domains(),
        }
    }
}

fn default_external_domains() -> Vec<ExternalDomain> {
    vec![
        ExternalDomain::new("youtube.com", Target::YouTube),
        ExternalDomain::new("youtu.be", Target::YouTube),
        ExternalDomain::new("youtube-nocookie.com", Target::YouTube),
        ExternalDomain::new("facebook.com", Target::Facebook),
        ExternalDomain::new("fb.com", Target::Facebook),
        ExternalDomain::new("fb.watch", Target::Facebook),
        ExternalDomain::new("instagram.com", Target::Instagram),
        ExternalDomain::new("instagr.am", Target::Instagram),
        ExternalDomain::new("twitter.com", Target::Twitter),
        ExternalDomain::new("x.com", Target::Twitter),
        // Shortened links: the path is a link code, not a profile.
        ExternalDomain::new("t.co", Target::Generic),
        ExternalDomain::new("tiktok.com", Target::TikTok),
        ExternalDomain::new("linkedin.com", Target::LinkedIn),
        ExternalDomain::new("lnkd.in", Target::LinkedIn),
        ExternalDomain::new("pinterest.com", Target::Pinterest),
        ExternalDomain::new("pin.it", Target::Pinterest),
    ]
}

impl RoutingConfig {
    /// Config for a given home domain with the stock social-domain table.
    pub fn with_home_domain(home_domain: &str) -> Self {
        Self {
            home_domain: home_domain.to_string(),
            ..Self::default()
        }
        .normalized()
    }

    pub fn with_unknown_scheme_policy(mut self, policy: UnknownSchemePolicy) -> Self {
        self.unknown_scheme_policy = policy;
        self
    }

    pub fn with_home_reference_policy(mut self, policy: HomeReferencePolicy) -> Self {
        self.home_reference_policy = policy;
        self
    }

    /// Lower-cases hosts and schemes and strips a leading `.` or `www.` so
    /// suffix matching in the classifier can compare directly.
    pub fn normalized(mut self) -> Self {
        self.home_domain = normalize_domain(&self.home_domain);
        for s in &mut self.app_schemes {
            *s = s.trim().trim_end_matches(':').to_ascii_lowercase();
        }
        self.app_schemes.retain(|s| !s.is_empty());
        for d in &mut self.external_domains {
            d.domain = normalize_domain(&d.domain);
        }
        self.external_domains.retain(|d| !d.domain.is_empty());
        self
    }

    /// Returns an error if the config cannot route anything sensibly.
    pub fn validate(&self) -> Result<()> {
        if self.home_domain.is_empty() {
            anyhow::bail!("home_domain must not be empty");
        }
        if self.home_domain.contains('/') || self.home_domain.contains(':') {
            anyhow::bail!(
                "home_domain must be a bare hostname, got {:?}",
                self.home_domain
            );
        }
        Ok(())
    }

    pub fn is_app_scheme(&self, scheme: &str) -> bool {
        self.app_schemes.iter().any(|s| s == scheme)
    }
}

fn normalize_domain(raw: &str) -> String {
    let lower = raw.trim().trim_end_matches('.').to_ascii_lowercase();
    let lower = lower.trim_start_matches('.');
    lower.strip_prefix("www.").unwrap_or(lower).to_string()
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkroute")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RoutingConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RoutingConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load and normalise configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<RoutingConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RoutingConfig = toml::from_str(&data)
        .with_context(|| format!("parse config: {}", path.display()))?;
    let cfg = cfg.normalized();
    cfg.validate()?;
    Ok(cfg)
}
