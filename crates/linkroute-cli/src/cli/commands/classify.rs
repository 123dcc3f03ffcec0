//! `linkroute classify` – print the routing decision for a URL.

use anyhow::Result;
use linkroute_core::{classify, CandidateUrl, RoutingConfig};

use super::report::describe_decision;

pub fn run_classify(cfg: &RoutingConfig, url: &str, json: bool) -> Result<()> {
    let candidate = CandidateUrl::parse(url)?;
    let decision = classify(&candidate, cfg);
    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("{}", describe_decision(&decision));
    }
    Ok(())
}
