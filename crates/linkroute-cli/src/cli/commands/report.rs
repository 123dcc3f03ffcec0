//! Human-readable rendering of routing results.

use anyhow::Result;
use linkroute_core::dispatch::AttemptOutcome;
use linkroute_core::{RouteReport, RoutingDecision};

pub fn describe_decision(decision: &RoutingDecision) -> String {
    match decision {
        RoutingDecision::StayEmbedded => "stay-embedded".to_string(),
        RoutingDecision::Block => "block".to_string(),
        RoutingDecision::OpenExternal { target, url } => {
            format!("open-external  target={target}  url={}", url.as_str())
        }
    }
}

pub fn render_report(report: &RouteReport) -> Vec<String> {
    let mut lines = vec![format!("decision: {}", describe_decision(&report.decision))];
    if let Some(outcome) = &report.dispatch {
        for (i, a) in outcome.attempts.iter().enumerate() {
            let outcome = match a.outcome {
                AttemptOutcome::Succeeded => "ok",
                AttemptOutcome::AppAbsent => "app-absent",
                AttemptOutcome::Malformed => "malformed",
            };
            let launch = a
                .launch
                .as_ref()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string());
            lines.push(format!(
                "  {:>2}. {:<16} {:<10} {}",
                i + 1,
                format!("{:?}", a.strategy),
                outcome,
                launch
            ));
        }
    }
    let host = if report.intercepted() {
        "intercepted"
    } else {
        "pass-through"
    };
    lines.push(format!("state: {:?} ({host})", report.state));
    lines
}

pub fn print_report(report: &RouteReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        for line in render_report(report) {
            println!("{line}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkroute_core::launcher::SimulatedLauncher;
    use linkroute_core::{RoutingConfig, Router};

    #[test]
    fn render_fallthrough() {
        let router = Router::new(RoutingConfig::default(), SimulatedLauncher::with_browser());
        let report = router.route("https://youtube.com/watch?v=abc123&t=5");
        let lines = render_report(&report);
        assert!(lines[0].contains("target=youtube"));
        assert!(lines[1].contains("YouTubeApp"));
        assert!(lines[1].contains("app-absent"));
        assert!(lines[2].contains("DefaultHandler"));
        assert_eq!(lines.last().unwrap(), "state: DefaultHandlerOpened (intercepted)");
    }

    #[test]
    fn render_embedded() {
        let router = Router::new(RoutingConfig::default(), SimulatedLauncher::with_browser());
        let report = router.route("https://my-pvl.com/wrapper.html");
        assert_eq!(
            render_report(&report),
            vec!["decision: stay-embedded", "state: Embedded (pass-through)"]
        );
    }
}
