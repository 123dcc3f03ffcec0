//! Integration test: end-to-end navigation routing against a simulated device.
//!
//! Drives the public `Router` the way a browser host would, one navigation at
//! a time, and checks both the decision and what was actually launched.

use linkroute_core::config::{RoutingConfig, UnknownSchemePolicy};
use linkroute_core::dispatch::{AttemptOutcome, Strategy};
use linkroute_core::launcher::{LaunchTarget, SimulatedLauncher};
use linkroute_core::{
    classify, CandidateUrl, DispatchTerminal, NavigationState, Router, RoutingDecision, Target,
};

fn config() -> RoutingConfig {
    RoutingConfig::with_home_domain("my-pvl.com")
}

#[test]
fn wrapper_page_stays_embedded() {
    let router = Router::new(config(), SimulatedLauncher::with_browser());
    let report = router.route("https://my-pvl.com/wrapper.html?l=QKNK9F");
    assert_eq!(report.decision, RoutingDecision::StayEmbedded);
    assert!(!report.intercepted());
}

#[test]
fn youtube_without_app_opens_original_in_browser() {
    let raw = "https://youtube.com/watch?v=abc123&t=5";
    let router = Router::new(config(), SimulatedLauncher::with_browser());
    let report = router.route(raw);

    let outcome = report.dispatch.expect("external link is dispatched");
    assert_eq!(outcome.target, Target::YouTube);
    assert_eq!(outcome.attempts[0].strategy, Strategy::YouTubeApp);
    assert_eq!(
        outcome.attempts[0].launch,
        Some(LaunchTarget::AppUri {
            uri: "vnd.youtube:abc123".to_string()
        })
    );
    assert_eq!(outcome.attempts[0].outcome, AttemptOutcome::AppAbsent);
    assert_eq!(outcome.terminal, DispatchTerminal::DefaultHandlerOpened);
    assert_eq!(report.state, NavigationState::DefaultHandlerOpened);
    assert_eq!(
        router.launcher().launched(),
        vec![LaunchTarget::DefaultHandler {
            uri: raw.to_string()
        }]
    );
}

#[test]
fn twitter_scheme_goes_straight_to_app() {
    let raw = "twitter://user?screen_name=foo";
    let router = Router::new(
        config(),
        SimulatedLauncher::with_browser().install(Target::Twitter),
    );
    let report = router.route(raw);
    assert!(matches!(
        report.decision,
        RoutingDecision::OpenExternal {
            target: Target::Twitter,
            ..
        }
    ));
    assert_eq!(report.state, NavigationState::Succeeded);
    assert_eq!(
        router.launcher().launched(),
        vec![LaunchTarget::AppUri {
            uri: raw.to_string()
        }]
    );
}

#[test]
fn instagram_profile_in_app() {
    let router = Router::new(
        config(),
        SimulatedLauncher::with_browser().install(Target::Instagram),
    );
    assert!(router.should_override("https://instagram.com/someuser/"));
    assert_eq!(
        router.launcher().launched(),
        vec![LaunchTarget::Package {
            package: "com.instagram.android".to_string(),
            uri: "http://instagram.com/_u/someuser".to_string()
        }]
    );
}

#[test]
fn blocked_custom_scheme() {
    let cfg = config().with_unknown_scheme_policy(UnknownSchemePolicy::Block);
    let router = Router::new(cfg, SimulatedLauncher::with_browser().handle_scheme("myapp"));
    let report = router.route("myapp://foo");
    assert_eq!(report.decision, RoutingDecision::Block);
    assert!(report.dispatch.is_none());
    assert!(report.intercepted());
    assert!(router.launcher().launched().is_empty());
}

#[test]
fn facebook_package_then_browser() {
    let raw = "https://www.facebook.com/somepage";
    let with_app = Router::new(
        config(),
        SimulatedLauncher::with_browser().install(Target::Facebook),
    );
    assert_eq!(with_app.route(raw).state, NavigationState::Succeeded);
    assert_eq!(
        with_app.launcher().launched(),
        vec![LaunchTarget::Package {
            package: "com.facebook.katana".to_string(),
            uri: raw.to_string()
        }]
    );

    let without_app = Router::new(config(), SimulatedLauncher::with_browser());
    assert_eq!(
        without_app.route(raw).state,
        NavigationState::DefaultHandlerOpened
    );
    assert_eq!(without_app.launcher().launched()[0].uri(), raw);
}

#[test]
fn every_social_domain_classifies_to_its_platform_regardless_of_query() {
    let cfg = config();
    for entry in &cfg.external_domains {
        for query in ["", "?u=https://my-pvl.com/", "?ref=facebook.com&x=1"] {
            let raw = format!("https://{}/someone{}", entry.domain, query);
            let url = CandidateUrl::parse(&raw).unwrap();
            match classify(&url, &cfg) {
                RoutingDecision::OpenExternal { target, .. } => {
                    assert_eq!(target, entry.target, "{raw}")
                }
                other => panic!("{raw}: expected external, got {other:?}"),
            }
        }
    }
}

#[test]
fn report_serializes_for_diagnostics() {
    let router = Router::new(config(), SimulatedLauncher::with_browser());
    let report = router.route("https://youtube.com/watch?v=abc123&t=5");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["decision"]["decision"], "open_external");
    assert_eq!(json["decision"]["target"], "youtube");
    assert_eq!(
        json["decision"]["url"],
        "https://youtube.com/watch?v=abc123&t=5"
    );
    assert_eq!(json["state"], "default_handler_opened");
    assert_eq!(json["dispatch"]["terminal"]["state"], "default_handler_opened");
}

#[test]
fn shortened_twitter_link_opens_original_in_browser() {
    let raw = "https://t.co/AbC123xyz";
    let router = Router::new(
        config(),
        SimulatedLauncher::with_browser().install(Target::Twitter),
    );
    let report = router.route(raw);
    assert_eq!(report.state, NavigationState::DefaultHandlerOpened);
    assert_eq!(
        router.launcher().launched(),
        vec![LaunchTarget::DefaultHandler {
            uri: raw.to_string()
        }]
    );
}

#[test]
fn intent_fallback_to_local_file_is_not_opened() {
    let raw = "intent://x#Intent;scheme=zxing;S.browser_fallback_url=file%3A%2F%2F%2Fetc%2Fpasswd;end";
    let router = Router::new(
        config(),
        SimulatedLauncher::with_browser().handle_scheme("file"),
    );
    let report = router.route(raw);
    let outcome = report.dispatch.expect("intent link is dispatched");
    assert_eq!(outcome.attempts[1].strategy, Strategy::IntentFallback);
    assert_eq!(outcome.attempts[1].outcome, AttemptOutcome::Malformed);
    assert!(router
        .launcher()
        .launched()
        .iter()
        .all(|l| !l.uri().starts_with("file:")));
}

#[test]
fn surrounding_whitespace_still_opens_in_browser() {
    let router = Router::new(config(), SimulatedLauncher::with_browser());
    let report = router.route("  https://example.com/a\n");
    assert_eq!(report.state, NavigationState::DefaultHandlerOpened);
    assert!(report.intercepted());
    assert_eq!(
        router.launcher().launched(),
        vec![LaunchTarget::DefaultHandler {
            uri: "https://example.com/a".to_string()
        }]
    );
}
