//! Integration tests: evidence gathering against a local HTTP server and the
//! full prediction pipeline, including total network failure.
//!
//! The WHOIS server is pointed at a closed local port throughout, so the
//! registration probe always falls back to absent evidence quickly.

mod common;

use std::sync::Arc;

use chrono::Utc;
use phishguard_core::config::PhishguardConfig;
use phishguard_core::evidence::{self, RegistrationEvidence};
use phishguard_core::features::{self, FEATURE_NAMES};
use phishguard_core::model::LinearModel;
use phishguard_core::predict::{Predictor, Severity};
use phishguard_core::url_parts;

const PAGE: &str = r#"<html>
  <head><title> Example Landing </title></head>
  <body>
    <a href="/home">home</a>
    <a href="/about">about</a>
    <a href="http://elsewhere.test/x">out</a>
    <a name="anchor-only">no href</a>
  </body>
</html>"#;

fn test_config() -> PhishguardConfig {
    PhishguardConfig {
        evidence_timeout_secs: 2,
        // Port 9 (discard) is closed; both probes pointed here fail fast.
        whois_server: "127.0.0.1:9".to_string(),
        ..PhishguardConfig::default()
    }
}

fn artifact_json(intercept: f64) -> String {
    let names: Vec<String> = FEATURE_NAMES.iter().map(|n| format!("\"{n}\"")).collect();
    let zeros = vec!["0.0"; FEATURE_NAMES.len()].join(",");
    let ones = vec!["1.0"; FEATURE_NAMES.len()].join(",");
    format!(
        r#"{{"schema_version":1,"feature_names":[{}],"mean":[{zeros}],"scale":[{ones}],"weights":[{zeros}],"intercept":{intercept}}}"#,
        names.join(",")
    )
}

#[tokio::test]
async fn gather_collects_title_and_anchors_from_live_page() {
    let url = common::html_server::start(PAGE);
    let parts = url_parts::parse(&url);
    let evidence = evidence::gather(&parts, &test_config()).await;

    let page = evidence.page.expect("page evidence");
    assert_eq!(page.title, "Example Landing");
    assert_eq!(page.anchors.len(), 4);
    assert_eq!(page.anchors[0].href, "/home");
    assert_eq!(page.anchors[3].href, "");
    // WHOIS points at a closed port: registration evidence must be absent.
    assert!(evidence.registration.created.is_none());
}

#[tokio::test]
async fn features_built_from_gathered_evidence() {
    let url = common::html_server::start(PAGE);
    let parts = url_parts::parse(&url);
    let evidence = evidence::gather(&parts, &test_config()).await;

    let vector = features::build(
        &parts,
        &evidence.registration,
        evidence.page.as_ref(),
        Utc::now(),
    );
    assert_eq!(vector.get("nb_hyperlinks"), Some(4.0));
    assert_eq!(vector.get("ratio_intHyperlinks"), Some(0.5));
    assert_eq!(vector.get("empty_title"), Some(0.0));
    assert_eq!(vector.get("domain_age"), Some(0.0));
}

#[tokio::test]
async fn total_network_failure_yields_url_only_vector() {
    // Nothing is listening on either endpoint.
    let parts = url_parts::parse("http://127.0.0.1:9/login");
    let evidence = evidence::gather(&parts, &test_config()).await;

    assert!(evidence.page.is_none());
    assert!(evidence.registration.created.is_none());

    let got = features::build(&parts, &evidence.registration, evidence.page.as_ref(), Utc::now());
    let expected = features::build(&parts, &RegistrationEvidence::absent(), None, Utc::now());
    assert_eq!(got, expected);
    assert_eq!(got.get("phish_hints"), Some(1.0));
    assert_eq!(got.get("nb_hyperlinks"), Some(0.0));
}

#[tokio::test]
async fn non_success_status_falls_back_to_absent_page() {
    let url = common::html_server::start_with_status(PAGE, 404);
    let parts = url_parts::parse(&url);
    let evidence = evidence::gather(&parts, &test_config()).await;
    assert!(evidence.page.is_none());
}

#[tokio::test]
async fn pipeline_phishing_verdict_end_to_end() {
    let url = common::html_server::start(PAGE);
    let model = LinearModel::from_json(&artifact_json(2.0)).unwrap();
    let predictor = Predictor::new(Arc::new(model), test_config());

    let verdict = predictor.predict(&url).await.unwrap();
    assert_eq!(verdict.prediction, 1);
    assert_eq!(verdict.severity, Severity::High);
    assert!(verdict.confidence > 0.75);
}

#[tokio::test]
async fn pipeline_legitimate_verdict_end_to_end() {
    let url = common::html_server::start(PAGE);
    let model = LinearModel::from_json(&artifact_json(-2.0)).unwrap();
    let predictor = Predictor::new(Arc::new(model), test_config());

    let verdict = predictor.predict(&url).await.unwrap();
    assert_eq!(verdict.prediction, 0);
    assert_eq!(verdict.severity, Severity::None);
    assert!(verdict.confidence > 0.75);
}

#[tokio::test]
async fn pipeline_tolerates_unparseable_url() {
    let model = LinearModel::from_json(&artifact_json(-2.0)).unwrap();
    let predictor = Predictor::new(Arc::new(model), test_config());

    // Parser degrades to empty components; both probes fail; the classifier
    // still receives a complete vector.
    let verdict = predictor.predict("not a url").await.unwrap();
    assert_eq!(verdict.prediction, 0);
}
