#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use routestat_server::config;

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.stats.path, "/stats");
    assert_eq!(cfg.stats.slow_threshold_ms, 10);
    assert_eq!(cfg.stats.popular_min_requests, 1);
    assert!(cfg.stats.exclude_self);
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
stats:
  path: "/__/stats"
  slow_threshold_ms: 250
  popular_min_requests: 5
  exclude_self: false
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
    let t = cfg.stats.thresholds();
    assert_eq!(t.slow_ms, 250);
    assert_eq!(t.popular_requests, 5);
    assert!(!cfg.stats.exclude_self);
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
stats:
  slow_treshold_ms: 20 # typo should fail
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_bad_values() {
    let cases = [
        "version: 1\nstats:\n  path: \"stats\"\n",
        "version: 1\nstats:\n  path: \"/stats/:id\"\n",
        "version: 1\nstats:\n  popular_min_requests: 0\n",
        "version: 1\nstats:\n  path: \"/healthz\"\n",
        "version: 1\nserver:\n  listen: \"not-an-addr\"\n",
    ];
    for case in cases {
        let err = config::load_from_str(case).expect_err(case);
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "case={case}");
    }
}

#[test]
fn missing_file_is_internal_error() {
    let err = config::load_from_file("/nonexistent/routestat.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
