//! Property-based tests for http-status-checker using proptest
//!
//! These tests generate random URL lists and outcome sets to check the
//! parsing and filtering invariants across a wide range of inputs.

use http_status_checker::core::ProbeError;
use http_status_checker::discovery::parse_url_list;
use http_status_checker::validation::{Summary, apply_filter, filter_only_errors, has_errors};
use http_status_checker::ProbeOutcome;
use proptest::prelude::*;
use std::io::Cursor;
use std::time::Duration;

/// Generate URL-like lines without leading '#' or surrounding whitespace
fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec("[a-z]{3,10}", 1..4)
            .prop_map(|parts| format!("https://{}.com", parts.join("."))),
        (r"[a-z]{3,8}", 1024..65535u16)
            .prop_map(|(domain, port)| format!("http://{domain}:{port}")),
        (r"[a-z]{3,8}", prop::collection::vec(r"[a-z0-9]{1,8}", 0..4)).prop_map(
            |(domain, path)| format!("https://{domain}.com/{}", path.join("/"))
        ),
        Just("not a url".to_string()),
    ]
}

/// Lines the parser must drop
fn noise_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        r"[ \t]{1,4}",
        r"#[ a-z]{0,20}",
        r"[ \t]{0,3}#[a-z]{0,10}",
    ]
}

/// Surrounding whitespace the parser must trim
fn padding_strategy() -> impl Strategy<Value = String> {
    r"[ \t]{0,3}"
}

fn outcome_strategy() -> impl Strategy<Value = ProbeOutcome> {
    let status = prop_oneof![
        Just(200u16),
        Just(204),
        Just(301),
        Just(404),
        Just(500),
        100u16..600,
    ];
    (r"[a-z]{3,8}", status, any::<bool>(), 0u64..5000).prop_map(
        |(name, status, failed, ms)| {
            let url = format!("https://{name}.com");
            let duration = Duration::from_millis(ms);
            if failed {
                ProbeOutcome::failure(url, ProbeError::DeadlineExceeded, duration)
            } else {
                ProbeOutcome::success(url, status, duration)
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every URL line survives trimmed and in order, every noise line is dropped
    #[test]
    fn test_parse_url_list_keeps_urls_in_order(
        entries in prop::collection::vec(
            (url_strategy(), padding_strategy(), padding_strategy(), prop::collection::vec(noise_strategy(), 0..3)),
            0..20
        )
    ) {
        let mut content = String::new();
        for (url, left, right, noise) in &entries {
            for line in noise {
                content.push_str(line);
                content.push('\n');
            }
            content.push_str(&format!("{left}{url}{right}\n"));
        }

        let parsed = parse_url_list(Cursor::new(content)).expect("in-memory read cannot fail");
        let expected: Vec<String> = entries.iter().map(|(url, ..)| url.clone()).collect();

        prop_assert_eq!(parsed, expected);
    }

    /// The error filter is an order-preserving subsequence made only of errors
    #[test]
    fn test_filter_only_errors_is_ordered_subset(
        outcomes in prop::collection::vec(outcome_strategy(), 0..30)
    ) {
        let filtered = filter_only_errors(&outcomes);

        prop_assert!(filtered.iter().all(ProbeOutcome::has_error));
        prop_assert_eq!(
            filtered.len(),
            outcomes.iter().filter(|o| o.has_error()).count()
        );

        let mut remaining = outcomes.iter();
        for kept in &filtered {
            prop_assert!(remaining.any(|o| o == kept));
        }
    }

    /// Disabled filter is the identity
    #[test]
    fn test_apply_filter_disabled_is_identity(
        outcomes in prop::collection::vec(outcome_strategy(), 0..30)
    ) {
        prop_assert_eq!(apply_filter(outcomes.clone(), false), outcomes);
    }

    #[test]
    fn test_has_errors_matches_filter(
        outcomes in prop::collection::vec(outcome_strategy(), 0..30)
    ) {
        prop_assert_eq!(has_errors(&outcomes), !filter_only_errors(&outcomes).is_empty());
    }

    #[test]
    fn test_summary_counts_add_up(
        outcomes in prop::collection::vec(outcome_strategy(), 0..30)
    ) {
        let summary = Summary::from_results(&outcomes);

        prop_assert_eq!(summary.total, outcomes.len());
        prop_assert_eq!(summary.successful + summary.errors, summary.total);
        prop_assert_eq!(summary.all_successful(), summary.errors == 0);
    }
}
