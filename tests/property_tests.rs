//! Property-based tests for linktag using proptest
//!
//! These tests generate random response texts to check the extraction and
//! annotation invariants across a wide range of inputs.

use async_trait::async_trait;
use linktag::annotation::annotate_candidates;
use linktag::discovery::{clean_candidate, extract_candidates};
use linktag::validation::{ProbeUrl, is_valid_url};
use linktag::{Pipeline, ProbeOutcome, Verdict};
use proptest::prelude::*;

/// Reports every URL as alive without touching the network
struct AlwaysUp;

#[async_trait]
impl ProbeUrl for AlwaysUp {
    async fn probe(&self, _url: &str) -> ProbeOutcome {
        ProbeOutcome::status(200)
    }
}

/// Generate valid-ish URLs for testing
fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec("[a-z]{3,10}", 1..4)
            .prop_map(|parts| format!("https://{}.com", parts.join("."))),
        (r"[a-z]{3,8}", 1024..65535u16)
            .prop_map(|(domain, port)| format!("http://{}:{}", domain, port)),
        (r"[a-z]{3,8}", prop::collection::vec(r"[a-z]{1,8}", 0..4)).prop_map(
            |(domain, path_parts)| format!("https://{}.com/{}", domain, path_parts.join("/"))
        ),
        (r"[a-z]{3,8}", r"[a-z]{1,8}", r"[a-z]{1,8}").prop_map(|(domain, key, value)| {
            format!("https://{}.com?{}={}", domain, key, value)
        }),
    ]
}

/// Words that never contain a scheme, a slash or a tag bracket
fn word_strategy() -> impl Strategy<Value = String> {
    r"[a-zA-Z0-9,;:()-]{1,12}"
}

/// Generate response-like text mixing words, URLs and punctuation
fn response_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => word_strategy(),
            1 => url_strategy(),
            1 => url_strategy().prop_map(|url| format!("{url}.")),
            1 => url_strategy().prop_map(|url| format!("({url})")),
        ],
        0..20,
    )
    .prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_text_without_scheme_is_unchanged(
        words in prop::collection::vec(word_strategy(), 0..30)
    ) {
        let text = words.join(" ");

        prop_assert!(extract_candidates(&text).is_empty());

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let annotation = runtime.block_on(Pipeline::new(AlwaysUp).process(&text));
        prop_assert_eq!(annotation.annotated, text);
    }

    #[test]
    fn test_extraction_is_idempotent(text in response_strategy()) {
        prop_assert_eq!(extract_candidates(&text), extract_candidates(&text));
    }

    #[test]
    fn test_candidate_spans_point_at_cleaned_url(text in response_strategy()) {
        for candidate in extract_candidates(&text) {
            prop_assert_eq!(&text[candidate.start..candidate.end], candidate.url.as_str());
            prop_assert!(candidate.raw.starts_with(&candidate.url));
        }
    }

    #[test]
    fn test_clean_candidate_strips_only_trailing_punctuation(url in url_strategy(), tail in r"[.)]{0,4}") {
        let raw = format!("{url}{tail}");
        let cleaned = clean_candidate(&raw);

        prop_assert!(!cleaned.ends_with('.') && !cleaned.ends_with(')'));
        prop_assert!(raw.starts_with(cleaned));
        prop_assert_eq!(cleaned, url.as_str());
    }

    #[test]
    fn test_generated_urls_are_valid(url in url_strategy()) {
        prop_assert!(is_valid_url(&url));
    }

    #[test]
    fn test_removing_tags_restores_original(text in response_strategy()) {
        let classified: Vec<_> = extract_candidates(&text)
            .into_iter()
            .map(|candidate| (candidate, Verdict::Verified))
            .collect();
        let annotated = annotate_candidates(&text, &classified);

        prop_assert_eq!(annotated.matches("[Verified] ").count(), classified.len());
        prop_assert_eq!(annotated.replace("[Verified] ", ""), text);
    }
}
