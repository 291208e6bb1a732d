//! Candidate class-name extraction.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Default extractor: maximal runs of characters that can appear in a class
/// name, not ending in `:`.
static CANDIDATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^<>"'`\s]*[^<>"'`\s:]"#).expect("Invalid candidate regex")
});

/// Extract every candidate identifier from source text.
///
/// Over-matching is harmless: a candidate only retains a utility if the
/// build tool actually generates one with that exact name.
pub fn extract_candidates(source: &str) -> BTreeSet<String> {
    CANDIDATE_REGEX
        .find_iter(source)
        .map(|m| m.as_str().to_string())
        .collect()
}
