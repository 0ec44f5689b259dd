//! Out-of-scope guard. Runs before intent matching; a hit short-circuits
//! to the escalation response.

pub mod patterns;

pub use patterns::{all_patterns, ScopePattern};

/// True if the normalized utterance matches any out-of-scope pattern.
pub fn is_out_of_scope(text: &str) -> bool {
    first_match(text).is_some()
}

/// Name of the first out-of-scope pattern the utterance matches.
pub fn first_match(text: &str) -> Option<&'static str> {
    all_patterns().into_iter().find_map(|pat| {
        let re = pat.regex.as_ref()?;
        re.is_match(text).then_some(pat.name)
    })
}

/// Names of patterns that failed to compile. A failed pattern matches
/// nothing, so the guard degrades to letting those utterances through.
pub fn detector_health() -> Vec<&'static str> {
    all_patterns()
        .into_iter()
        .filter(|pat| pat.regex.is_none())
        .map(|pat| pat.name)
        .collect()
}

/// Utterances that matched no keyword rule and run longer than `threshold`
/// characters are treated as out of scope.
pub fn exceeds_unmatched_threshold(text: &str, threshold: Option<usize>) -> bool {
    threshold.is_some_and(|limit| text.chars().count() > limit)
}
