//! Text normalization shared by the matcher, router, and resolver.

/// Lowercase and trim an utterance.
pub fn normalize(utterance: &str) -> String {
    utterance.trim().to_lowercase()
}

/// Split into words on anything that is not alphanumeric or a hyphen.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .filter(|w| !w.is_empty())
}

/// Words joined by single spaces and padded on both ends, so that
/// `padded.contains(" good morning ")` is a whole-phrase test.
pub fn padded_words(text: &str) -> String {
    let mut out = String::from(" ");
    for word in words(text) {
        out.push_str(word);
        out.push(' ');
    }
    out
}

/// Whole-word (or whole-phrase) containment against a [`padded_words`] string.
pub fn contains_phrase(padded: &str, phrase: &str) -> bool {
    padded.contains(&format!(" {phrase} "))
}
