//! Course entity resolution.
//!
//! Tie-break order, each pass over the whole list in delivery order:
//! 1. lowercase title is a substring of the utterance
//! 2. lowercase code is a substring of the utterance
//! 3. some title word longer than `min_word_len` chars is contained in the utterance
//!
//! The first hit wins. There is no ranking by match quality, so two
//! titles sharing a long word resolve to whichever is listed first.

use campus_core::models::Course;

use crate::text::words;

/// Find the course a normalized utterance refers to.
pub fn resolve_course<'a>(text: &str, courses: &'a [Course], min_word_len: usize) -> Option<&'a Course> {
    let by_title = courses.iter().find(|c| {
        let title = c.title.trim().to_lowercase();
        !title.is_empty() && text.contains(&title)
    });
    if by_title.is_some() {
        return by_title;
    }

    let by_code = courses.iter().find(|c| {
        let code = c.code.trim().to_lowercase();
        !code.is_empty() && text.contains(&code)
    });
    if by_code.is_some() {
        return by_code;
    }

    courses.iter().find(|c| {
        let title = c.title.to_lowercase();
        let hit = words(&title)
            .filter(|w| w.chars().count() > min_word_len)
            .any(|w| text.contains(w));
        hit
    })
}
