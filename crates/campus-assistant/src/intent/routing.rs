//! Second-level routing inside an intent. Same first-match-wins discipline
//! as the rule table; keywords match whole words so "news" never reads as
//! "new".

use crate::text::{contains_phrase, padded_words, words};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseRoute {
    Ongoing,
    Completed,
    Upcoming,
    Details,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeRoute {
    Course,
    Overview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRoute {
    Today,
    Tomorrow,
    ThisWeek,
    Exams,
    Overview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementRoute {
    Unread,
    Important,
    Latest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteRoute {
    Favorites,
    Course,
    Search(String),
    Recent,
}

const COURSE_ROUTES: &[(CourseRoute, &[&str])] = &[
    (
        CourseRoute::Ongoing,
        &["current", "currently", "ongoing", "in progress"],
    ),
    (
        CourseRoute::Completed,
        &["completed", "finished", "past", "done"],
    ),
    (CourseRoute::Upcoming, &["upcoming", "next", "future"]),
];

const EVENT_ROUTES: &[(EventRoute, &[&str])] = &[
    (EventRoute::Today, &["today", "tonight"]),
    (EventRoute::Tomorrow, &["tomorrow"]),
    (EventRoute::ThisWeek, &["week"]),
    (EventRoute::Exams, &["exam", "exams"]),
];

const ANNOUNCEMENT_ROUTES: &[(AnnouncementRoute, &[&str])] = &[
    (AnnouncementRoute::Unread, &["unread", "new"]),
    (AnnouncementRoute::Important, &["urgent", "important", "high"]),
];

const FAVORITE_WORDS: &[&str] = &[
    "favorite",
    "favorites",
    "favourite",
    "favourites",
    "starred",
];

/// Words stripped from a notes utterance before it is used as a search term.
pub const NOTE_STOPWORDS: &[&str] = &[
    "note", "notes", "search", "find", "in", "my", "for", "about", "show", "me", "the", "all",
    "any", "a", "list", "please", "with", "on", "do", "i", "have", "what", "are", "can", "you",
    "is", "there", "of",
];

fn first_route<R: Copy>(text: &str, table: &[(R, &[&str])]) -> Option<R> {
    let padded = padded_words(text);
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| contains_phrase(&padded, kw)))
        .map(|(route, _)| *route)
}

/// Status filter first, then details of a resolved course, then summary.
pub fn route_courses(text: &str, course_resolved: bool) -> CourseRoute {
    first_route(text, COURSE_ROUTES).unwrap_or(if course_resolved {
        CourseRoute::Details
    } else {
        CourseRoute::Summary
    })
}

pub fn route_grades(course_resolved: bool) -> GradeRoute {
    if course_resolved {
        GradeRoute::Course
    } else {
        GradeRoute::Overview
    }
}

pub fn route_events(text: &str) -> EventRoute {
    first_route(text, EVENT_ROUTES).unwrap_or(EventRoute::Overview)
}

pub fn route_announcements(text: &str) -> AnnouncementRoute {
    first_route(text, ANNOUNCEMENT_ROUTES).unwrap_or(AnnouncementRoute::Latest)
}

/// Favorites, then a resolved course, then a search term, then recent notes.
pub fn route_notes(text: &str, course_resolved: bool) -> NoteRoute {
    let padded = padded_words(text);
    if FAVORITE_WORDS.iter().any(|w| contains_phrase(&padded, w)) {
        return NoteRoute::Favorites;
    }
    if course_resolved {
        return NoteRoute::Course;
    }
    match extract_search_term(text) {
        Some(term) => NoteRoute::Search(term),
        None => NoteRoute::Recent,
    }
}

/// The utterance with stopwords, punctuation, and single letters removed.
pub fn extract_search_term(text: &str) -> Option<String> {
    let kept: Vec<&str> = words(text)
        .filter(|w| w.chars().count() > 1 && !NOTE_STOPWORDS.contains(w))
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_status_keywords_route_before_details() {
        assert_eq!(route_courses("my ongoing courses", true), CourseRoute::Ongoing);
        assert_eq!(route_courses("completed courses", false), CourseRoute::Completed);
        assert_eq!(route_courses("what's next semester", false), CourseRoute::Upcoming);
        assert_eq!(route_courses("tell me about database systems", true), CourseRoute::Details);
        assert_eq!(route_courses("what courses am i taking?", false), CourseRoute::Summary);
    }

    #[test]
    fn currently_alone_routes_to_ongoing() {
        assert_eq!(route_courses("courses i'm currently taking", false), CourseRoute::Ongoing);
    }

    #[test]
    fn event_routes() {
        assert_eq!(route_events("what's due today"), EventRoute::Today);
        assert_eq!(route_events("anything tomorrow?"), EventRoute::Tomorrow);
        assert_eq!(route_events("schedule this week"), EventRoute::ThisWeek);
        assert_eq!(route_events("upcoming exams"), EventRoute::Exams);
        assert_eq!(route_events("show my schedule"), EventRoute::Overview);
    }

    #[test]
    fn news_is_not_new() {
        assert_eq!(route_announcements("any news?"), AnnouncementRoute::Latest);
        assert_eq!(route_announcements("new announcements"), AnnouncementRoute::Unread);
        assert_eq!(route_announcements("urgent notices"), AnnouncementRoute::Important);
    }

    #[test]
    fn search_term_strips_stopwords() {
        assert_eq!(
            extract_search_term("find my notes about graph theory"),
            Some("graph theory".to_string())
        );
        assert_eq!(extract_search_term("show me my notes"), None);
        assert_eq!(extract_search_term("what's in my notes?"), None);
    }

    #[test]
    fn note_routes() {
        assert_eq!(route_notes("my favourite notes", true), NoteRoute::Favorites);
        assert_eq!(route_notes("notes for dbms", true), NoteRoute::Course);
        assert_eq!(
            route_notes("search notes for sql", false),
            NoteRoute::Search("sql".to_string())
        );
        assert_eq!(route_notes("my notes", false), NoteRoute::Recent);
    }
}
