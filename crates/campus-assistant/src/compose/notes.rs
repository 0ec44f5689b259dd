use campus_core::models::{Course, Note};

use super::{bullet_list, plural, ComposeContext};
use crate::intent::NoteRoute;

const EMPTY: &str = "You don't have any notes yet. Create one from the Notes page and I'll help you find it later. 📝";

fn render(note: &Note) -> String {
    if note.favorite {
        format!("⭐ {}", note.title)
    } else {
        note.title.clone()
    }
}

pub fn notes(ctx: &ComposeContext<'_>, route: NoteRoute) -> String {
    let all = &ctx.snapshot.notes;
    if all.is_empty() {
        return EMPTY.to_string();
    }
    match route {
        NoteRoute::Favorites => {
            let favorites: Vec<&Note> = all.iter().filter(|n| n.favorite).collect();
            if favorites.is_empty() {
                return "You haven't starred any notes yet.".to_string();
            }
            let list = bullet_list(&favorites, ctx.config.note_list_cap, |n| n.title.clone());
            format!(
                "⭐ Your favorites ({}):\n{list}",
                plural(favorites.len(), "note", "notes")
            )
        }
        NoteRoute::Course => match ctx.course {
            Some(course) => for_course(ctx, course),
            None => recent(ctx),
        },
        NoteRoute::Search(term) => search(ctx, &term),
        NoteRoute::Recent => recent(ctx),
    }
}

/// Notes whose course reference equals the course title or code, ignoring case.
fn belongs_to(note: &Note, course: &Course) -> bool {
    note.course.as_deref().map(str::trim).is_some_and(|c| {
        c.eq_ignore_ascii_case(course.title.trim()) || c.eq_ignore_ascii_case(course.code.trim())
    })
}

fn for_course(ctx: &ComposeContext<'_>, course: &Course) -> String {
    let selected: Vec<&Note> = ctx.snapshot.notes.iter().filter(|n| belongs_to(n, course)).collect();
    if selected.is_empty() {
        return format!("You don't have any notes for {} yet.", course.title);
    }
    let list = bullet_list(&selected, ctx.config.note_list_cap, |n| render(n));
    format!(
        "📝 {} for {}:\n{list}",
        plural(selected.len(), "note", "notes"),
        course.title
    )
}

fn search(ctx: &ComposeContext<'_>, term: &str) -> String {
    let needle = term.to_lowercase();
    let found: Vec<&Note> = ctx.snapshot.notes.iter().filter(|n| n.matches(&needle)).collect();
    if found.is_empty() {
        return format!("I couldn't find any notes matching \"{term}\".");
    }
    let list = bullet_list(&found, ctx.config.note_list_cap, |n| render(n));
    format!(
        "🔍 Found {} matching \"{term}\":\n{list}",
        plural(found.len(), "note", "notes")
    )
}

fn recent(ctx: &ComposeContext<'_>) -> String {
    let all = &ctx.snapshot.notes;
    let favorites = all.iter().filter(|n| n.favorite).count();
    let list = bullet_list(all, ctx.config.recent_note_cap, render);
    format!(
        "📝 You have {} ({} starred). Recent:\n{list}",
        plural(all.len(), "note", "notes"),
        favorites
    )
}
