use campus_core::models::{Event, EventKind};
use chrono::{Days, NaiveDate};

use super::{bullet_list, plural, ComposeContext};
use crate::intent::EventRoute;

const EMPTY: &str = "There's nothing on your calendar yet. 📅";

const MENU: &str = "Ask me about:\n\
- \"what's due today?\"\n\
- \"anything tomorrow?\"\n\
- \"events this week\"\n\
- \"upcoming exams\"";

pub fn events(ctx: &ComposeContext<'_>, route: EventRoute) -> String {
    let today = ctx.today;
    match route {
        EventRoute::Today => window(
            ctx,
            |e| e.date == today,
            "📅 Today's schedule",
            "Nothing scheduled for today. Enjoy your free day! 🎉",
        ),
        EventRoute::Tomorrow => {
            let tomorrow = today.checked_add_days(Days::new(1));
            window(
                ctx,
                |e| Some(e.date) == tomorrow,
                "📅 Tomorrow",
                "Nothing scheduled for tomorrow.",
            )
        }
        EventRoute::ThisWeek => {
            let end = week_end(today);
            window(
                ctx,
                |e| e.date >= today && e.date <= end,
                "📅 This week",
                "Nothing scheduled in the next seven days.",
            )
        }
        EventRoute::Exams => window(
            ctx,
            |e| e.kind == EventKind::Exam && e.date >= today,
            "📝 Upcoming exams",
            "No upcoming exams. 🙌",
        ),
        EventRoute::Overview => overview(ctx),
    }
}

/// Last day of the seven-day window starting at `today`.
fn week_end(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX)
}

fn render(event: &Event) -> String {
    let mut line = format!("{} {}", event.kind.emoji(), event.title);
    if !event.time.trim().is_empty() {
        line.push_str(&format!(" at {}", event.time.trim()));
    }
    line
}

fn window(
    ctx: &ComposeContext<'_>,
    keep: impl Fn(&Event) -> bool,
    heading: &str,
    empty: &str,
) -> String {
    let mut selected: Vec<&Event> = ctx.snapshot.events.iter().filter(|e| keep(e)).collect();
    if selected.is_empty() {
        return empty.to_string();
    }
    selected.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    let show_date = selected.iter().any(|e| e.date != ctx.today);
    let list = bullet_list(&selected, ctx.config.event_list_cap, |e| {
        if show_date {
            format!("{} ({})", render(e), e.date.format("%a %d %b"))
        } else {
            render(e)
        }
    });
    format!(
        "{heading} ({}):\n{list}",
        plural(selected.len(), "event", "events")
    )
}

fn overview(ctx: &ComposeContext<'_>) -> String {
    let all = &ctx.snapshot.events;
    if all.is_empty() {
        return EMPTY.to_string();
    }
    let upcoming = all.iter().filter(|e| e.date >= ctx.today).count();
    format!(
        "📅 You have {} coming up, {}.\n\n{}",
        plural(upcoming, "event", "events"),
        ctx.display_name,
        MENU
    )
}
