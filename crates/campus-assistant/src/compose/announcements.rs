use campus_core::models::Announcement;

use super::{bullet_list, plural, ComposeContext};
use crate::intent::AnnouncementRoute;

const EMPTY: &str = "There are no announcements right now. 📭";

fn render(a: &Announcement) -> String {
    if a.is_high_priority() {
        format!("🔴 {}", a.title)
    } else {
        a.title.clone()
    }
}

pub fn announcements(ctx: &ComposeContext<'_>, route: AnnouncementRoute) -> String {
    let all = &ctx.snapshot.announcements;
    let Some(latest) = all.first() else {
        return EMPTY.to_string();
    };
    match route {
        AnnouncementRoute::Latest => {
            let unread = all.iter().filter(|a| !a.read).count();
            format!(
                "📢 You have {} ({} unread).\nLatest: {}",
                plural(all.len(), "announcement", "announcements"),
                unread,
                render(latest)
            )
        }
        AnnouncementRoute::Unread => listing(
            ctx,
            all.iter().filter(|a| !a.read).collect(),
            "📬 Unread",
            "You're all caught up, no unread announcements. ✅",
        ),
        AnnouncementRoute::Important => listing(
            ctx,
            all.iter().filter(|a| a.is_high_priority()).collect(),
            "🔴 Important",
            "No high-priority announcements at the moment.",
        ),
    }
}

fn listing(ctx: &ComposeContext<'_>, selected: Vec<&Announcement>, heading: &str, empty: &str) -> String {
    if selected.is_empty() {
        return empty.to_string();
    }
    let list = bullet_list(&selected, ctx.config.announcement_list_cap, |a| render(a));
    format!(
        "{heading} ({}):\n{list}",
        plural(selected.len(), "announcement", "announcements")
    )
}
