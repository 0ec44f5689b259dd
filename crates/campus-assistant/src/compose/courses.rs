use campus_core::models::{Course, CourseStatus};

use super::{bullet_list, fmt_score, ComposeContext};
use crate::intent::CourseRoute;

const EMPTY: &str = "You don't have any courses yet. Once you're enrolled, I'll keep track of them for you. 📚";

const MENU: &str = "Ask me about:\n\
- \"ongoing courses\"\n\
- \"completed courses\"\n\
- \"upcoming courses\"\n\
- a specific course by name or code";

pub fn courses(ctx: &ComposeContext<'_>, route: CourseRoute) -> String {
    let all = &ctx.snapshot.courses;
    if all.is_empty() {
        return EMPTY.to_string();
    }
    match route {
        CourseRoute::Ongoing => by_status(ctx, CourseStatus::Ongoing),
        CourseRoute::Completed => by_status(ctx, CourseStatus::Completed),
        CourseRoute::Upcoming => by_status(ctx, CourseStatus::Upcoming),
        CourseRoute::Details => match ctx.course {
            Some(course) => details(course),
            None => summary(ctx),
        },
        CourseRoute::Summary => summary(ctx),
    }
}

fn count(courses: &[Course], status: CourseStatus) -> usize {
    courses.iter().filter(|c| c.status == status).count()
}

fn summary(ctx: &ComposeContext<'_>) -> String {
    let all = &ctx.snapshot.courses;
    format!(
        "📚 Here's your course overview, {}:\n\
         • Currently studying: {}\n\
         • Completed: {}\n\
         • Upcoming: {}\n\n{}",
        ctx.display_name,
        count(all, CourseStatus::Ongoing),
        count(all, CourseStatus::Completed),
        count(all, CourseStatus::Upcoming),
        MENU
    )
}

fn by_status(ctx: &ComposeContext<'_>, status: CourseStatus) -> String {
    let matching: Vec<&Course> = ctx
        .snapshot
        .courses
        .iter()
        .filter(|c| c.status == status)
        .collect();
    if matching.is_empty() {
        return match status {
            CourseStatus::Ongoing => "You're not taking any courses right now.".to_string(),
            CourseStatus::Completed => "You haven't completed any courses yet. Keep going! 💪".to_string(),
            CourseStatus::Upcoming => "You have no upcoming courses scheduled.".to_string(),
        };
    }

    let heading = match status {
        CourseStatus::Ongoing => "📖 Ongoing courses",
        CourseStatus::Completed => "✅ Completed courses",
        CourseStatus::Upcoming => "🗓️ Upcoming courses",
    };
    let list = bullet_list(&matching, ctx.config.course_list_cap, |c| match status {
        CourseStatus::Ongoing => format!("{} ({}) - {}% complete", c.title, c.code, c.progress_percent()),
        _ => format!("{} ({})", c.title, c.code),
    });
    format!("{heading} ({}):\n{list}", matching.len())
}

fn details(course: &Course) -> String {
    let mut lines = vec![
        format!("📘 {} ({})", course.title, course.code),
        format!("• Semester: {}", course.semester),
        format!("• Status: {}", course.status.as_str()),
    ];
    match course.status {
        CourseStatus::Ongoing => {
            lines.push(format!("• Progress: {}%", course.progress_percent()));
        }
        CourseStatus::Completed => {
            let grade = course.grades.final_grade().unwrap_or("not published");
            lines.push(format!("• Final grade: {grade}"));
            if let Some(total) = course.grades.total {
                lines.push(format!("• Total: {}", fmt_score(total)));
            }
        }
        CourseStatus::Upcoming => {
            lines.push("• Starts in an upcoming semester".to_string());
        }
    }
    lines.join("\n")
}
