use campus_core::models::{Course, CourseStatus};

use super::{fmt_score, plural, ComposeContext};
use crate::intent::GradeRoute;

pub fn grades(ctx: &ComposeContext<'_>, route: GradeRoute) -> String {
    match (route, ctx.course) {
        (GradeRoute::Course, Some(course)) => course_grades(course),
        _ => overview(ctx),
    }
}

/// Qualitative comment for an average total.
pub fn tier_comment(average: f64) -> &'static str {
    if average >= 80.0 {
        "Outstanding work! 🌟"
    } else if average >= 70.0 {
        "Great job! 👏"
    } else if average >= 60.0 {
        "Good progress, keep it up! 👍"
    } else {
        "Keep pushing, you can raise this! 💪"
    }
}

/// Mean of the present totals, rounded to one decimal.
pub fn average_total(courses: &[&Course]) -> Option<f64> {
    let totals: Vec<f64> = courses.iter().filter_map(|c| c.grades.total).collect();
    if totals.is_empty() {
        return None;
    }
    let mean = totals.iter().sum::<f64>() / totals.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

fn overview(ctx: &ComposeContext<'_>) -> String {
    let graded: Vec<&Course> = ctx.snapshot.courses.iter().filter(|c| c.is_graded()).collect();
    if graded.is_empty() {
        return format!(
            "No final grades have been published yet, {}. Keep going, your results will show up here once your courses are completed! 💪",
            ctx.display_name
        );
    }

    let excellent = graded.iter().filter(|c| c.grades.is_excellent()).count();
    let mut out = format!(
        "📊 Grade summary for {}:\nYou have {} (A range) across {}.",
        ctx.display_name,
        plural(excellent, "excellent grade", "excellent grades"),
        plural(graded.len(), "graded course", "graded courses"),
    );
    if let Some(avg) = average_total(&graded) {
        out.push_str(&format!("\nAverage total: {avg:.1}. {}", tier_comment(avg)));
    }
    out
}

fn course_grades(course: &Course) -> String {
    let heading = format!("📊 {} ({})", course.title, course.code);
    match course.status {
        CourseStatus::Upcoming => format!(
            "{} hasn't started yet, so there are no grades to show.",
            course.title
        ),
        CourseStatus::Ongoing => {
            let mut lines = vec![
                heading,
                format!("In progress: {}% complete.", course.progress_percent()),
            ];
            let scores = course.grades.scores();
            if scores.is_empty() {
                lines.push("No assessment scores recorded yet.".to_string());
            } else {
                lines.extend(
                    scores
                        .into_iter()
                        .map(|(label, score)| format!("• {label}: {}", fmt_score(score))),
                );
            }
            lines.join("\n")
        }
        CourseStatus::Completed => match course.grades.final_grade() {
            None => format!("Grades for {} haven't been published yet.", course.title),
            Some(grade) => {
                let mut lines = vec![heading];
                lines.extend(
                    course
                        .grades
                        .scores()
                        .into_iter()
                        .map(|(label, score)| format!("• {label}: {}", fmt_score(score))),
                );
                let marker = if course.grades.is_excellent() { " 🌟" } else { "" };
                lines.push(format!("• Final grade: {grade}{marker}"));
                lines.join("\n")
            }
        },
    }
}
