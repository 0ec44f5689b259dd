//! Composers that don't read the snapshot: greeting, help, thanks,
//! generic question, fallback, escalation.

use campus_core::traits::IRandomSource;

use crate::random::choose;

/// Greeting templates; `{name}` is replaced with the display name.
pub const GREETING_TEMPLATES: &[&str] = &[
    "Hello {name}! 👋 I'm your campus assistant. Ask me about your courses, grades, schedule, announcements or notes.",
    "Hi {name}! How can I help with your studies today?",
    "Hey {name}! Ready when you are. Try \"what's due today?\" or \"how are my grades?\"",
    "Good to see you, {name}! What would you like to check today?",
];

/// Fallback templates; `{name}` is replaced with the display name.
pub const FALLBACK_TEMPLATES: &[&str] = &[
    "I'm not sure I understood that, {name}. I can help with your courses, grades, events, announcements and notes. What would you like to know?",
    "Hmm, I didn't catch that. Try asking about your courses, upcoming deadlines, grades or notes.",
    "I can help you with courses, grades, schedule, announcements and notes, {name}. What can I help with?",
];

pub const HELP_TEXT: &str = "Here's what I can help you with:\n\
- 📚 Courses: \"what courses am I taking?\", \"completed courses\"\n\
- 📊 Grades: \"how are my grades?\", \"my grade in Database Systems\"\n\
- 📅 Schedule: \"what's due today?\", \"events this week\", \"upcoming exams\"\n\
- 📢 Announcements: \"any news?\", \"unread announcements\"\n\
- 📝 Notes: \"find notes about SQL\", \"my favorite notes\"\n\
- 👤 Profile: \"who am I?\"";

pub const GENERIC_QUESTION_TEXT: &str = "I'm not able to answer that question directly. \
I work best with questions about your studies, for example:\n\
- \"Which courses am I taking this semester?\"\n\
- \"What's my average grade?\"\n\
- \"Do I have anything due tomorrow?\"\n\
- \"Show my unread announcements\"\n\
- \"Search my notes for normalization\"";

pub const ESCALATION_TEXT: &str = "That question is outside what I can help with here, \
so it will be forwarded to the student support team. 📨\n\n\
In the meantime, I can help with:\n\
- 📚 Courses and enrollment\n\
- 📊 Grades and performance\n\
- 📅 Deadlines, exams and events\n\
- 📢 Announcements\n\
- 📝 Your notes";

pub fn greeting(name: &str, random: &dyn IRandomSource) -> String {
    choose(random, GREETING_TEMPLATES).replace("{name}", name)
}

pub fn help() -> String {
    HELP_TEXT.to_string()
}

pub fn thanks(name: &str) -> String {
    format!("You're welcome, {name}! 😊 Let me know if there's anything else I can help with.")
}

pub fn generic_question() -> String {
    GENERIC_QUESTION_TEXT.to_string()
}

pub fn fallback(name: &str, random: &dyn IRandomSource) -> String {
    choose(random, FALLBACK_TEMPLATES).replace("{name}", name)
}

pub fn escalation() -> String {
    ESCALATION_TEXT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandom;

    #[test]
    fn fixed_random_selects_template() {
        let out = greeting("Asha", &FixedRandom(1));
        assert_eq!(out, "Hi Asha! How can I help with your studies today?");
    }

    #[test]
    fn every_greeting_mentions_name() {
        for i in 0..GREETING_TEMPLATES.len() {
            assert!(greeting("Asha", &FixedRandom(i)).contains("Asha"));
        }
    }

    #[test]
    fn help_and_generic_question_differ() {
        assert_ne!(help(), generic_question());
    }
}
