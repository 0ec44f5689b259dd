use regex::Regex;
use std::sync::LazyLock;

/// A compiled out-of-scope pattern.
pub struct ScopePattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! scope_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Arithmetic: digit, operator, digit ─────────────────────────────────────
scope_pattern!(RE_ARITHMETIC, r"\d\s*[+\-*/]\s*\d");

// ── General knowledge ──────────────────────────────────────────────────────
scope_pattern!(
    RE_GENERAL_KNOWLEDGE,
    r"who is the president|capital of|who invented|\bweather\b"
);

// ── Consumer tech ──────────────────────────────────────────────────────────
scope_pattern!(
    RE_CONSUMER_TECH,
    r"\b(?:iphone|android|windows|macos|ios|laptop|playstation|xbox)\b"
);

// ── Entertainment ──────────────────────────────────────────────────────────
scope_pattern!(
    RE_ENTERTAINMENT,
    r"\b(?:movies?|songs?|music|games?|netflix)\b"
);

// ── Advice seeking ─────────────────────────────────────────────────────────
scope_pattern!(RE_ADVICE, r"\bshould i\b|\bwhat should\b");

/// All out-of-scope patterns, in evaluation order.
pub fn all_patterns() -> Vec<ScopePattern> {
    vec![
        ScopePattern {
            name: "arithmetic",
            regex: &RE_ARITHMETIC,
        },
        ScopePattern {
            name: "general_knowledge",
            regex: &RE_GENERAL_KNOWLEDGE,
        },
        ScopePattern {
            name: "consumer_tech",
            regex: &RE_CONSUMER_TECH,
        },
        ScopePattern {
            name: "entertainment",
            regex: &RE_ENTERTAINMENT,
        },
        ScopePattern {
            name: "advice",
            regex: &RE_ADVICE,
        },
    ]
}
