//! Per-session analytics: intent distribution and escalation count.

use campus_core::intent::Intent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Analytics data for a single session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionAnalytics {
    /// Intent → count within this session.
    pub intent_distribution: HashMap<String, u64>,
    /// Turns routed to escalation.
    pub escalations: u64,
    /// Completed turns.
    pub turns: u64,
}

impl SessionAnalytics {
    /// Record the intent of a completed turn.
    pub fn record_intent(&mut self, intent: Intent) {
        *self
            .intent_distribution
            .entry(intent.as_str().to_string())
            .or_insert(0) += 1;
        self.turns += 1;
        if intent == Intent::Escalation {
            self.escalations += 1;
        }
    }

    /// Count for one intent.
    pub fn count(&self, intent: Intent) -> u64 {
        self.intent_distribution
            .get(intent.as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Most frequent intents, sorted descending; ties by name.
    pub fn most_common(&self, limit: usize) -> Vec<(String, u64)> {
        let mut sorted: Vec<_> = self.intent_distribution.clone().into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sorted.truncate(limit);
        sorted
    }

    /// Share of turns that escalated, 0.0 for an empty session.
    pub fn escalation_rate(&self) -> f64 {
        if self.turns == 0 {
            return 0.0;
        }
        self.escalations as f64 / self.turns as f64
    }

    /// Fold another session's analytics into this one.
    pub fn merge(&mut self, other: &SessionAnalytics) {
        for (intent, count) in &other.intent_distribution {
            *self.intent_distribution.entry(intent.clone()).or_insert(0) += count;
        }
        self.escalations += other.escalations;
        self.turns += other.turns;
    }
}
