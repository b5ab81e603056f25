//! Per-rule evaluation trace.
//!
//! The trace is the explainability contract of the engine, not a debug
//! aid: for identical input it must reproduce bit-for-bit, including
//! zero-delta entries, in rule-registry order.

use serde::Serialize;

/// One `(rule, delta)` pair recorded during evaluation.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    /// Stable rule identifier.
    pub rule: &'static str,
    /// Signed score delta the rule contributed (always `<= 0`).
    pub delta: i32,
}

/// Ordered record of every rule's contribution to one evaluation.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ScoreTrace {
    entries: Vec<TraceEntry>,
}

impl ScoreTrace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Called once per rule, in evaluation order.
    pub fn record(&mut self, rule: &'static str, delta: i32) {
        self.entries.push(TraceEntry { rule, delta });
    }

    /// Delta recorded for a rule, if present.
    pub fn delta(&self, rule: &str) -> Option<i32> {
        self.entries.iter().find(|e| e.rule == rule).map(|e| e.delta)
    }

    /// Entries in evaluation order.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Sum of all recorded deltas.
    pub fn total_delta(&self) -> i32 {
        self.entries.iter().map(|e| e.delta).sum()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard all entries, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
