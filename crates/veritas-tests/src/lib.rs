//! Simulation support for the Veritas scoring engine.
//!
//! Generates randomized but shape-realistic [`veritas_core::BehaviourInfo`]
//! snapshots for five archetypes (normal, newbie, power user, bot,
//! spammer) so the full engine can be exercised against populations
//! rather than hand-picked fixtures.

pub mod profiles;
