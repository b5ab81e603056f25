//! Rule evaluation and score composition.
//!
//! The canonical rule registry is a fixed, ordered list of descriptors
//! iterated in declaration order, so trace output is deterministic
//! without any dynamic dispatch or map-iteration ambiguity.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use veritas_core::config::{EngineConfig, RuleParams};
use veritas_core::{BehaviourInfo, CredibilityScorer, ScoreTrace};
use veritas_core::constants::BASE_SCORE;

use crate::rules::{self, EvalContext};
use crate::smoothing::ewma;

/// Signature shared by every penalty rule.
pub type RuleFn = fn(&BehaviourInfo, &RuleParams, &EvalContext) -> i32;

/// A named rule in the canonical registry.
#[derive(Clone, Copy)]
pub struct RuleDescriptor {
    /// Stable identifier used as the trace key.
    pub name: &'static str,
    /// The rule implementation.
    pub eval: RuleFn,
}

/// The canonical, ordered rule registry.
///
/// Order is part of the explainability contract: traces list rules in
/// exactly this sequence. Rules disabled by the active preset still run
/// (and record a zero delta), keeping trace shape identical across
/// presets.
pub const RULES: &[RuleDescriptor] = &[
    RuleDescriptor { name: "movement", eval: rules::movement_penalty },
    RuleDescriptor { name: "registrationRate", eval: rules::registration_rate_penalty },
    RuleDescriptor { name: "votingRate", eval: rules::voting_rate_penalty },
    RuleDescriptor { name: "identityAge", eval: rules::identity_age_penalty },
    RuleDescriptor { name: "registrationAbuse", eval: rules::registration_abuse_penalty },
    RuleDescriptor { name: "votingAbuse", eval: rules::voting_abuse_penalty },
    RuleDescriptor { name: "interactionFrequency", eval: rules::interaction_frequency_penalty },
    RuleDescriptor { name: "votingBias", eval: rules::voting_bias_penalty },
    RuleDescriptor { name: "voteRegistrationRatio", eval: rules::vote_registration_ratio_penalty },
    RuleDescriptor { name: "noVote", eval: rules::no_vote_penalty },
    RuleDescriptor { name: "inactivity", eval: rules::inactivity_penalty },
];

/// The credibility scoring engine.
///
/// Holds only configuration; every evaluation is pure and operates on
/// an immutable snapshot, so one engine can serve concurrent callers
/// without locking.
#[derive(Debug, Clone, Default)]
pub struct CredibilityEngine {
    config: EngineConfig,
}

impl CredibilityEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the credibility score for one behavioral snapshot.
    ///
    /// Runs every registered rule in order, summing deltas onto a base
    /// of 100, clamps to `[0, 100]`, then blends through the EWMA
    /// against the previously stored credibility when one exists.
    /// Smoothing uses the already-clamped raw score, so the result
    /// cannot leave `[0, 100]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use veritas_core::{BehaviourInfo, ScoreTrace};
    /// use veritas_core::behaviour::{RegistrationBehaviour, VotingBehaviour};
    /// use veritas_engine::CredibilityEngine;
    ///
    /// let now = Utc::now();
    /// let info = BehaviourInfo {
    ///     credibility: 0,
    ///     issued_at: now - Duration::days(365),
    ///     last_interaction_at: None,
    ///     last_interaction_position: None,
    ///     average_interaction_interval_ms: 86_400_000,
    ///     unrealistic_movement_count: 0,
    ///     voting: VotingBehaviour::default(),
    ///     registration: RegistrationBehaviour::default(),
    /// };
    ///
    /// let engine = CredibilityEngine::default();
    /// let mut trace = ScoreTrace::new();
    /// let score = engine.compute_credibility(&info, now, Some(&mut trace));
    /// assert_eq!(score, 100);
    /// assert_eq!(trace.len(), 11);
    /// ```
    pub fn compute_credibility(
        &self,
        info: &BehaviourInfo,
        evaluated_at: DateTime<Utc>,
        mut trace_out: Option<&mut ScoreTrace>,
    ) -> u8 {
        let ctx = EvalContext::new(info.issued_at, evaluated_at);
        let mut score = BASE_SCORE;

        for rule in RULES {
            let delta = (rule.eval)(info, &self.config.rules, &ctx);
            score += delta;
            trace!(rule = rule.name, delta, "rule evaluated");
            if let Some(t) = trace_out.as_deref_mut() {
                t.record(rule.name, delta);
            }
        }

        let raw = score.clamp(0, 100) as u8;

        // Smoothing dampens single-observation volatility; a stored
        // credibility of 0 means no prior history exists to blend with.
        let smoothed = if info.credibility > 0 {
            ewma(
                f64::from(info.credibility),
                f64::from(raw),
                self.config.smoothing_alpha,
            )
            .round()
            .clamp(0.0, 100.0) as u8
        } else {
            raw
        };

        debug!(raw, score = smoothed, "credibility computed");
        smoothed
    }
}

impl CredibilityScorer for CredibilityEngine {
    fn compute_credibility(
        &self,
        info: &BehaviourInfo,
        evaluated_at: DateTime<Utc>,
        trace: Option<&mut ScoreTrace>,
    ) -> u8 {
        Self::compute_credibility(self, info, evaluated_at, trace)
    }
}
