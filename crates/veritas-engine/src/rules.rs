//! Penalty rules over a [`BehaviourInfo`] snapshot.
//!
//! Every rule is a pure function returning a signed delta `<= 0`,
//! independent of evaluation order, with its own cap and its own curve.
//! Rules that infer a rate or ratio are gated on a minimum sample size
//! so sparse histories stay neutral, and age-weighted so brand-new
//! identities are not punished for naturally short early intervals.
//!
//! Magnitudes are clamped to `[0, cap]` before negation: no rule can
//! ever emit a positive (bonus) delta, no matter how benign the input.

use veritas_core::BehaviourInfo;
use veritas_core::config::{AgeCurve, FrequencyParams, MovementCurve, RateParams, RuleParams};
use veritas_core::constants::{MS_PER_DAY, MS_PER_MINUTE};

use chrono::{DateTime, Utc};

/// Derived per-evaluation quantities shared by the age-aware rules.
///
/// An `issued_at` in the future (clock skew, bad upstream data) clamps
/// the age to zero rather than producing a negative age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalContext {
    /// Identity age in fractional days, `>= 0`.
    pub age_days: f64,
    /// Identity age in fractional minutes, `>= 0`.
    pub age_minutes: f64,
}

impl EvalContext {
    /// Derive the context from the identity's issue time and the
    /// explicit evaluation timestamp.
    pub fn new(issued_at: DateTime<Utc>, evaluated_at: DateTime<Utc>) -> Self {
        let age_ms = (evaluated_at - issued_at).num_milliseconds().max(0) as f64;
        Self {
            age_days: age_ms / MS_PER_DAY,
            age_minutes: age_ms / MS_PER_MINUTE,
        }
    }
}

/// Standard logistic function: `1 / (1 + e^(-steepness * (x - inflection)))`.
///
/// Evaluates to 0.5 at the inflection point, approaching 0 below it and
/// 1 above it.
fn logistic(x: f64, inflection: f64, steepness: f64) -> f64 {
    1.0 / (1.0 + (-steepness * (x - inflection)).exp())
}

/// Numerically stable `log10(1 + e^x)`.
///
/// For large `x`, `e^x` overflows f64 while the true value approaches
/// `x / ln(10)`; branch there instead of computing the exponential.
fn softplus_log10(x: f64) -> f64 {
    if x > 30.0 {
        x / std::f64::consts::LN_10
    } else {
        x.exp().ln_1p() / std::f64::consts::LN_10
    }
}

/// Shared curve for the registration-rate and voting-rate rules.
///
/// `magnitude = clamp(cap - e^((anchor - rate) / scale), 0, cap)` —
/// negligible below the human-plausible anchor rate, approaching the
/// cap smoothly (not a hard cliff) above it.
fn rate_penalty(total_count: u32, params: &RateParams, ctx: &EvalContext) -> i32 {
    // Day-one identities divide by a full day, not by zero.
    let age_days = ctx.age_days.max(1.0);
    let per_day = f64::from(total_count) / age_days;
    if per_day <= 0.0 {
        return 0;
    }

    let cap = f64::from(params.cap);
    let magnitude = (cap - ((params.anchor_per_day - per_day) / params.scale).exp())
        .clamp(0.0, cap);
    -(magnitude.round() as i32)
}

/// Shared curve for the three burst-frequency (abuse) rules.
///
/// `penalty = age_weight * cap * severity * confidence`, where
/// - `severity = max(0, 1 - interval / limit)` — 0 at or above the
///   interval limit, approaching 1 as the average interval shrinks;
/// - `confidence = min(1, ln(count + 1) / ln(K))` — more observations
///   strengthen trust in the inferred pattern;
/// - `age_weight` is a logistic in identity age (minutes), so an
///   identity ten minutes old is not condemned for a short history.
///
/// Gated to 0 below `min_samples` observations.
fn interval_penalty(avg_interval_ms: u64, count: u32, params: &FrequencyParams, ctx: &EvalContext) -> i32 {
    if count < params.min_samples {
        return 0;
    }

    let severity = (1.0 - avg_interval_ms as f64 / params.interval_limit_ms as f64).max(0.0);
    let confidence = ((f64::from(count) + 1.0).ln() / f64::from(params.confidence_reference).ln())
        .min(1.0);
    let age_weight = logistic(ctx.age_minutes, params.age_inflection_minutes, params.age_steepness);

    -((age_weight * f64::from(params.cap) * severity * confidence).round() as i32)
}

/// Penalty for accumulated physically implausible movements.
///
/// Zero flagged movements cost nothing. The v2 exponential curve
/// saturates its cap within a handful of detections; the v1 quadratic
/// curve ramps over `saturation` detections.
pub fn movement_penalty(info: &BehaviourInfo, params: &RuleParams, _ctx: &EvalContext) -> i32 {
    let count = info.unrealistic_movement_count;
    if count == 0 {
        return 0;
    }

    let cap = f64::from(params.movement.cap);
    let magnitude = match params.movement.curve {
        MovementCurve::Exponential { offset } => (f64::from(count).exp() + offset).min(cap),
        MovementCurve::Quadratic { saturation } => {
            let x = f64::from(count.min(saturation)) / f64::from(saturation.max(1));
            cap * x * x
        }
    };
    -(magnitude.round() as i32)
}

/// Penalty for an implausible average registration rate per day.
pub fn registration_rate_penalty(info: &BehaviourInfo, params: &RuleParams, ctx: &EvalContext) -> i32 {
    rate_penalty(info.registration.total_count, &params.registration_rate, ctx)
}

/// Penalty for an implausible average voting rate per day.
pub fn voting_rate_penalty(info: &BehaviourInfo, params: &RuleParams, ctx: &EvalContext) -> i32 {
    rate_penalty(info.voting.total_count, &params.voting_rate, ctx)
}

/// Penalty for identity youth: younger identities are less trusted.
///
/// The v2 log-decay curve starts near the cap for a brand-new identity
/// and fades to zero by roughly day 12. The v1 linear ramp holds a flat
/// heavy penalty for the first days, then tapers to zero.
pub fn identity_age_penalty(_info: &BehaviourInfo, params: &RuleParams, ctx: &EvalContext) -> i32 {
    let cap = f64::from(params.identity_age.cap);
    let magnitude = match params.identity_age.curve {
        AgeCurve::LogDecay => {
            (cap - 8.0 * softplus_log10(0.5 * ctx.age_days)).clamp(0.0, cap)
        }
        AgeCurve::LinearRamp { heavy, heavy_days, zero_days } => {
            let heavy = f64::from(heavy).min(cap);
            if ctx.age_days <= heavy_days {
                heavy
            } else if ctx.age_days >= zero_days {
                0.0
            } else {
                heavy * (zero_days - ctx.age_days) / (zero_days - heavy_days)
            }
        }
    };
    -(magnitude.round() as i32)
}

/// Penalty for one-sided voting.
///
/// Requires a minimum vote count; below it the up/down split carries no
/// signal. The deviation of the upvote ratio from 0.5 is doubled and
/// squared, amplifying extreme one-sidedness up to the cap.
pub fn voting_bias_penalty(info: &BehaviourInfo, params: &RuleParams, _ctx: &EvalContext) -> i32 {
    let p = &params.voting_bias;
    let total = info.voting.total_count;
    if total < p.min_votes {
        return 0;
    }

    let ratio = f64::from(info.voting.upvote_count) / f64::from(total);
    let bias = (0.5 - ratio).abs();
    let magnitude = ((2.0 * bias).powi(2) * f64::from(p.cap)).min(f64::from(p.cap));
    -(magnitude.round() as i32)
}

/// Penalty for registering far more than voting.
///
/// Asymmetric around the ideal votes-per-registration ratio: falling
/// short of it is weighted double, exceeding it singly; the deviation
/// is then squared. Neutral until either counter reaches the sample
/// gate, and neutral with zero registrations (no ratio to infer —
/// the explicit divide-by-zero fallback).
pub fn vote_registration_ratio_penalty(info: &BehaviourInfo, params: &RuleParams, _ctx: &EvalContext) -> i32 {
    let p = &params.vote_registration_ratio;
    let votes = info.voting.total_count;
    let regs = info.registration.total_count;
    if votes < p.min_samples && regs < p.min_samples {
        return 0;
    }
    if regs == 0 {
        return 0;
    }

    let ratio = f64::from(votes) / f64::from(regs);
    let bias = if ratio < p.ideal_ratio {
        (p.ideal_ratio - ratio) * 2.0
    } else {
        ratio - p.ideal_ratio
    };
    let magnitude = (bias * bias).round().min(f64::from(p.cap));
    -(magnitude as i32)
}

/// Penalty for bursty interactions of any kind.
pub fn interaction_frequency_penalty(info: &BehaviourInfo, params: &RuleParams, ctx: &EvalContext) -> i32 {
    interval_penalty(
        info.average_interaction_interval_ms,
        info.total_activity(),
        &params.interaction_frequency,
        ctx,
    )
}

/// Penalty for bursty registration activity.
pub fn registration_abuse_penalty(info: &BehaviourInfo, params: &RuleParams, ctx: &EvalContext) -> i32 {
    interval_penalty(
        info.registration.average_registration_interval_ms,
        info.registration.total_count,
        &params.registration_abuse,
        ctx,
    )
}

/// Penalty for bursty voting activity.
pub fn voting_abuse_penalty(info: &BehaviourInfo, params: &RuleParams, ctx: &EvalContext) -> i32 {
    interval_penalty(
        info.voting.average_voting_interval_ms,
        info.voting.total_count,
        &params.voting_abuse,
        ctx,
    )
}

/// Flat penalty for identities that register but never vote (v1 only).
///
/// Fires at `min_registrations` registrations with zero votes; grows by
/// one per excess registration, capped.
pub fn no_vote_penalty(info: &BehaviourInfo, params: &RuleParams, _ctx: &EvalContext) -> i32 {
    let p = &params.no_vote;
    if !p.enabled {
        return 0;
    }
    if info.voting.total_count > 0 || info.registration.total_count < p.min_registrations {
        return 0;
    }

    let excess = info.registration.total_count - p.min_registrations;
    -(p.base.saturating_add(excess).min(p.cap) as i32)
}

/// Penalty proportional to the shortfall below a minimum activity
/// level (v1 only).
pub fn inactivity_penalty(info: &BehaviourInfo, params: &RuleParams, _ctx: &EvalContext) -> i32 {
    let p = &params.inactivity;
    if !p.enabled {
        return 0;
    }
    let total = info.total_activity();
    if total >= p.min_activity {
        return 0;
    }

    let shortfall = p.min_activity - total;
    -(p.per_missing.saturating_mul(shortfall).min(p.cap) as i32)
}
