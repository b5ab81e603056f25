//! Engine configuration: rule parameters and named presets.
//!
//! Two heuristic revisions exist historically. Rather than two code
//! paths, one parameterized engine carries both as presets:
//!
//! | Preset | Movement curve | Age curve  | Confidence K | Extra rules          |
//! |--------|----------------|------------|--------------|----------------------|
//! | v2     | exponential    | log decay  | 100          | none                 |
//! | v1     | quadratic      | linear ramp| 50           | no-vote, inactivity  |
//!
//! `EngineConfig::default()` is the v2 preset, the production default.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SMOOTHING_ALPHA, MIN_SAMPLE_SIZE};

/// Five minutes in milliseconds, the default burst-detection interval limit.
const FIVE_MINUTES_MS: u64 = 5 * 60 * 1000;

/// Shape of the unrealistic-movement penalty curve.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum MovementCurve {
    /// `penalty = e^count + offset`, capped. Escalates brutally fast:
    /// four flagged movements already saturate the cap.
    Exponential { offset: f64 },
    /// `penalty = cap * (count / saturation)^2`, capped at `cap`.
    Quadratic { saturation: u32 },
}

/// Shape of the identity-age penalty curve.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum AgeCurve {
    /// `penalty = cap - 8 * log10(1 + e^(0.5 * age_days))`, clamped to
    /// `[0, cap]`. Smoothly decays to zero by roughly day 12.
    LogDecay,
    /// Flat `heavy` penalty up to `heavy_days`, then a linear taper
    /// reaching zero at `zero_days`.
    LinearRamp {
        heavy: u32,
        heavy_days: f64,
        zero_days: f64,
    },
}

/// Parameters for the movement-count penalty.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovementParams {
    pub cap: u32,
    pub curve: MovementCurve,
}

/// Parameters for the registration-rate and voting-rate penalties.
///
/// The penalty magnitude is `cap - e^((anchor - rate) / scale)` clamped
/// to `[0, cap]`: negligible below the human-plausible `anchor_per_day`,
/// approaching the cap exponentially above it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateParams {
    pub cap: u32,
    pub anchor_per_day: f64,
    pub scale: f64,
}

/// Parameters for the identity-age penalty.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgeParams {
    pub cap: u32,
    pub curve: AgeCurve,
}

/// Parameters for the voting-bias penalty.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BiasParams {
    pub cap: u32,
    /// Minimum vote count before an upvote/downvote ratio is trusted.
    pub min_votes: u32,
}

/// Parameters for the vote/registration-ratio penalty.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatioParams {
    pub cap: u32,
    /// Votes-per-registration ratio considered healthy.
    pub ideal_ratio: f64,
    /// Gate: rule is neutral until either count reaches this.
    pub min_samples: u32,
}

/// Parameters for the three burst-frequency (abuse) penalties.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyParams {
    pub cap: u32,
    /// Average interval at or above which no penalty applies.
    pub interval_limit_ms: u64,
    /// Gate: neutral below this many observations.
    pub min_samples: u32,
    /// Reference sample size `K` in `confidence = ln(n+1) / ln(K)`.
    pub confidence_reference: u32,
    /// Identity age (minutes) at which the logistic age weight is 0.5.
    pub age_inflection_minutes: f64,
    /// Steepness of the logistic age weight.
    pub age_steepness: f64,
}

/// Parameters for the no-vote penalty (v1 preset only).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoVoteParams {
    pub enabled: bool,
    pub cap: u32,
    /// Flat penalty once the rule fires.
    pub base: u32,
    /// Registrations required (with zero votes) for the rule to fire.
    pub min_registrations: u32,
}

/// Parameters for the inactivity penalty (v1 preset only).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InactivityParams {
    pub enabled: bool,
    pub cap: u32,
    /// Penalty per missing activity below the threshold.
    pub per_missing: u32,
    /// Total activities below which the rule fires.
    pub min_activity: u32,
}

/// Per-rule parameters for the full penalty rule set.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuleParams {
    pub movement: MovementParams,
    pub registration_rate: RateParams,
    pub voting_rate: RateParams,
    pub identity_age: AgeParams,
    pub voting_bias: BiasParams,
    pub vote_registration_ratio: RatioParams,
    pub interaction_frequency: FrequencyParams,
    pub registration_abuse: FrequencyParams,
    pub voting_abuse: FrequencyParams,
    pub no_vote: NoVoteParams,
    pub inactivity: InactivityParams,
}

impl RuleParams {
    /// The v2 preset: current production rule set.
    pub fn v2() -> Self {
        let frequency = |cap| FrequencyParams {
            cap,
            interval_limit_ms: FIVE_MINUTES_MS,
            min_samples: MIN_SAMPLE_SIZE,
            confidence_reference: 100,
            age_inflection_minutes: 5.0,
            age_steepness: 0.2,
        };
        Self {
            movement: MovementParams {
                cap: 50,
                curve: MovementCurve::Exponential { offset: 5.0 },
            },
            registration_rate: RateParams {
                cap: 20,
                anchor_per_day: 12.0,
                scale: 4.0,
            },
            voting_rate: RateParams {
                cap: 20,
                anchor_per_day: 30.0,
                scale: 10.0,
            },
            identity_age: AgeParams {
                cap: 20,
                curve: AgeCurve::LogDecay,
            },
            voting_bias: BiasParams {
                cap: 20,
                min_votes: MIN_SAMPLE_SIZE,
            },
            vote_registration_ratio: RatioParams {
                cap: 20,
                ideal_ratio: 0.75,
                min_samples: MIN_SAMPLE_SIZE,
            },
            interaction_frequency: frequency(25),
            registration_abuse: frequency(20),
            voting_abuse: frequency(20),
            no_vote: NoVoteParams {
                enabled: false,
                cap: 20,
                base: 10,
                min_registrations: MIN_SAMPLE_SIZE,
            },
            inactivity: InactivityParams {
                enabled: false,
                cap: 15,
                per_missing: 3,
                min_activity: MIN_SAMPLE_SIZE,
            },
        }
    }

    /// The v1 preset: historical rule set with the no-vote and
    /// inactivity rules enabled and harsher young-identity handling.
    pub fn v1() -> Self {
        let mut params = Self::v2();
        params.movement.curve = MovementCurve::Quadratic { saturation: 10 };
        params.movement.cap = 40;
        params.identity_age.curve = AgeCurve::LinearRamp {
            heavy: 35,
            heavy_days: 2.0,
            zero_days: 28.0,
        };
        params.identity_age.cap = 35;
        params.interaction_frequency.confidence_reference = 50;
        params.registration_abuse.confidence_reference = 50;
        params.voting_abuse.confidence_reference = 50;
        params.no_vote.enabled = true;
        params.inactivity.enabled = true;
        params
    }
}

impl Default for RuleParams {
    fn default() -> Self {
        Self::v2()
    }
}

/// Top-level engine configuration.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// EWMA weight for the new raw score, in `(0, 1)`.
    pub smoothing_alpha: f64,
    /// Per-rule parameters.
    pub rules: RuleParams,
}

impl EngineConfig {
    /// Production configuration (v2 rule preset, alpha 0.4).
    pub fn v2() -> Self {
        Self {
            smoothing_alpha: DEFAULT_SMOOTHING_ALPHA,
            rules: RuleParams::v2(),
        }
    }

    /// Historical configuration (v1 rule preset, alpha 0.4).
    pub fn legacy() -> Self {
        Self {
            smoothing_alpha: DEFAULT_SMOOTHING_ALPHA,
            rules: RuleParams::v1(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v2()
    }
}
