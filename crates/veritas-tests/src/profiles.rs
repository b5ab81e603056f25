//! Synthetic behaviour profile generators.
//!
//! Each generator draws a plausible parameter vector for its archetype
//! and derives a consistent [`BehaviourInfo`] from it. All randomness
//! comes through the caller's RNG and all times hang off the caller's
//! `now`, so seeded runs are fully reproducible.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use veritas_core::behaviour::{
    BehaviourInfo, GeoPoint, RegistrationBehaviour, VotingBehaviour,
};

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Munich city center, the anchor for "local" users.
const HOME_BASE: GeoPoint = GeoPoint {
    latitude: 48.1,
    longitude: 11.6,
};

/// A random point within roughly `km_radius` of `base`.
fn position_near(rng: &mut impl Rng, base: GeoPoint, km_radius: f64) -> GeoPoint {
    // ~111 km per degree; fine for small radii away from the poles.
    let dx = (rng.gen_range(0.0..1.0) - 0.5) * (km_radius / 111.0);
    let dy = (rng.gen_range(0.0..1.0) - 0.5) * (km_radius / 111.0);
    GeoPoint::new(base.latitude + dx, base.longitude + dy)
}

/// A uniformly random point anywhere on the globe.
fn position_worldwide(rng: &mut impl Rng) -> GeoPoint {
    GeoPoint::new(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0))
}

fn split_votes(rng: &mut impl Rng, total: u32, ratio_range: std::ops::Range<f64>) -> (u32, u32) {
    let ratio = rng.gen_range(ratio_range);
    let upvotes = (f64::from(total) * ratio).round() as u32;
    (upvotes, total - upvotes)
}

/// An established user with organic, low-volume activity.
pub fn normal_profile(rng: &mut impl Rng, now: DateTime<Utc>) -> BehaviourInfo {
    let age_days = rng.gen_range(14..1000);
    let issued_at = now - Duration::days(age_days);

    let votes = (rng.gen_range(0.10..0.30) * age_days as f64).round() as u32;
    let (upvotes, downvotes) = split_votes(rng, votes, 0.40..0.60);
    let registrations = (rng.gen_range(0.01..0.15) * age_days as f64).round() as u32;

    BehaviourInfo {
        credibility: 0,
        issued_at,
        last_interaction_at: Some(now - Duration::hours(rng.gen_range(1..72))),
        last_interaction_position: Some(position_near(rng, HOME_BASE, 2.0)),
        average_interaction_interval_ms: rng.gen_range(MS_PER_HOUR..7 * MS_PER_DAY) as u64,
        unrealistic_movement_count: 0,
        voting: VotingBehaviour {
            total_count: votes,
            upvote_count: upvotes,
            downvote_count: downvotes,
            last_voted_at: Some(now - Duration::hours(rng.gen_range(1..96))),
            average_voting_interval_ms: rng.gen_range(MS_PER_HOUR..7 * MS_PER_DAY) as u64,
        },
        registration: RegistrationBehaviour {
            total_count: registrations,
            last_registration_at: Some(now - Duration::days(rng.gen_range(1..14))),
            average_registration_interval_ms: rng.gen_range(MS_PER_DAY..14 * MS_PER_DAY) as u64,
        },
    }
}

/// A recently issued identity with sparse history and a stored
/// mid-range credibility from earlier scoring runs.
pub fn newbie_profile(rng: &mut impl Rng, now: DateTime<Utc>) -> BehaviourInfo {
    let age_minutes = rng.gen_range(10..20_160); // up to 14 days
    let issued_at = now - Duration::minutes(age_minutes);
    let age_days = (age_minutes / (24 * 60)) as f64;

    let votes = (rng.gen_range(0.10..0.20) * age_days).round() as u32 + rng.gen_range(0..2);
    let (upvotes, downvotes) = split_votes(rng, votes, 0.40..0.60);
    let registrations = (rng.gen_range(0.01..0.05) * age_days).round() as u32;

    BehaviourInfo {
        credibility: rng.gen_range(40..60),
        issued_at,
        last_interaction_at: Some(now - Duration::minutes(rng.gen_range(1..age_minutes.max(2)))),
        last_interaction_position: Some(position_near(rng, HOME_BASE, 2.0)),
        average_interaction_interval_ms: rng.gen_range(MS_PER_HOUR..MS_PER_DAY) as u64,
        unrealistic_movement_count: 0,
        voting: VotingBehaviour {
            total_count: votes,
            upvote_count: upvotes,
            downvote_count: downvotes,
            last_voted_at: None,
            average_voting_interval_ms: rng.gen_range(MS_PER_HOUR..MS_PER_DAY) as u64,
        },
        registration: RegistrationBehaviour {
            total_count: registrations,
            last_registration_at: None,
            average_registration_interval_ms: rng.gen_range(MS_PER_HOUR..MS_PER_DAY) as u64,
        },
    }
}

/// A heavy but human user: high volume, varied targets, sane cadence.
pub fn power_user_profile(rng: &mut impl Rng, now: DateTime<Utc>) -> BehaviourInfo {
    let age_days = rng.gen_range(25..1000);
    let issued_at = now - Duration::days(age_days);

    let votes = (rng.gen_range(0.30..0.75) * age_days as f64).round() as u32;
    let (upvotes, downvotes) = split_votes(rng, votes, 0.35..0.65);
    let registrations = (rng.gen_range(0.05..0.25) * age_days as f64).round() as u32;

    BehaviourInfo {
        credibility: 0,
        issued_at,
        last_interaction_at: Some(now - Duration::minutes(rng.gen_range(5..360))),
        last_interaction_position: Some(position_near(rng, HOME_BASE, 2.0)),
        average_interaction_interval_ms: rng.gen_range(10 * 1000..30 * MS_PER_MINUTE) as u64,
        unrealistic_movement_count: 0,
        voting: VotingBehaviour {
            total_count: votes,
            upvote_count: upvotes,
            downvote_count: downvotes,
            last_voted_at: Some(now - Duration::hours(rng.gen_range(1..24))),
            average_voting_interval_ms: rng.gen_range(MS_PER_DAY..4 * MS_PER_DAY) as u64,
        },
        registration: RegistrationBehaviour {
            total_count: registrations,
            last_registration_at: Some(now - Duration::days(rng.gen_range(1..7))),
            average_registration_interval_ms: rng.gen_range(2 * MS_PER_DAY..7 * MS_PER_DAY)
                as u64,
        },
    }
}

/// An automated account: young, geographically erratic, hammering
/// either the vote or the registration endpoint.
pub fn bot_profile(rng: &mut impl Rng, now: DateTime<Utc>) -> BehaviourInfo {
    let age_minutes = rng.gen_range(10..10_080); // up to 7 days
    let issued_at = now - Duration::minutes(age_minutes);
    let age_days = (age_minutes as f64 / (24.0 * 60.0)).max(0.1);

    let vote_driven = rng.gen_bool(0.5);
    let (votes, registrations) = if vote_driven {
        (
            (rng.gen_range(1.0..10.0) * age_days).round() as u32,
            (rng.gen_range(0.01..0.15) * age_days).round() as u32,
        )
    } else {
        (
            (rng.gen_range(0.10..0.30) * age_days).round() as u32,
            (rng.gen_range(1.0..10.0) * age_days).round() as u32,
        )
    };
    let (upvotes, downvotes) = split_votes(rng, votes, 0.10..0.90);

    let burst = rng.gen_range(10 * 1000..30 * MS_PER_MINUTE) as u64;
    let reg_interval = if vote_driven {
        rng.gen_range(MS_PER_DAY..14 * MS_PER_DAY) as u64
    } else {
        rng.gen_range(10 * 1000..30 * MS_PER_MINUTE) as u64
    };
    let vote_interval = if vote_driven {
        rng.gen_range(10 * 1000..30 * MS_PER_MINUTE) as u64
    } else {
        rng.gen_range(MS_PER_HOUR..7 * MS_PER_DAY) as u64
    };

    BehaviourInfo {
        credibility: 0,
        issued_at,
        last_interaction_at: Some(now - Duration::minutes(rng.gen_range(1..30))),
        last_interaction_position: Some(position_worldwide(rng)),
        average_interaction_interval_ms: burst,
        unrealistic_movement_count: rng.gen_range(1..=4),
        voting: VotingBehaviour {
            total_count: votes,
            upvote_count: upvotes,
            downvote_count: downvotes,
            last_voted_at: Some(now - Duration::minutes(rng.gen_range(1..60))),
            average_voting_interval_ms: vote_interval,
        },
        registration: RegistrationBehaviour {
            total_count: registrations,
            last_registration_at: Some(now - Duration::minutes(rng.gen_range(1..60))),
            average_registration_interval_ms: reg_interval,
        },
    }
}

/// A spam account: like a bot but lower volume and less movement,
/// the kind that tries to stay under the radar.
pub fn spam_profile(rng: &mut impl Rng, now: DateTime<Utc>) -> BehaviourInfo {
    let mut info = bot_profile(rng, now);
    let age_days = ((now - info.issued_at).num_minutes() as f64 / (24.0 * 60.0)).max(0.1);

    // Dial volumes down to 1–2.5 per day on the abused endpoint.
    let scale = rng.gen_range(1.0..2.5);
    if info.voting.total_count > info.registration.total_count {
        info.voting.total_count = (scale * age_days).round() as u32;
    } else {
        info.registration.total_count = (scale * age_days).round() as u32;
    }
    let (upvotes, downvotes) = split_votes(rng, info.voting.total_count, 0.10..0.90);
    info.voting.upvote_count = upvotes;
    info.voting.downvote_count = downvotes;
    info.unrealistic_movement_count = rng.gen_range(0..=2);
    info
}
