//! Criterion benchmarks for the scoring hot path.
//!
//! Covers: full rule evaluation (with and without tracing), haversine
//! distance, and the movement classifier.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use veritas_core::behaviour::{BehaviourInfo, GeoPoint, RegistrationBehaviour, VotingBehaviour};
use veritas_core::{EngineConfig, ScoreTrace};
use veritas_engine::geo::distance_km;
use veritas_engine::movement::is_unrealistic_movement;
use veritas_engine::CredibilityEngine;

fn sample_info() -> BehaviourInfo {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    BehaviourInfo {
        credibility: 74,
        issued_at: now - Duration::days(90),
        last_interaction_at: Some(now - Duration::hours(3)),
        last_interaction_position: Some(GeoPoint::new(48.137, 11.575)),
        average_interaction_interval_ms: 5_400_000,
        unrealistic_movement_count: 1,
        voting: VotingBehaviour {
            total_count: 120,
            upvote_count: 70,
            downvote_count: 50,
            last_voted_at: Some(now - Duration::hours(3)),
            average_voting_interval_ms: 14_400_000,
        },
        registration: RegistrationBehaviour {
            total_count: 12,
            last_registration_at: Some(now - Duration::days(2)),
            average_registration_interval_ms: 604_800_000,
        },
    }
}

fn bench_compute_credibility(c: &mut Criterion) {
    let engine = CredibilityEngine::new(EngineConfig::v2());
    let info = sample_info();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    c.bench_function("compute_credibility", |b| {
        b.iter(|| engine.compute_credibility(black_box(&info), black_box(now), None))
    });
}

fn bench_compute_credibility_traced(c: &mut Criterion) {
    let engine = CredibilityEngine::new(EngineConfig::v2());
    let info = sample_info();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let mut trace = ScoreTrace::new();

    c.bench_function("compute_credibility_traced", |b| {
        b.iter(|| {
            trace.clear();
            engine.compute_credibility(black_box(&info), black_box(now), Some(&mut trace))
        })
    });
}

fn bench_distance(c: &mut Criterion) {
    let munich = GeoPoint::new(48.137, 11.575);
    let sydney = GeoPoint::new(-33.868, 151.209);

    c.bench_function("distance_km", |b| {
        b.iter(|| distance_km(black_box(&munich), black_box(&sydney)))
    });
}

fn bench_movement_classifier(c: &mut Criterion) {
    let munich = GeoPoint::new(48.137, 11.575);
    let berlin = GeoPoint::new(52.520, 13.405);
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let last_seen = now - Duration::minutes(30);

    c.bench_function("is_unrealistic_movement", |b| {
        b.iter(|| {
            is_unrealistic_movement(
                black_box(&munich),
                black_box(&berlin),
                black_box(last_seen),
                black_box(now),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_compute_credibility,
    bench_compute_credibility_traced,
    bench_distance,
    bench_movement_classifier,
);
criterion_main!(benches);
