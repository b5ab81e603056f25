//! # veritas-core
//! Foundation types and traits for the Veritas credibility engine.

pub mod behaviour;
pub mod config;
pub mod constants;
pub mod error;
pub mod trace;
pub mod traits;

pub use behaviour::{BehaviourInfo, GeoPoint, RegistrationBehaviour, VotingBehaviour};
pub use config::EngineConfig;
pub use trace::ScoreTrace;
pub use traits::CredibilityScorer;
