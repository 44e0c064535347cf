//! Tokaido Score Ledger
//!
//! End-of-journey scoring for a single Tokaido player. A [`ScoreLedger`]
//! holds the raw tallies (panoramas, souvenirs, hot springs, temple,
//! encounters, meals, achievements and the special traveler), and the
//! [`score`] module derives per-category scores and the grand total from it.
//! The crate performs no I/O and keeps no global state.

mod constants;
pub mod error;
pub mod kinds;
pub mod ledger;
pub mod numbers;
pub mod rules;
pub mod score;

// Re-export commonly used types
pub use error::{LedgerError, LedgerResult, ScoringRulesError};
pub use kinds::{Achievement, Counter, EncounterKind, HotSpringTier, Panorama, Souvenir, Traveler};
pub use ledger::ScoreLedger;
pub use rules::{EncounterPoints, HotSpringPoints, ScoringRules};
pub use score::{Category, ScoreBreakdown, compute_breakdown, compute_total};
