//! Centralized scoring constants for the Tokaido end-of-game tally.
//!
//! These values are the printed scoring rules of the base game.
//! `ScoringRules::default()` is built from them.

// Panorama caps ------------------------------------------------------------
pub(crate) const PADDY_PANORAMA_CAP: u32 = 3;
pub(crate) const MOUNTAIN_PANORAMA_CAP: u32 = 4;
pub(crate) const SEA_PANORAMA_CAP: u32 = 5;

// Souvenirs ----------------------------------------------------------------
/// Points per souvenir, from the most-collected kind to the least-collected.
pub(crate) const SOUVENIR_WEIGHTS: [u32; 4] = [1, 3, 5, 7];

// Hot springs --------------------------------------------------------------
pub(crate) const HOT_SPRING_TWO_POINTS: u32 = 2;
pub(crate) const HOT_SPRING_THREE_POINTS: u32 = 3;
pub(crate) const MITSUKUNI_HOT_SPRING_TWO_POINTS: u32 = 3;
pub(crate) const MITSUKUNI_HOT_SPRING_THREE_POINTS: u32 = 4;

// Temple -------------------------------------------------------------------
/// Bonus for temple ranks 1 through 5.
pub(crate) const TEMPLE_RANK_BONUS: [u32; 5] = [10, 7, 4, 2, 2];

// Encounters ---------------------------------------------------------------
pub(crate) const SAMURAI_ENCOUNTER_POINTS: u32 = 3;
pub(crate) const OTHER_ENCOUNTER_POINTS: u32 = 0;
pub(crate) const UMEGAE_SAMURAI_ENCOUNTER_POINTS: u32 = 4;
pub(crate) const UMEGAE_OTHER_ENCOUNTER_POINTS: u32 = 1;

// Meals --------------------------------------------------------------------
pub(crate) const MEAL_POINTS: u32 = 6;

// Achievements -------------------------------------------------------------
pub(crate) const ACHIEVEMENT_POINTS: u32 = 3;
pub(crate) const MITSUKUNI_ACHIEVEMENT_POINTS: u32 = 4;
