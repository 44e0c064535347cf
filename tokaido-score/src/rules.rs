//! Scoring weight table.
//!
//! The defaults are the base game's printed rules. A table can also be loaded
//! from JSON, with any missing field falling back to the default.
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACHIEVEMENT_POINTS, HOT_SPRING_THREE_POINTS, HOT_SPRING_TWO_POINTS, MEAL_POINTS,
    MITSUKUNI_ACHIEVEMENT_POINTS, MITSUKUNI_HOT_SPRING_THREE_POINTS,
    MITSUKUNI_HOT_SPRING_TWO_POINTS, OTHER_ENCOUNTER_POINTS, SAMURAI_ENCOUNTER_POINTS,
    SOUVENIR_WEIGHTS, TEMPLE_RANK_BONUS, UMEGAE_OTHER_ENCOUNTER_POINTS,
    UMEGAE_SAMURAI_ENCOUNTER_POINTS,
};
use crate::error::ScoringRulesError;
use crate::kinds::{EncounterKind, HotSpringTier, Traveler};

/// Points per hot spring, by card tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotSpringPoints {
    pub two: u32,
    pub three: u32,
}

impl HotSpringPoints {
    #[must_use]
    pub const fn for_tier(self, tier: HotSpringTier) -> u32 {
        match tier {
            HotSpringTier::Two => self.two,
            HotSpringTier::Three => self.three,
        }
    }
}

/// Points per encounter, by encounter kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterPoints {
    pub samurai: u32,
    pub other: u32,
}

impl EncounterPoints {
    #[must_use]
    pub const fn for_kind(self, kind: EncounterKind) -> u32 {
        match kind {
            EncounterKind::Samurai => self.samurai,
            EncounterKind::Other => self.other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Per-souvenir points, applied to kinds sorted from most to least collected.
    #[serde(default = "ScoringRules::default_souvenir_weights")]
    pub souvenir_weights: [u32; 4],
    #[serde(default = "ScoringRules::default_hot_springs")]
    pub hot_springs: HotSpringPoints,
    #[serde(default = "ScoringRules::default_mitsukuni_hot_springs")]
    pub mitsukuni_hot_springs: HotSpringPoints,
    /// Bonus for temple ranks 1 through 5. Any other rank earns nothing.
    #[serde(default = "ScoringRules::default_temple_rank_bonus")]
    pub temple_rank_bonus: [u32; 5],
    #[serde(default = "ScoringRules::default_encounters")]
    pub encounters: EncounterPoints,
    #[serde(default = "ScoringRules::default_umegae_encounters")]
    pub umegae_encounters: EncounterPoints,
    #[serde(default = "ScoringRules::default_meal_points")]
    pub meal_points: u32,
    #[serde(default = "ScoringRules::default_achievement_points")]
    pub achievement_points: u32,
    #[serde(default = "ScoringRules::default_mitsukuni_achievement_points")]
    pub mitsukuni_achievement_points: u32,
}

impl ScoringRules {
    /// The base game's rules.
    pub const STANDARD: Self = Self {
        souvenir_weights: Self::default_souvenir_weights(),
        hot_springs: Self::default_hot_springs(),
        mitsukuni_hot_springs: Self::default_mitsukuni_hot_springs(),
        temple_rank_bonus: Self::default_temple_rank_bonus(),
        encounters: Self::default_encounters(),
        umegae_encounters: Self::default_umegae_encounters(),
        meal_points: Self::default_meal_points(),
        achievement_points: Self::default_achievement_points(),
        mitsukuni_achievement_points: Self::default_mitsukuni_achievement_points(),
    };

    const fn default_souvenir_weights() -> [u32; 4] {
        SOUVENIR_WEIGHTS
    }

    const fn default_hot_springs() -> HotSpringPoints {
        HotSpringPoints {
            two: HOT_SPRING_TWO_POINTS,
            three: HOT_SPRING_THREE_POINTS,
        }
    }

    const fn default_mitsukuni_hot_springs() -> HotSpringPoints {
        HotSpringPoints {
            two: MITSUKUNI_HOT_SPRING_TWO_POINTS,
            three: MITSUKUNI_HOT_SPRING_THREE_POINTS,
        }
    }

    const fn default_temple_rank_bonus() -> [u32; 5] {
        TEMPLE_RANK_BONUS
    }

    const fn default_encounters() -> EncounterPoints {
        EncounterPoints {
            samurai: SAMURAI_ENCOUNTER_POINTS,
            other: OTHER_ENCOUNTER_POINTS,
        }
    }

    const fn default_umegae_encounters() -> EncounterPoints {
        EncounterPoints {
            samurai: UMEGAE_SAMURAI_ENCOUNTER_POINTS,
            other: UMEGAE_OTHER_ENCOUNTER_POINTS,
        }
    }

    const fn default_meal_points() -> u32 {
        MEAL_POINTS
    }

    const fn default_achievement_points() -> u32 {
        ACHIEVEMENT_POINTS
    }

    const fn default_mitsukuni_achievement_points() -> u32 {
        MITSUKUNI_ACHIEVEMENT_POINTS
    }

    /// Load a rule table from JSON and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or the table fails validation.
    pub fn from_json(json: &str) -> Result<Self, ScoringRulesError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check the ordering invariants of the table.
    ///
    /// Souvenir weights must not decrease from the most-collected kind to the
    /// least-collected, and a better temple rank must never earn a smaller bonus.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ScoringRulesError> {
        for (position, pair) in self.souvenir_weights.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(ScoringRulesError::SouvenirWeightOrder {
                    position: position + 1,
                    weight: pair[1],
                    previous: pair[0],
                });
            }
        }
        for (index, pair) in self.temple_rank_bonus.windows(2).enumerate() {
            if pair[1] > pair[0] {
                return Err(ScoringRulesError::RankBonusOrder {
                    rank: index + 2,
                    bonus: pair[1],
                    better_rank: index + 1,
                    previous: pair[0],
                });
            }
        }
        Ok(())
    }

    /// Bonus awarded for a temple rank. Ranks outside 1..=5 earn nothing.
    #[must_use]
    pub fn rank_bonus(&self, rank: u32) -> u32 {
        rank.checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| self.temple_rank_bonus.get(index))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub const fn hot_spring_points(&self, traveler: Traveler) -> HotSpringPoints {
        match traveler {
            Traveler::Mitsukuni => self.mitsukuni_hot_springs,
            Traveler::None | Traveler::Umegae => self.hot_springs,
        }
    }

    #[must_use]
    pub const fn encounter_points(&self, traveler: Traveler) -> EncounterPoints {
        match traveler {
            Traveler::Umegae => self.umegae_encounters,
            Traveler::None | Traveler::Mitsukuni => self.encounters,
        }
    }

    #[must_use]
    pub const fn achievement_points(&self, traveler: Traveler) -> u32 {
        match traveler {
            Traveler::Mitsukuni => self.mitsukuni_achievement_points,
            Traveler::None | Traveler::Umegae => self.achievement_points,
        }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules_validate() {
        assert_eq!(ScoringRules::default(), ScoringRules::STANDARD);
        assert!(ScoringRules::STANDARD.validate().is_ok());
    }

    #[test]
    fn rank_bonus_table_matches_printed_rules() {
        let rules = ScoringRules::STANDARD;
        let bonuses: Vec<_> = (0..=6).map(|rank| rules.rank_bonus(rank)).collect();
        assert_eq!(bonuses, vec![0, 10, 7, 4, 2, 2, 0]);
        assert_eq!(rules.rank_bonus(u32::MAX), 0);
    }

    #[test]
    fn traveler_rates_switch_only_for_their_traveler() {
        let rules = ScoringRules::STANDARD;
        assert_eq!(
            rules.hot_spring_points(Traveler::Mitsukuni),
            HotSpringPoints { two: 3, three: 4 }
        );
        assert_eq!(
            rules.hot_spring_points(Traveler::Umegae),
            HotSpringPoints { two: 2, three: 3 }
        );
        assert_eq!(rules.encounter_points(Traveler::Umegae).for_kind(EncounterKind::Other), 1);
        assert_eq!(rules.encounter_points(Traveler::Mitsukuni).for_kind(EncounterKind::Other), 0);
        assert_eq!(rules.achievement_points(Traveler::Mitsukuni), 4);
        assert_eq!(rules.achievement_points(Traveler::Umegae), 3);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let rules = ScoringRules::from_json(r#"{ "meal_points": 5 }"#).unwrap();
        assert_eq!(rules.meal_points, 5);
        assert_eq!(rules.souvenir_weights, [1, 3, 5, 7]);
        assert_eq!(rules.temple_rank_bonus, [10, 7, 4, 2, 2]);
    }

    #[test]
    fn decreasing_souvenir_weights_are_rejected() {
        let err = ScoringRules::from_json(r#"{ "souvenir_weights": [1, 5, 3, 7] }"#).unwrap_err();
        assert!(matches!(
            err,
            ScoringRulesError::SouvenirWeightOrder {
                position: 2,
                weight: 3,
                previous: 5,
            }
        ));
    }

    #[test]
    fn rank_bonus_that_rewards_worse_rank_is_rejected() {
        let err =
            ScoringRules::from_json(r#"{ "temple_rank_bonus": [10, 7, 8, 2, 2] }"#).unwrap_err();
        assert!(matches!(
            err,
            ScoringRulesError::RankBonusOrder {
                rank: 3,
                better_rank: 2,
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = ScoringRules::from_json(r#"{ "souvenir_weights": [1, 3] }"#).unwrap_err();
        assert!(matches!(err, ScoringRulesError::Json(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
