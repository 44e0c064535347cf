//! End-of-journey score derivation.
//!
//! Every function here is a pure read of a [`ScoreLedger`]. Nothing is cached,
//! so the results always reflect the ledger's current counters.
use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::kinds::{EncounterKind, HotSpringTier, Panorama, Souvenir};
use crate::ledger::ScoreLedger;
use crate::numbers::{points, saturating_sum, triangular};
use crate::rules::ScoringRules;

/// Scoring categories, in the order they appear on a score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Panoramas,
    Souvenirs,
    HotSprings,
    Temple,
    Encounters,
    Meals,
    Achievements,
}

impl Category {
    pub const ALL: &'static [Self] = &[
        Self::Panoramas,
        Self::Souvenirs,
        Self::HotSprings,
        Self::Temple,
        Self::Encounters,
        Self::Meals,
        Self::Achievements,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Panoramas => "panoramas",
            Self::Souvenirs => "souvenirs",
            Self::HotSprings => "hot_springs",
            Self::Temple => "temple",
            Self::Encounters => "encounters",
            Self::Meals => "meals",
            Self::Achievements => "achievements",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| LedgerError::invalid("score category", s))
    }
}

/// Per-category scores for one ledger, plus their total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub panoramas: u32,
    pub souvenirs: u32,
    pub hot_springs: u32,
    pub temple: u32,
    pub encounters: u32,
    pub meals: u32,
    pub achievements: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    #[must_use]
    pub const fn get(&self, category: Category) -> u32 {
        match category {
            Category::Panoramas => self.panoramas,
            Category::Souvenirs => self.souvenirs,
            Category::HotSprings => self.hot_springs,
            Category::Temple => self.temple,
            Category::Encounters => self.encounters,
            Category::Meals => self.meals,
            Category::Achievements => self.achievements,
        }
    }

    /// Category scores in score-sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL
            .iter()
            .map(move |category| (*category, self.get(*category)))
    }

    /// Saturating sum of the seven category scores. Always equals `total`.
    #[must_use]
    pub fn category_sum(&self) -> u32 {
        saturating_sum(self.iter().map(|(_, score)| score))
    }
}

/// Sum of the triangular numbers of each panorama's completed sections.
#[must_use]
pub fn panorama_score(ledger: &ScoreLedger) -> u32 {
    saturating_sum(
        Panorama::ALL
            .iter()
            .map(|kind| triangular(ledger.panorama(*kind))),
    )
}

/// Souvenir tallies sorted most-collected first, each weighted by position.
#[must_use]
pub fn souvenir_score(ledger: &ScoreLedger, rules: &ScoringRules) -> u32 {
    let mut counts = [0_u32; 4];
    for (slot, kind) in counts.iter_mut().zip(Souvenir::ALL) {
        *slot = ledger.souvenirs(*kind);
    }
    counts.sort_unstable_by(|a, b| b.cmp(a));
    saturating_sum(
        counts
            .iter()
            .zip(rules.souvenir_weights)
            .map(|(count, weight)| points(*count, weight)),
    )
}

#[must_use]
pub fn hot_spring_score(ledger: &ScoreLedger, rules: &ScoringRules) -> u32 {
    let rates = rules.hot_spring_points(ledger.traveler());
    saturating_sum(
        HotSpringTier::ALL
            .iter()
            .map(|tier| points(ledger.hot_springs(*tier), rates.for_tier(*tier))),
    )
}

/// Donated coins plus the bonus for the player's temple rank.
#[must_use]
pub fn temple_score(ledger: &ScoreLedger, rules: &ScoringRules) -> u32 {
    ledger
        .temple_coins()
        .saturating_add(rules.rank_bonus(ledger.temple_rank()))
}

#[must_use]
pub fn encounter_score(ledger: &ScoreLedger, rules: &ScoringRules) -> u32 {
    let rates = rules.encounter_points(ledger.traveler());
    saturating_sum(
        EncounterKind::ALL
            .iter()
            .map(|kind| points(ledger.encounters(*kind), rates.for_kind(*kind))),
    )
}

#[must_use]
pub const fn meal_score(ledger: &ScoreLedger, rules: &ScoringRules) -> u32 {
    points(ledger.meals(), rules.meal_points)
}

#[must_use]
pub fn achievement_score(ledger: &ScoreLedger, rules: &ScoringRules) -> u32 {
    points(
        ledger.achievement_count(),
        rules.achievement_points(ledger.traveler()),
    )
}

/// Score a single category.
#[must_use]
pub fn category_score(ledger: &ScoreLedger, rules: &ScoringRules, category: Category) -> u32 {
    match category {
        Category::Panoramas => panorama_score(ledger),
        Category::Souvenirs => souvenir_score(ledger, rules),
        Category::HotSprings => hot_spring_score(ledger, rules),
        Category::Temple => temple_score(ledger, rules),
        Category::Encounters => encounter_score(ledger, rules),
        Category::Meals => meal_score(ledger, rules),
        Category::Achievements => achievement_score(ledger, rules),
    }
}

/// Score every category and total them.
#[must_use]
pub fn compute_breakdown(ledger: &ScoreLedger, rules: &ScoringRules) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        panoramas: panorama_score(ledger),
        souvenirs: souvenir_score(ledger, rules),
        hot_springs: hot_spring_score(ledger, rules),
        temple: temple_score(ledger, rules),
        encounters: encounter_score(ledger, rules),
        meals: meal_score(ledger, rules),
        achievements: achievement_score(ledger, rules),
        total: 0,
    };
    breakdown.total = breakdown.category_sum();
    trace!("score for {} traveler: {breakdown:?}", ledger.traveler());
    breakdown
}

/// Grand total across all seven categories.
#[must_use]
pub fn compute_total(ledger: &ScoreLedger, rules: &ScoringRules) -> u32 {
    let total = saturating_sum(
        Category::ALL
            .iter()
            .map(|category| category_score(ledger, rules, *category)),
    );
    trace!("total for {} traveler: {total}", ledger.traveler());
    total
}

/// Score queries using the base game's rules.
impl ScoreLedger {
    #[must_use]
    pub fn panorama_score(&self) -> u32 {
        panorama_score(self)
    }

    #[must_use]
    pub fn souvenir_score(&self) -> u32 {
        souvenir_score(self, &ScoringRules::STANDARD)
    }

    #[must_use]
    pub fn hot_spring_score(&self) -> u32 {
        hot_spring_score(self, &ScoringRules::STANDARD)
    }

    #[must_use]
    pub fn temple_score(&self) -> u32 {
        temple_score(self, &ScoringRules::STANDARD)
    }

    #[must_use]
    pub fn encounter_score(&self) -> u32 {
        encounter_score(self, &ScoringRules::STANDARD)
    }

    #[must_use]
    pub const fn meal_score(&self) -> u32 {
        meal_score(self, &ScoringRules::STANDARD)
    }

    #[must_use]
    pub fn achievement_score(&self) -> u32 {
        achievement_score(self, &ScoringRules::STANDARD)
    }

    #[must_use]
    pub fn category_score(&self, category: Category) -> u32 {
        category_score(self, &ScoringRules::STANDARD, category)
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        compute_total(self, &ScoringRules::STANDARD)
    }

    #[must_use]
    pub fn breakdown(&self) -> ScoreBreakdown {
        compute_breakdown(self, &ScoringRules::STANDARD)
    }

    #[must_use]
    pub fn breakdown_with(&self, rules: &ScoringRules) -> ScoreBreakdown {
        compute_breakdown(self, rules)
    }
}
