//! Per-player tally of everything that scores at the end of the journey.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::kinds::{
    Achievement, Counter, EncounterKind, HotSpringTier, Panorama, Souvenir, Traveler,
};
use crate::numbers::counter_from_i64;

/// Completed sections per panorama. Never above the panorama's cap, even
/// when loaded from a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPanoramaProgress")]
struct PanoramaProgress {
    paddy: u32,
    mountain: u32,
    sea: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPanoramaProgress {
    paddy: u32,
    mountain: u32,
    sea: u32,
}

fn clamp_loaded(kind: Panorama, sections: u32) -> u32 {
    if sections > kind.cap() {
        debug!(
            "{} clamped from {sections} to {} on load",
            Counter::Panorama(kind),
            kind.cap()
        );
        kind.cap()
    } else {
        sections
    }
}

impl From<RawPanoramaProgress> for PanoramaProgress {
    fn from(raw: RawPanoramaProgress) -> Self {
        Self {
            paddy: clamp_loaded(Panorama::Paddy, raw.paddy),
            mountain: clamp_loaded(Panorama::Mountain, raw.mountain),
            sea: clamp_loaded(Panorama::Sea, raw.sea),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct SouvenirTally {
    small_object: u32,
    clothing: u32,
    art: u32,
    food: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct HotSpringVisits {
    two: u32,
    three: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct TempleState {
    coins: u32,
    /// 1 (most generous donor) through 5, or 0 when unranked.
    rank: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct EncounterTally {
    samurai: u32,
    other: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct Achievements {
    first_paddy_panorama: bool,
    first_mountain_panorama: bool,
    first_sea_panorama: bool,
    most_hot_springs: bool,
    most_souvenirs: bool,
    most_encounters: bool,
    highest_meal_cost: bool,
}

/// Mutable score sheet for a single player.
///
/// Setters validate and store a single counter. Score queries (see
/// [`crate::score`]) are recomputed from the current counters on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreLedger {
    panoramas: PanoramaProgress,
    souvenirs: SouvenirTally,
    hot_springs: HotSpringVisits,
    temple: TempleState,
    encounters: EncounterTally,
    meals: u32,
    achievements: Achievements,
    traveler: Traveler,
}

impl ScoreLedger {
    /// Create a ledger with every tally at zero and no special traveler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the ledger to its freshly constructed state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Store a tally through the uniform counter selector.
    ///
    /// Panorama slots clamp values above their cap. Every other slot stores
    /// the value verbatim.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for negative input, or for uncapped input
    /// larger than `u32::MAX`. The stored value is left unchanged.
    pub fn set_counter(&mut self, counter: Counter, value: i64) -> LedgerResult<()> {
        let stored = match (counter_from_i64(value), counter.cap()) {
            _ if value < 0 => None,
            (Some(count), Some(cap)) if count <= cap => Some(count),
            (_, Some(cap)) => {
                debug!("{counter} clamped from {value} to {cap}");
                Some(cap)
            }
            (count, None) => count,
        };
        let Some(stored) = stored else {
            debug!("{counter} rejected {value}");
            return Err(LedgerError::invalid(counter.field_name(), value));
        };
        *self.slot_mut(counter) = stored;
        Ok(())
    }

    /// Read a tally through the uniform counter selector.
    #[must_use]
    pub const fn counter(&self, counter: Counter) -> u32 {
        match counter {
            Counter::Panorama(Panorama::Paddy) => self.panoramas.paddy,
            Counter::Panorama(Panorama::Mountain) => self.panoramas.mountain,
            Counter::Panorama(Panorama::Sea) => self.panoramas.sea,
            Counter::Souvenir(Souvenir::SmallObject) => self.souvenirs.small_object,
            Counter::Souvenir(Souvenir::Clothing) => self.souvenirs.clothing,
            Counter::Souvenir(Souvenir::Art) => self.souvenirs.art,
            Counter::Souvenir(Souvenir::Food) => self.souvenirs.food,
            Counter::HotSpring(HotSpringTier::Two) => self.hot_springs.two,
            Counter::HotSpring(HotSpringTier::Three) => self.hot_springs.three,
            Counter::TempleCoins => self.temple.coins,
            Counter::TempleRank => self.temple.rank,
            Counter::Encounter(EncounterKind::Samurai) => self.encounters.samurai,
            Counter::Encounter(EncounterKind::Other) => self.encounters.other,
            Counter::Meals => self.meals,
        }
    }

    fn slot_mut(&mut self, counter: Counter) -> &mut u32 {
        match counter {
            Counter::Panorama(Panorama::Paddy) => &mut self.panoramas.paddy,
            Counter::Panorama(Panorama::Mountain) => &mut self.panoramas.mountain,
            Counter::Panorama(Panorama::Sea) => &mut self.panoramas.sea,
            Counter::Souvenir(Souvenir::SmallObject) => &mut self.souvenirs.small_object,
            Counter::Souvenir(Souvenir::Clothing) => &mut self.souvenirs.clothing,
            Counter::Souvenir(Souvenir::Art) => &mut self.souvenirs.art,
            Counter::Souvenir(Souvenir::Food) => &mut self.souvenirs.food,
            Counter::HotSpring(HotSpringTier::Two) => &mut self.hot_springs.two,
            Counter::HotSpring(HotSpringTier::Three) => &mut self.hot_springs.three,
            Counter::TempleCoins => &mut self.temple.coins,
            Counter::TempleRank => &mut self.temple.rank,
            Counter::Encounter(EncounterKind::Samurai) => &mut self.encounters.samurai,
            Counter::Encounter(EncounterKind::Other) => &mut self.encounters.other,
            Counter::Meals => &mut self.meals,
        }
    }

    /// Record completed sections of a panorama, clamped to its cap.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `sections` is negative.
    pub fn set_panorama(&mut self, kind: Panorama, sections: i64) -> LedgerResult<()> {
        self.set_counter(Counter::Panorama(kind), sections)
    }

    #[must_use]
    pub const fn panorama(&self, kind: Panorama) -> u32 {
        self.counter(Counter::Panorama(kind))
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` if `count` is negative.
    pub fn set_souvenirs(&mut self, kind: Souvenir, count: i64) -> LedgerResult<()> {
        self.set_counter(Counter::Souvenir(kind), count)
    }

    #[must_use]
    pub const fn souvenirs(&self, kind: Souvenir) -> u32 {
        self.counter(Counter::Souvenir(kind))
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` if `count` is negative.
    pub fn set_hot_springs(&mut self, tier: HotSpringTier, count: i64) -> LedgerResult<()> {
        self.set_counter(Counter::HotSpring(tier), count)
    }

    #[must_use]
    pub const fn hot_springs(&self, tier: HotSpringTier) -> u32 {
        self.counter(Counter::HotSpring(tier))
    }

    /// Record hot springs by the point value printed on the card.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `point_value` is not 2 or 3, or if `count`
    /// is negative.
    pub fn set_hot_springs_by_value(&mut self, point_value: i64, count: i64) -> LedgerResult<()> {
        let tier = HotSpringTier::from_point_value(point_value)?;
        self.set_hot_springs(tier, count)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` if `point_value` is not 2 or 3.
    pub fn hot_springs_by_value(&self, point_value: i64) -> LedgerResult<u32> {
        HotSpringTier::from_point_value(point_value).map(|tier| self.hot_springs(tier))
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` if `coins` is negative.
    pub fn set_temple_coins(&mut self, coins: i64) -> LedgerResult<()> {
        self.set_counter(Counter::TempleCoins, coins)
    }

    #[must_use]
    pub const fn temple_coins(&self) -> u32 {
        self.temple.coins
    }

    /// Record the player's temple rank. Ranks outside 1..=5 are stored but
    /// earn no bonus.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `rank` is negative.
    pub fn set_temple_rank(&mut self, rank: i64) -> LedgerResult<()> {
        self.set_counter(Counter::TempleRank, rank)
    }

    #[must_use]
    pub const fn temple_rank(&self) -> u32 {
        self.temple.rank
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` if `count` is negative.
    pub fn set_encounters(&mut self, kind: EncounterKind, count: i64) -> LedgerResult<()> {
        self.set_counter(Counter::Encounter(kind), count)
    }

    #[must_use]
    pub const fn encounters(&self, kind: EncounterKind) -> u32 {
        self.counter(Counter::Encounter(kind))
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` if `meals` is negative.
    pub fn set_meals(&mut self, meals: i64) -> LedgerResult<()> {
        self.set_counter(Counter::Meals, meals)
    }

    #[must_use]
    pub const fn meals(&self) -> u32 {
        self.meals
    }

    pub const fn set_achievement(&mut self, achievement: Achievement, earned: bool) {
        *self.flag_mut(achievement) = earned;
    }

    #[must_use]
    pub const fn achievement(&self, achievement: Achievement) -> bool {
        let flags = &self.achievements;
        match achievement {
            Achievement::FirstPaddyPanorama => flags.first_paddy_panorama,
            Achievement::FirstMountainPanorama => flags.first_mountain_panorama,
            Achievement::FirstSeaPanorama => flags.first_sea_panorama,
            Achievement::MostHotSprings => flags.most_hot_springs,
            Achievement::MostSouvenirs => flags.most_souvenirs,
            Achievement::MostEncounters => flags.most_encounters,
            Achievement::HighestMealCost => flags.highest_meal_cost,
        }
    }

    const fn flag_mut(&mut self, achievement: Achievement) -> &mut bool {
        let flags = &mut self.achievements;
        match achievement {
            Achievement::FirstPaddyPanorama => &mut flags.first_paddy_panorama,
            Achievement::FirstMountainPanorama => &mut flags.first_mountain_panorama,
            Achievement::FirstSeaPanorama => &mut flags.first_sea_panorama,
            Achievement::MostHotSprings => &mut flags.most_hot_springs,
            Achievement::MostSouvenirs => &mut flags.most_souvenirs,
            Achievement::MostEncounters => &mut flags.most_encounters,
            Achievement::HighestMealCost => &mut flags.highest_meal_cost,
        }
    }

    /// Number of achievements earned.
    #[must_use]
    pub fn achievement_count(&self) -> u32 {
        let earned = Achievement::ALL
            .iter()
            .filter(|achievement| self.achievement(**achievement))
            .count();
        u32::try_from(earned).unwrap_or(u32::MAX)
    }

    pub const fn set_traveler(&mut self, traveler: Traveler) {
        self.traveler = traveler;
    }

    #[must_use]
    pub const fn traveler(&self) -> Traveler {
        self.traveler
    }

    /// Restore a ledger from a JSON snapshot.
    ///
    /// Missing fields default to zero. Panorama tallies above their cap are
    /// clamped, as if they had been written through [`Self::set_panorama`].
    /// The same holds for any serde deserializer.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Json` if the snapshot cannot be parsed.
    pub fn from_json(json: &str) -> LedgerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the ledger to a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Json` if serialization fails.
    pub fn to_json(&self) -> LedgerResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
