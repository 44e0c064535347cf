//! Selector enums naming every tally the ledger tracks.
//!
//! Each selector can be built from a raw index or a string key. Values outside
//! the declared domain are rejected with [`LedgerError::InvalidArgument`].
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{MOUNTAIN_PANORAMA_CAP, PADDY_PANORAMA_CAP, SEA_PANORAMA_CAP};
use crate::error::LedgerError;

/// Look up a selector by position in its `ALL` table.
fn from_index<T: Copy>(all: &[T], field: &'static str, value: u8) -> Result<T, LedgerError> {
    all.get(usize::from(value))
        .copied()
        .ok_or_else(|| LedgerError::invalid(field, value))
}

/// Look up a selector by its string key.
fn from_key<T: Copy>(
    all: &[T],
    field: &'static str,
    key: &str,
    as_str: fn(T) -> &'static str,
) -> Result<T, LedgerError> {
    all.iter()
        .copied()
        .find(|candidate| as_str(*candidate) == key)
        .ok_or_else(|| LedgerError::invalid(field, key))
}

/// Panorama kinds, from the shortest strip to the longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panorama {
    Paddy,
    Mountain,
    Sea,
}

impl Panorama {
    pub const ALL: &'static [Self] = &[Self::Paddy, Self::Mountain, Self::Sea];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paddy => "paddy",
            Self::Mountain => "mountain",
            Self::Sea => "sea",
        }
    }

    /// Number of sections that complete this panorama.
    #[must_use]
    pub const fn cap(self) -> u32 {
        match self {
            Self::Paddy => PADDY_PANORAMA_CAP,
            Self::Mountain => MOUNTAIN_PANORAMA_CAP,
            Self::Sea => SEA_PANORAMA_CAP,
        }
    }
}

/// Souvenir kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Souvenir {
    SmallObject,
    Clothing,
    Art,
    Food,
}

impl Souvenir {
    pub const ALL: &'static [Self] = &[Self::SmallObject, Self::Clothing, Self::Art, Self::Food];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SmallObject => "small_object",
            Self::Clothing => "clothing",
            Self::Art => "art",
            Self::Food => "food",
        }
    }
}

/// Hot-spring cards, keyed by the points printed on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotSpringTier {
    Two,
    Three,
}

impl HotSpringTier {
    pub const ALL: &'static [Self] = &[Self::Two, Self::Three];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Two => "two",
            Self::Three => "three",
        }
    }

    #[must_use]
    pub const fn point_value(self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Resolve a tier from the point value printed on the card.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for any value other than 2 or 3.
    pub fn from_point_value(value: i64) -> Result<Self, LedgerError> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(LedgerError::invalid("hot spring point value", other)),
        }
    }
}

/// Encounter categories that score differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterKind {
    /// Samurai encounters, which every traveler scores.
    Samurai,
    /// Every other encounter. Only Umegae scores these.
    Other,
}

impl EncounterKind {
    pub const ALL: &'static [Self] = &[Self::Samurai, Self::Other];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Samurai => "samurai",
            Self::Other => "other",
        }
    }
}

/// End-of-journey achievement cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstPaddyPanorama,
    FirstMountainPanorama,
    FirstSeaPanorama,
    MostHotSprings,
    MostSouvenirs,
    MostEncounters,
    HighestMealCost,
}

impl Achievement {
    pub const ALL: &'static [Self] = &[
        Self::FirstPaddyPanorama,
        Self::FirstMountainPanorama,
        Self::FirstSeaPanorama,
        Self::MostHotSprings,
        Self::MostSouvenirs,
        Self::MostEncounters,
        Self::HighestMealCost,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstPaddyPanorama => "first_paddy_panorama",
            Self::FirstMountainPanorama => "first_mountain_panorama",
            Self::FirstSeaPanorama => "first_sea_panorama",
            Self::MostHotSprings => "most_hot_springs",
            Self::MostSouvenirs => "most_souvenirs",
            Self::MostEncounters => "most_encounters",
            Self::HighestMealCost => "highest_meal_cost",
        }
    }

    /// The achievement awarded for finishing a panorama first.
    #[must_use]
    pub const fn for_panorama(panorama: Panorama) -> Self {
        match panorama {
            Panorama::Paddy => Self::FirstPaddyPanorama,
            Panorama::Mountain => Self::FirstMountainPanorama,
            Panorama::Sea => Self::FirstSeaPanorama,
        }
    }
}

/// Special traveler whose ability changes how some categories score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Traveler {
    #[default]
    None,
    /// Scores extra for hot springs and achievements.
    Mitsukuni,
    /// Scores every encounter, with a bonus for samurai.
    Umegae,
}

impl Traveler {
    pub const ALL: &'static [Self] = &[Self::None, Self::Mitsukuni, Self::Umegae];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mitsukuni => "mitsukuni",
            Self::Umegae => "umegae",
        }
    }
}

impl fmt::Display for Panorama {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Panorama {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_key(Self::ALL, "panorama kind", s, Self::as_str)
    }
}

impl TryFrom<u8> for Panorama {
    type Error = LedgerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        from_index(Self::ALL, "panorama kind", value)
    }
}

impl fmt::Display for Souvenir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Souvenir {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_key(Self::ALL, "souvenir kind", s, Self::as_str)
    }
}

impl TryFrom<u8> for Souvenir {
    type Error = LedgerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        from_index(Self::ALL, "souvenir kind", value)
    }
}

impl fmt::Display for HotSpringTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HotSpringTier {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_key(Self::ALL, "hot spring tier", s, Self::as_str)
    }
}

impl TryFrom<u8> for HotSpringTier {
    type Error = LedgerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        from_index(Self::ALL, "hot spring tier", value)
    }
}

impl fmt::Display for EncounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncounterKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_key(Self::ALL, "encounter kind", s, Self::as_str)
    }
}

impl TryFrom<u8> for EncounterKind {
    type Error = LedgerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        from_index(Self::ALL, "encounter kind", value)
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Achievement {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_key(Self::ALL, "achievement", s, Self::as_str)
    }
}

impl TryFrom<u8> for Achievement {
    type Error = LedgerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        from_index(Self::ALL, "achievement", value)
    }
}

impl fmt::Display for Traveler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Traveler {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_key(Self::ALL, "traveler", s, Self::as_str)
    }
}

impl TryFrom<u8> for Traveler {
    type Error = LedgerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        from_index(Self::ALL, "traveler", value)
    }
}

/// Uniform selector over every numeric tally slot in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "counter", content = "kind")]
pub enum Counter {
    Panorama(Panorama),
    Souvenir(Souvenir),
    HotSpring(HotSpringTier),
    TempleCoins,
    TempleRank,
    Encounter(EncounterKind),
    Meals,
}

impl Counter {
    /// Upper bound that writes are clamped to, if the slot tolerates overflow.
    ///
    /// Slots without a cap reject anything they cannot store.
    #[must_use]
    pub const fn cap(self) -> Option<u32> {
        match self {
            Self::Panorama(kind) => Some(kind.cap()),
            _ => None,
        }
    }

    /// Human-readable field name used in errors and log lines.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Panorama(_) => "panorama section count",
            Self::Souvenir(_) => "souvenir count",
            Self::HotSpring(_) => "hot spring count",
            Self::TempleCoins => "temple coin count",
            Self::TempleRank => "temple rank",
            Self::Encounter(_) => "encounter count",
            Self::Meals => "meal count",
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panorama(kind) => write!(f, "panorama.{kind}"),
            Self::Souvenir(kind) => write!(f, "souvenir.{kind}"),
            Self::HotSpring(tier) => write!(f, "hot_spring.{tier}"),
            Self::TempleCoins => f.write_str("temple.coins"),
            Self::TempleRank => f.write_str("temple.rank"),
            Self::Encounter(kind) => write!(f, "encounter.{kind}"),
            Self::Meals => f.write_str("meals"),
        }
    }
}

impl FromStr for Counter {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "meals" {
            return Ok(Self::Meals);
        }
        let Some((group, kind)) = s.split_once('.') else {
            return Err(LedgerError::invalid("counter", s));
        };
        match (group, kind) {
            ("panorama", kind) => kind.parse().map(Self::Panorama),
            ("souvenir", kind) => kind.parse().map(Self::Souvenir),
            ("hot_spring", kind) => kind.parse().map(Self::HotSpring),
            ("temple", "coins") => Ok(Self::TempleCoins),
            ("temple", "rank") => Ok(Self::TempleRank),
            ("encounter", kind) => kind.parse().map(Self::Encounter),
            _ => Err(LedgerError::invalid("counter", s)),
        }
    }
}
