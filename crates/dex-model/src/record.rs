//! Catalog records.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Image shown when a record has no artwork at all.
pub const FALLBACK_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/items/poke-ball.png";

/// One catalog entry as returned by the bulk listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordSummary {
    /// Externally assigned, stable id.
    pub id: u32,
    /// Lowercase canonical name.
    pub name: String,
}

impl RecordSummary {
    /// Creates a summary.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The six base stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatName {
    /// Hit points.
    Hp,
    /// Physical attack.
    Attack,
    /// Physical defense.
    Defense,
    /// Special attack.
    SpecialAttack,
    /// Special defense.
    SpecialDefense,
    /// Speed.
    Speed,
}

impl StatName {
    /// All stats in display order.
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    /// The service's name for this stat.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special-attack",
            Self::SpecialDefense => "special-defense",
            Self::Speed => "speed",
        }
    }

    /// Short label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "ATK",
            Self::Defense => "DEF",
            Self::SpecialAttack => "SPA",
            Self::SpecialDefense => "SDF",
            Self::Speed => "SPD",
        }
    }
}

impl FromStr for StatName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|stat| stat.key() == s)
            .ok_or_else(|| ModelError::UnknownStat(s.to_string()))
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Image locators attached to a detail record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    /// Small front sprite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_default: Option<String>,
    /// Large official artwork.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_artwork: Option<String>,
}

impl Sprites {
    /// The preferred display image: artwork, then sprite, then the fallback.
    #[must_use]
    pub fn display_url(&self) -> &str {
        self.official_artwork
            .as_deref()
            .or(self.front_default.as_deref())
            .unwrap_or(FALLBACK_IMAGE_URL)
    }
}

/// Full record, fetched lazily on selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDetail {
    /// Same id as the triggering summary.
    pub id: u32,
    /// Same name as the triggering summary.
    pub name: String,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Base stats.
    pub stats: BTreeMap<StatName, u32>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Ability names in slot order.
    pub abilities: Vec<String>,
    /// Locator of the species resource that links to the evolution chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species_url: Option<String>,
    /// Image locators.
    #[serde(default)]
    pub sprites: Sprites,
}

impl RecordDetail {
    /// Base value of `stat`, or 0 when the service omitted it.
    #[must_use]
    pub fn stat(&self, stat: StatName) -> u32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    /// Height in metres, formatted with one decimal place.
    #[must_use]
    pub fn height_display(&self) -> String {
        scaled_measure(self.height)
    }

    /// Weight in kilograms, formatted with one decimal place.
    #[must_use]
    pub fn weight_display(&self) -> String {
        scaled_measure(self.weight)
    }
}

/// Formats a value stored in tenths with one decimal place.
///
/// ```
/// assert_eq!(dex_model::scaled_measure(69), "6.9");
/// assert_eq!(dex_model::scaled_measure(4), "0.4");
/// ```
#[must_use]
pub fn scaled_measure(tenths: u32) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Identifies a record for a detail fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordRef {
    /// Numeric id.
    Id(u32),
    /// Canonical (lowercase) name.
    Name(String),
}

impl RecordRef {
    /// Reference by name, normalised to lowercase.
    pub fn name(name: impl AsRef<str>) -> Self {
        Self::Name(name.as_ref().trim().to_lowercase())
    }
}

impl FromStr for RecordRef {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyRecordRef);
        }
        Ok(match trimmed.parse::<u32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::name(trimmed),
        })
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> RecordDetail {
        RecordDetail {
            id: 25,
            name: "pikachu".to_string(),
            types: vec!["electric".to_string()],
            stats: BTreeMap::from([(StatName::Hp, 35), (StatName::Speed, 90)]),
            height: 4,
            weight: 60,
            abilities: vec!["static".to_string(), "lightning-rod".to_string()],
            species_url: None,
            sprites: Sprites::default(),
        }
    }

    #[test]
    fn test_missing_stat_reads_zero() {
        let detail = pikachu();
        assert_eq!(detail.stat(StatName::Hp), 35);
        assert_eq!(detail.stat(StatName::SpecialDefense), 0);
    }

    #[test]
    fn test_measures_are_scaled() {
        let detail = pikachu();
        assert_eq!(detail.height_display(), "0.4");
        assert_eq!(detail.weight_display(), "6.0");
        assert_eq!(scaled_measure(9999), "999.9");
    }

    #[test]
    fn test_display_url_fallback_chain() {
        let mut sprites = Sprites::default();
        assert_eq!(sprites.display_url(), FALLBACK_IMAGE_URL);
        sprites.front_default = Some("front.png".to_string());
        assert_eq!(sprites.display_url(), "front.png");
        sprites.official_artwork = Some("art.png".to_string());
        assert_eq!(sprites.display_url(), "art.png");
    }

    #[test]
    fn test_record_ref_parsing() {
        assert_eq!("25".parse::<RecordRef>().unwrap(), RecordRef::Id(25));
        assert_eq!(
            " Pikachu ".parse::<RecordRef>().unwrap(),
            RecordRef::Name("pikachu".to_string())
        );
        assert_eq!("  ".parse::<RecordRef>(), Err(ModelError::EmptyRecordRef));
    }

    #[test]
    fn test_stat_name_round_trip_with_serde() {
        let json = serde_json::to_string(&StatName::SpecialAttack).unwrap();
        assert_eq!(json, "\"special-attack\"");
        assert_eq!("speed".parse::<StatName>().unwrap(), StatName::Speed);
        assert!("accuracy".parse::<StatName>().is_err());
    }
}
