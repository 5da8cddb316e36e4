//! Breed metadata attached to some images.

use serde::{Deserialize, Deserializer, Serialize};

/// Glyph repeated once per rating point.
pub const RATING_GLYPH: &str = "⭐";

/// A 1-5 breed rating.
///
/// The upstream documents ratings as 1-5 but does not enforce it. Values
/// outside the range are clamped while decoding, so a `Rating` never
/// renders more than five glyphs or fewer than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: u8 = 1;
    /// Highest rating.
    pub const MAX: u8 = 5;

    /// Create a rating, clamping into `MIN..=MAX`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        if clamped != value {
            tracing::warn!(value, clamped, "breed rating out of range, clamping");
        }
        // clamped is within 1..=5
        Self(clamped as u8)
    }

    /// The rating value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The rating as a run of glyphs.
    #[must_use]
    pub fn glyphs(self) -> String {
        RATING_GLYPH.repeat(usize::from(self.0))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Ok(Self::clamped(value))
    }
}

/// Decode a missing or `null` field as the type's default.
///
/// The upstream sends `null` for free-text fields it has no value for.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Breed weight range in both unit systems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    /// Range in kilograms, e.g. "3 - 5".
    #[serde(default, deserialize_with = "null_as_default")]
    pub metric: String,
    /// Range in pounds, e.g. "7 - 10".
    #[serde(default, deserialize_with = "null_as_default")]
    pub imperial: String,
}

/// A cat breed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    /// Upstream breed id (e.g. "abys").
    #[serde(default)]
    pub id: Option<String>,

    /// Breed name.
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Country of origin.
    #[serde(default, deserialize_with = "null_as_default")]
    pub origin: String,

    /// Comma separated temperament traits.
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperament: String,

    /// Life expectancy range in years, e.g. "14 - 15".
    #[serde(default, deserialize_with = "null_as_default")]
    pub life_span: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: Weight,

    #[serde(default)]
    pub adaptability: Option<Rating>,

    #[serde(default)]
    pub affection_level: Option<Rating>,

    #[serde(default)]
    pub child_friendly: Option<Rating>,

    #[serde(default)]
    pub energy_level: Option<Rating>,

    #[serde(default)]
    pub intelligence: Option<Rating>,

    /// Wikipedia article for the breed.
    #[serde(default)]
    pub wikipedia_url: Option<String>,
}

impl Breed {
    /// The five ratings with their display labels, in display order.
    pub fn ratings(&self) -> [(&'static str, Option<Rating>); 5] {
        [
            ("Adaptability", self.adaptability),
            ("Affection Level", self.affection_level),
            ("Child Friendly", self.child_friendly),
            ("Energy Level", self.energy_level),
            ("Intelligence", self.intelligence),
        ]
    }

    /// Life span with its unit, e.g. "14 - 15 years".
    pub fn life_span_display(&self) -> String {
        format!("{} years", self.life_span)
    }

    /// Weight in both units, e.g. "3 - 5 kg (7 - 10 lbs)".
    pub fn weight_display(&self) -> String {
        format!("{} kg ({} lbs)", self.weight.metric, self.weight.imperial)
    }
}
