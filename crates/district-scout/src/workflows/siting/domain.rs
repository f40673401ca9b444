use std::collections::BTreeSet;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use super::locale::DisplayLocale;

/// Raw criteria as captured by the submission form.
///
/// Numeric fields stay as entered so that unparseable input is reported
/// through validation rather than rejected while decoding. JSON numbers are
/// accepted for them and kept as their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub city: String,
    pub priorities: BTreeSet<String>,
    #[serde(deserialize_with = "deserialize_field_text")]
    pub min_area: String,
    #[serde(deserialize_with = "deserialize_field_text")]
    pub max_area: String,
    #[serde(deserialize_with = "deserialize_field_text")]
    pub max_rent: String,
    #[serde(deserialize_with = "deserialize_field_text")]
    pub avg_check: String,
    pub business_type: String,
    /// Free text, one district per line.
    pub districts: String,
}

impl FormInput {
    /// Trimmed, non-empty district lines in the order entered. Duplicates are kept.
    pub fn district_names(&self) -> Vec<String> {
        self.districts
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn deserialize_field_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FieldText)
}

/// Accepts strings, numbers, booleans and null; null becomes an empty entry.
struct FieldText;

impl<'de> Visitor<'de> for FieldText {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldText)
    }
}

/// Business category with its fixed additive bias on the attractiveness score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BusinessType {
    CoffeeShop,
    FastFood,
    Pharmacy,
    Restaurant,
    ClothingStore,
    /// Unrecognised category; scored with a neutral bias.
    Other(String),
}

impl BusinessType {
    pub const KNOWN: [BusinessType; 5] = [
        BusinessType::CoffeeShop,
        BusinessType::FastFood,
        BusinessType::Pharmacy,
        BusinessType::Restaurant,
        BusinessType::ClothingStore,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "coffee shop" | "coffee_shop" | "кофейня" => Self::CoffeeShop,
            "fast food" | "fast_food" | "фастфуд" => Self::FastFood,
            "pharmacy" | "аптека" => Self::Pharmacy,
            "restaurant" | "ресторан" => Self::Restaurant,
            "clothing store" | "clothing_store" | "магазин одежды" => Self::ClothingStore,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub const fn multiplier(&self) -> i32 {
        match self {
            Self::CoffeeShop => 15,
            Self::FastFood => 10,
            Self::Pharmacy => 5,
            Self::Restaurant => 0,
            Self::ClothingStore => -5,
            Self::Other(_) => 0,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::CoffeeShop => "coffee shop",
            Self::FastFood => "fast food",
            Self::Pharmacy => "pharmacy",
            Self::Restaurant => "restaurant",
            Self::ClothingStore => "clothing store",
            Self::Other(raw) => raw.as_str(),
        }
    }

    pub fn label(&self, locale: DisplayLocale) -> &str {
        match (locale, self) {
            (DisplayLocale::Russian, Self::CoffeeShop) => "кофейня",
            (DisplayLocale::Russian, Self::FastFood) => "фастфуд",
            (DisplayLocale::Russian, Self::Pharmacy) => "аптека",
            (DisplayLocale::Russian, Self::Restaurant) => "ресторан",
            (DisplayLocale::Russian, Self::ClothingStore) => "магазин одежды",
            _ => self.key(),
        }
    }
}

impl From<String> for BusinessType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<BusinessType> for String {
    fn from(value: BusinessType) -> Self {
        value.key().to_string()
    }
}

/// Foot traffic bucket derived from the traffic draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficTier {
    High,
    Medium,
    Low,
}

impl TrafficTier {
    pub const fn label(self, locale: DisplayLocale) -> &'static str {
        match (locale, self) {
            (DisplayLocale::English, Self::High) => "high",
            (DisplayLocale::English, Self::Medium) => "medium",
            (DisplayLocale::English, Self::Low) => "low",
            (DisplayLocale::Russian, Self::High) => "высокая",
            (DisplayLocale::Russian, Self::Medium) => "средняя",
            (DisplayLocale::Russian, Self::Low) => "низкая",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::High => "indicator--high",
            Self::Medium => "indicator--medium",
            Self::Low => "indicator--low",
        }
    }
}

/// How crowded the district is with competitors, from the entrant's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionTier {
    Favorable,
    Moderate,
    Weak,
}

impl CompetitionTier {
    pub const fn label(self, locale: DisplayLocale) -> &'static str {
        match (locale, self) {
            (DisplayLocale::English, Self::Favorable) => "favorable",
            (DisplayLocale::English, Self::Moderate) => "moderate",
            (DisplayLocale::English, Self::Weak) => "weak",
            (DisplayLocale::Russian, Self::Favorable) => "благоприятная",
            (DisplayLocale::Russian, Self::Moderate) => "умеренная",
            (DisplayLocale::Russian, Self::Weak) => "слабая",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Favorable => "indicator--high",
            Self::Moderate => "indicator--medium",
            Self::Weak => "indicator--low",
        }
    }
}

/// Verdict derived from the attractiveness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Favorable,
    Moderate,
    Unfavorable,
}

impl Recommendation {
    pub const fn label(self, locale: DisplayLocale) -> &'static str {
        match (locale, self) {
            (DisplayLocale::English, Self::Favorable) => "favorable to open",
            (DisplayLocale::English, Self::Moderate) => "moderate potential",
            (DisplayLocale::English, Self::Unfavorable) => "not recommended",
            (DisplayLocale::Russian, Self::Favorable) => "открывать выгодно 🟢",
            (DisplayLocale::Russian, Self::Moderate) => "средний потенциал 🟡",
            (DisplayLocale::Russian, Self::Unfavorable) => "не рекомендуется 🔴",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Favorable => "indicator--high",
            Self::Moderate => "indicator--medium",
            Self::Unfavorable => "indicator--low",
        }
    }

    pub const fn score_class(self) -> &'static str {
        match self {
            Self::Favorable => "score--high",
            Self::Moderate => "score--medium",
            Self::Unfavorable => "score--low",
        }
    }
}

/// Per-term contributions to the attractiveness score, kept for audits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub traffic: f64,
    pub competition: f64,
    pub rent: f64,
    pub spend_gap: f64,
    pub business_bias: f64,
    pub jitter: f64,
    pub raw: f64,
    /// `raw` limited to 0..=100.
    pub clamped: f64,
}

impl ScoreBreakdown {
    pub fn rounded(&self) -> u8 {
        self.clamped.round() as u8
    }
}

/// Synthetic metrics and verdict for one candidate district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRecord {
    pub district: String,
    pub traffic_value: f64,
    pub traffic_level: TrafficTier,
    pub competitor_count: u8,
    pub competition: CompetitionTier,
    pub rent: u32,
    pub area_avg_check: u32,
    pub score: u8,
    pub recommendation: Recommendation,
    pub breakdown: ScoreBreakdown,
}
