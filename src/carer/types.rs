use crate::error::{RatingError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// One carer as loaded from a roster row.
///
/// Numeric cells tolerate surrounding whitespace; text cells are kept verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CarerRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "type")]
    pub carer_type: String,
    #[serde(deserialize_with = "trimmed")]
    pub num_reviews: i64, // Loaded, not scored
    #[serde(deserialize_with = "trimmed")]
    pub avg_review: f64,
    #[serde(deserialize_with = "trimmed")]
    pub img_problems: i64, // 0..=8 expected, never clamped
    #[serde(deserialize_with = "trimmed")]
    pub num_previous_clients: u32,
    #[serde(deserialize_with = "trimmed")]
    pub days_since_login: i64,
    #[serde(deserialize_with = "trimmed")]
    pub age: i64, // Loaded, not scored
    #[serde(deserialize_with = "trimmed")]
    pub years_experience: i64,
}

impl CarerRecord {
    pub fn builder() -> CarerRecordBuilder {
        CarerRecordBuilder::default()
    }

    /// "First Last", used by the console views
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn category(&self) -> CarerType {
        CarerType::classify(&self.carer_type)
    }
}

/// Category bucket derived from the free-text `type` column.
///
/// Matching is exact and case-sensitive; anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarerType {
    Expert,
    Advanced,
    Other,
}

impl CarerType {
    pub fn classify(raw: &str) -> Self {
        match raw {
            "expert" => CarerType::Expert,
            "advanced" => CarerType::Advanced,
            _ => CarerType::Other,
        }
    }
}

impl fmt::Display for CarerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarerType::Expert => write!(f, "expert"),
            CarerType::Advanced => write!(f, "advanced"),
            CarerType::Other => write!(f, "other"),
        }
    }
}

/// Incrementally assembles a [`CarerRecord`]; `build` refuses to guess
/// values for fields that were never set.
#[derive(Debug, Default, Clone)]
pub struct CarerRecordBuilder {
    id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    carer_type: Option<String>,
    num_reviews: Option<i64>,
    avg_review: Option<f64>,
    img_problems: Option<i64>,
    num_previous_clients: Option<u32>,
    days_since_login: Option<i64>,
    age: Option<i64>,
    years_experience: Option<i64>,
}

impl CarerRecordBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    pub fn last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    pub fn carer_type(mut self, carer_type: impl Into<String>) -> Self {
        self.carer_type = Some(carer_type.into());
        self
    }

    pub fn num_reviews(mut self, n: i64) -> Self {
        self.num_reviews = Some(n);
        self
    }

    pub fn avg_review(mut self, avg: f64) -> Self {
        self.avg_review = Some(avg);
        self
    }

    pub fn img_problems(mut self, n: i64) -> Self {
        self.img_problems = Some(n);
        self
    }

    pub fn num_previous_clients(mut self, n: u32) -> Self {
        self.num_previous_clients = Some(n);
        self
    }

    pub fn days_since_login(mut self, days: i64) -> Self {
        self.days_since_login = Some(days);
        self
    }

    pub fn age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn years_experience(mut self, years: i64) -> Self {
        self.years_experience = Some(years);
        self
    }

    pub fn build(self) -> Result<CarerRecord> {
        Ok(CarerRecord {
            id: self.id.ok_or(RatingError::MissingField("id"))?,
            first_name: self.first_name.ok_or(RatingError::MissingField("first_name"))?,
            last_name: self.last_name.ok_or(RatingError::MissingField("last_name"))?,
            carer_type: self.carer_type.ok_or(RatingError::MissingField("type"))?,
            num_reviews: self.num_reviews.ok_or(RatingError::MissingField("num_reviews"))?,
            avg_review: self.avg_review.ok_or(RatingError::MissingField("avg_review"))?,
            img_problems: self.img_problems.ok_or(RatingError::MissingField("img_problems"))?,
            num_previous_clients: self
                .num_previous_clients
                .ok_or(RatingError::MissingField("num_previous_clients"))?,
            days_since_login: self
                .days_since_login
                .ok_or(RatingError::MissingField("days_since_login"))?,
            age: self.age.ok_or(RatingError::MissingField("age"))?,
            years_experience: self
                .years_experience
                .ok_or(RatingError::MissingField("years_experience"))?,
        })
    }
}

fn trimmed<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}
