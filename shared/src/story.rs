use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::board::StoryDraft;
use crate::geo::{format_coordinate, LatLng};

/// Number of glyphs in a rating row
pub const STAR_COUNT: usize = 5;

/// A single date-spot report, as stored in the record store.
///
/// Every field travels as a string because the record store is a
/// spreadsheet; numeric fields are parsed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DateStory {
    /// Epoch milliseconds at creation, as a decimal string
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// Expected to hold an integer 1-5; anything else renders as zero stars
    #[serde(default, deserialize_with = "lenient_string")]
    pub rating: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub type_of_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub story: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub latitude: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub longitude: String,
    /// ISO-8601 creation time from the submitting client's clock
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
    /// Marker icon override; empty means the default pin
    #[serde(default, deserialize_with = "lenient_string")]
    pub icon_url: String,
}

impl DateStory {
    /// Build a fresh record from a validated draft
    pub fn from_draft(draft: &StoryDraft, position: LatLng, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            rating: draft.rating.clone(),
            type_of_date: draft.type_of_date.clone(),
            location: draft.location.clone(),
            story: draft.story.clone(),
            latitude: format_coordinate(position.lat),
            longitude: format_coordinate(position.lng),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            icon_url: String::new(),
        }
    }

    pub fn rating_value(&self) -> Option<i64> {
        parse_leading_int(&self.rating)
    }

    /// Marker position, or `None` when either coordinate is not a finite number
    pub fn coordinates(&self) -> Option<LatLng> {
        let lat = parse_finite(&self.latitude)?;
        let lng = parse_finite(&self.longitude)?;
        Some(LatLng::new(lat, lng))
    }

    pub fn marker_icon<'a>(&'a self, default_icon: &'a str) -> &'a str {
        if self.icon_url.is_empty() {
            default_icon
        } else {
            &self.icon_url
        }
    }

    pub fn stars(&self) -> [bool; STAR_COUNT] {
        star_row(self.rating_value())
    }
}

/// Glyph `i` is filled iff `i < rating`
pub fn star_row(rating: Option<i64>) -> [bool; STAR_COUNT] {
    let mut row = [false; STAR_COUNT];
    if let Some(rating) = rating {
        for (i, filled) in row.iter_mut().enumerate() {
            *filled = (i as i64) < rating;
        }
    }
    row
}

/// Integer prefix of `input`: leading whitespace, an optional sign, then digits.
/// "4", " 4 stars" and "4.5" all give 4; "four" and "" give `None`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Digit runs too long for i64 saturate instead of reading as no rating
    let value = match rest[..digits_end].parse::<i64>() {
        Ok(value) => value,
        Err(_) if negative => return Some(i64::MIN),
        Err(_) => return Some(i64::MAX),
    };
    Some(if negative { -value } else { value })
}

fn parse_finite(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Accepts strings, numbers, booleans and null, normalising to a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}
