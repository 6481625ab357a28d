// File: ./src/model/milonga.rs
use super::{lenient_price, lenient_text, optional_text};
use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entry fee as written in the feed: either a JSON number or free text ("10", "Spende").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(serde_json::Number),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(n) => write!(f, "{}", n),
            Price::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A milonga exactly as it appears in `milongas.json`.
///
/// Nothing is validated here: every text field falls back to "" so that one
/// sloppy record renders with gaps instead of taking the whole feed down.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawMilonga {
    #[serde(deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub start_time: String,
    #[serde(deserialize_with = "lenient_text")]
    pub end_time: String,
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub venue: String,
    #[serde(deserialize_with = "lenient_text")]
    pub street: String,
    #[serde(deserialize_with = "lenient_text")]
    pub house_number: String,
    #[serde(deserialize_with = "lenient_text")]
    pub postal_code: String,
    #[serde(deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(deserialize_with = "lenient_text")]
    pub dj: String,
    #[serde(deserialize_with = "lenient_text")]
    pub style: String,
    #[serde(deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub organizer: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub organizer_url: Option<String>,
    #[serde(deserialize_with = "lenient_price")]
    pub price: Option<Price>,
    #[serde(deserialize_with = "optional_text")]
    pub currency: Option<String>,
}

/// A milonga whose date has been parsed. Only these reach the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct Milonga {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    pub venue: String,
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
    pub dj: String,
    pub style: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub organizer: Option<String>,
    pub organizer_url: Option<String>,
    pub price: Option<Price>,
    pub currency: Option<String>,
}

/// Parses `YYYY-MM-DD`; a full RFC 3339 timestamp is accepted and truncated to its date.
pub fn parse_feed_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

impl Milonga {
    /// Returns `None` when the date cannot be parsed.
    pub fn from_raw(raw: RawMilonga) -> Option<Self> {
        let date = parse_feed_date(&raw.date)?;
        Some(Self {
            date,
            start_time: raw.start_time,
            end_time: raw.end_time,
            title: raw.title,
            venue: raw.venue,
            street: raw.street,
            house_number: raw.house_number,
            postal_code: raw.postal_code,
            city: raw.city,
            dj: raw.dj,
            style: raw.style,
            description: raw.description,
            url: raw.url,
            organizer: raw.organizer,
            organizer_url: raw.organizer_url,
            price: raw.price,
            currency: raw.currency,
        })
    }

    /// (year, month) used to decide where month dividers go.
    pub fn month_key(&self) -> (i32, u32) {
        (self.date.year(), self.date.month())
    }

    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
