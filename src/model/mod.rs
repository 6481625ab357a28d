// File: ./src/model/mod.rs
pub mod milonga;
pub mod teacher;

pub use milonga::{Milonga, Price, RawMilonga};
pub use teacher::Teacher;

use serde::{Deserialize, Deserializer};

/// Accepts a JSON string, number or bool as text; `null` and missing become "".
/// Feed authors write postal codes and house numbers either way.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Optional text that treats blank strings like a missing field.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = lenient_text(deserializer)?;
    Ok(if text.trim().is_empty() {
        None
    } else {
        Some(text)
    })
}

/// A number or a string becomes a price; any other JSON value counts as no price.
pub(crate) fn lenient_price<'de, D>(deserializer: D) -> Result<Option<Price>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => Some(Price::Amount(n)),
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(Price::Text(s)),
        _ => None,
    })
}
