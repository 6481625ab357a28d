// File: ./src/calendar.rs
//! Loading the milonga feed.
use crate::client::{FeedClient, LoadError};
use crate::markup;
use crate::model::{Milonga, RawMilonga};
use crate::surface::ListSurface;
use chrono::NaiveDate;

/// Parse dates, sort ascending by date and keep everything from `today` on.
///
/// The sort is stable, so milongas on the same day keep their feed order.
/// Records with an unreadable date are dropped.
pub fn normalize(raw: Vec<RawMilonga>, today: NaiveDate) -> Vec<Milonga> {
    let mut milongas: Vec<Milonga> = raw
        .into_iter()
        .filter_map(|r| {
            let title = r.title.clone();
            let date = r.date.clone();
            let parsed = Milonga::from_raw(r);
            if parsed.is_none() {
                log::warn!("Skipping milonga '{}' with unreadable date '{}'", title, date);
            }
            parsed
        })
        .collect();

    milongas.sort_by_key(|m| m.date);
    milongas.retain(|m| m.date >= today);
    milongas
}

pub struct MilongaCalendar;

impl MilongaCalendar {
    /// Fetch and normalize the feed.
    pub async fn fetch(
        client: &FeedClient,
        path: &str,
        today: NaiveDate,
    ) -> Result<Vec<Milonga>, LoadError> {
        let raw: Vec<RawMilonga> = client.get_json(path).await?;
        let total = raw.len();
        let milongas = normalize(raw, today);
        log::info!(
            "Loaded {} upcoming milongas ({} in feed)",
            milongas.len(),
            total
        );
        Ok(milongas)
    }

    /// Like `fetch`, but never fails: on error the surface shows the calendar
    /// error block and the calendar is empty.
    pub async fn load(
        client: &FeedClient,
        path: &str,
        today: NaiveDate,
        surface: &mut impl ListSurface,
    ) -> Vec<Milonga> {
        match Self::fetch(client, path, today).await {
            Ok(milongas) => milongas,
            Err(e) => {
                log::error!("{}", e);
                surface.replace_content(markup::calendar_error());
                Vec::new()
            }
        }
    }
}
