// File: src/controller.rs
//! Incremental disclosure of the milonga calendar.
//!
//! The controller owns the normalized milongas and the calendar surface, and
//! tracks how far rendering has progressed. "Show more" and "show less" both
//! go through here so that the cursor, the month tracker and the rendered
//! nodes never disagree.
use crate::markup::{self, MONTH_DIVIDER_CLASS};
use crate::model::Milonga;
use crate::status::StatusRegion;
use crate::surface::ListSurface;
use std::time::Duration;

pub struct DisclosureController<S: ListSurface> {
    milongas: Vec<Milonga>,
    surface: S,
    /// Index of the last rendered milonga; `None` while nothing is shown.
    cursor: Option<usize>,
    /// (year, month) of the last rendered milonga.
    current_month: Option<(i32, u32)>,
    default_visible: usize,
    status: StatusRegion,
    clear_after: Duration,
}

impl<S: ListSurface> DisclosureController<S> {
    /// `surface` must not hold any milonga nodes yet (an error block is fine).
    pub fn new(
        milongas: Vec<Milonga>,
        surface: S,
        default_visible: usize,
        status: StatusRegion,
        clear_after: Duration,
    ) -> Self {
        Self {
            milongas,
            surface,
            cursor: None,
            current_month: None,
            default_visible,
            status,
            clear_after,
        }
    }

    pub fn milongas(&self) -> &[Milonga] {
        &self.milongas
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn status(&self) -> &StatusRegion {
        &self.status
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current_month(&self) -> Option<(i32, u32)> {
        self.current_month
    }

    pub fn default_visible(&self) -> usize {
        self.default_visible
    }

    /// Number of milongas currently on the surface.
    pub fn rendered_count(&self) -> usize {
        self.cursor.map_or(0, |c| c + 1)
    }

    pub fn remaining(&self) -> usize {
        self.milongas.len() - self.rendered_count()
    }

    /// Render up to `k` further milongas, inserting a month divider in front of
    /// each one that opens a new month. Everything is appended as one batch.
    ///
    /// Returns how many milongas were added; that count (dividers excluded) is
    /// also announced on the status region, including when it is 0.
    pub fn reveal_next(&mut self, k: usize) -> usize {
        let k = k.min(self.remaining());
        let start = self.rendered_count();
        let mut batch = Vec::with_capacity(k * 2);

        for (idx, milonga) in self.milongas.iter().enumerate().skip(start).take(k) {
            let month = milonga.month_key();
            if self.current_month != Some(month) {
                batch.push(markup::month_divider(milonga.date));
                self.current_month = Some(month);
            }
            batch.push(markup::milonga_card(milonga));
            self.cursor = Some(idx);
        }

        if !batch.is_empty() {
            self.surface.append(batch);
        }
        log::debug!(
            "Revealed {} milongas, {} rendered, {} remaining",
            k,
            self.rendered_count(),
            self.remaining()
        );

        self.status
            .announce(markup::loaded_announcement(k), self.clear_after);
        k
    }

    /// Remove milongas from the end until only the default number is left.
    ///
    /// A month divider is removed as soon as no milonga follows it, so the
    /// surface never ends on a divider.
    pub fn collapse(&mut self) {
        let mut removed = 0;
        while self.rendered_count() > self.default_visible {
            self.drop_trailing_divider();
            self.surface.remove_last();
            self.cursor = self.cursor.and_then(|c| c.checked_sub(1));
            self.drop_trailing_divider();
            removed += 1;
        }

        self.current_month = self.cursor.map(|c| self.milongas[c].month_key());
        log::debug!(
            "Collapsed {} milongas, {} rendered",
            removed,
            self.rendered_count()
        );
    }

    fn drop_trailing_divider(&mut self) {
        if self.surface.peek_last_class() == Some(MONTH_DIVIDER_CLASS) {
            self.surface.remove_last();
        }
    }
}
