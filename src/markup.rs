// File: ./src/markup.rs
//! HTML fragments and the (German) strings that go into them.
//!
//! Every function here is pure: it takes records and returns [`Fragment`]s or
//! strings. Interpolated feed text is always escaped.
use crate::model::{Milonga, Teacher};
use crate::surface::Fragment;
use chrono::Datelike;
use std::borrow::Cow;
use std::fmt::Write;

pub const DAY_NAMES: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];
pub const DAY_NAMES_FULL: [&str; 7] = [
    "Sonntag",
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
];
pub const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

pub const MONTH_DIVIDER_CLASS: &str = "month-divider";
pub const MILONGA_CLASS: &str = "milonga-entry";
pub const TEACHER_CLASS: &str = "teacher";
pub const ERROR_CLASS: &str = "error-message";

const NBSP: char = '\u{00A0}';
const RETRY_HINT: &str = "Bitte versuche es später erneut oder kontaktiere mich.";

/// Escape HTML special characters.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
pub fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// "Oktober 2026"
pub fn month_label(date: chrono::NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year())
}

pub fn month_divider(date: chrono::NaiveDate) -> Fragment {
    Fragment::new(
        MONTH_DIVIDER_CLASS,
        format!(
            r#"<h3 class="{}">{}</h3>"#,
            MONTH_DIVIDER_CLASS,
            month_label(date)
        ),
    )
}

/// "20:00 bis 23:30 Uhr"
pub fn time_range(m: &Milonga) -> String {
    format!("{} bis {} Uhr", m.start_time, m.end_time)
}

pub fn milonga_card(m: &Milonga) -> Fragment {
    let weekday_idx = m.date.weekday().num_days_from_sunday() as usize;
    let weekday = DAY_NAMES[weekday_idx];
    let weekday_full = DAY_NAMES_FULL[weekday_idx];
    let month = MONTH_NAMES[m.date.month0() as usize];
    let day = m.date.day();
    let year = m.date.year();

    let time = html_escape(&time_range(m)).into_owned();
    let title = html_escape(&m.title);
    let venue = format!("{}, ", html_escape(&m.venue));
    let street = format!(
        "{}{}{}, ",
        html_escape(&m.street),
        NBSP,
        html_escape(&m.house_number)
    );
    let city = format!(
        "{}{}{}",
        html_escape(&m.postal_code),
        NBSP,
        html_escape(&m.city)
    );
    let dj = html_escape(&m.dj);
    let style = html_escape(&m.style);

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<li class="{cls}">
    <article class="milonga" tabindex="0" aria-label="{weekday_full}, {day} {month} {year}: {title}. Von {time}. Musik von {dj}. Der Stil der Musik ist: {style}. Veranstaltungsort: {venue} {street} {city}">
        <time class="milonga-date" style="grid-area: day" datetime="{iso}">
            <div class="weekday" aria-label="{weekday_full}">{weekday}</div>
            <div class="date">{day}</div>
        </time>
        <time class="milonga-time" style="grid-area: time">{time}</time>
        <h4 class="milonga-title" style="grid-area: title">{title}</h4>
        <address class="milonga-location" style="grid-area: location">
            <span class="venue">{venue}</span>
            <span class="street">{street}</span>
            <span class="city">{city}</span>
        </address>
        <div class="milonga-dj" style="grid-area: dj" aria-label="DJ: {dj}">
            <div class="dj-name">{dj}</div>
            <div class="dj-style" style="grid-area: style">{style}</div>
        </div>"#,
        cls = MILONGA_CLASS,
        iso = m.iso_date(),
    );
    if let Some(desc) = &m.description {
        let _ = write!(
            html,
            r#"
        <aside class="milonga-description" role="note" style="grid-area: desc"><span class="anmerkung">Anmerkung</span>: {}</aside>"#,
            html_escape(desc)
        );
    }
    html.push_str(
        r#"
    </article>
</li>"#,
    );

    Fragment::new(MILONGA_CLASS, html)
}

pub fn teacher_card(t: &Teacher) -> Fragment {
    Fragment::new(
        TEACHER_CLASS,
        format!(
            r#"<li class="{cls}">
    <div class="teacher-info">
        <h2 class="teacher-name">
            <a href="{link}" target="_blank" rel="noopener noreferrer">{name}<span class="sr-only"> (öffnet in neuem Tab)</span></a>
        </h2>
        <p class="teacher-location">{location}</p>
    </div>
</li>"#,
            cls = TEACHER_CLASS,
            link = html_escape(&t.link),
            name = html_escape(&t.name),
            location = html_escape(&t.location),
        ),
    )
}

fn error_block(headline: &str) -> Fragment {
    Fragment::new(
        ERROR_CLASS,
        format!(
            r#"<div role="alert" class="{}">
    <p>
        <strong>{}</strong><br>
        {}
    </p>
</div>"#,
            ERROR_CLASS, headline, RETRY_HINT
        ),
    )
}

pub fn calendar_error() -> Fragment {
    error_block("Fehler beim Laden der Milongas.")
}

pub fn teacher_error() -> Fragment {
    error_block("Fehler beim Laden der Lehrer:innen.")
}

/// Text for the screen-reader status region.
pub fn loaded_announcement(count: usize) -> String {
    format!("{} weitere Milongas geladen", count)
}
