// Tests for "show more" / "show less" on the milonga calendar.
use std::time::Duration;
use tangoboard::controller::DisclosureController;
use tangoboard::markup::{MILONGA_CLASS, MONTH_DIVIDER_CLASS};
use tangoboard::model::{Milonga, RawMilonga};
use tangoboard::status::StatusRegion;
use tangoboard::surface::{HtmlList, ListSurface};

fn milonga(date: &str, title: &str) -> Milonga {
    Milonga::from_raw(RawMilonga {
        date: date.to_string(),
        title: title.to_string(),
        start_time: "20:00".to_string(),
        end_time: "23:00".to_string(),
        ..Default::default()
    })
    .unwrap()
}

/// March: 3 milongas, April: 2 milongas, May: 2 milongas.
fn three_months() -> Vec<Milonga> {
    vec![
        milonga("2026-03-06", "m1"),
        milonga("2026-03-13", "m2"),
        milonga("2026-03-20", "m3"),
        milonga("2026-04-03", "a1"),
        milonga("2026-04-17", "a2"),
        milonga("2026-05-01", "y1"),
        milonga("2026-05-08", "y2"),
    ]
}

fn controller(milongas: Vec<Milonga>, d: usize) -> DisclosureController<HtmlList> {
    DisclosureController::new(
        milongas,
        HtmlList::new(),
        d,
        StatusRegion::new(),
        Duration::from_secs(5),
    )
}

fn classes(list: &HtmlList) -> Vec<&'static str> {
    list.nodes().iter().map(|n| n.class).collect()
}

#[test]
fn test_month_dividers_precede_each_group() {
    let mut c = controller(three_months()[..5].to_vec(), 2);
    assert_eq!(c.reveal_next(5), 5);

    assert_eq!(
        classes(c.surface()),
        vec![
            MONTH_DIVIDER_CLASS,
            MILONGA_CLASS,
            MILONGA_CLASS,
            MILONGA_CLASS,
            MONTH_DIVIDER_CLASS,
            MILONGA_CLASS,
            MILONGA_CLASS,
        ]
    );
    let nodes = c.surface().nodes();
    assert!(nodes[0].html.contains("März 2026"));
    assert!(nodes[4].html.contains("April 2026"));
}

#[test]
fn test_reveal_clamps_to_remaining() {
    let mut c = controller(three_months(), 2);
    assert_eq!(c.reveal_next(5), 5);
    assert_eq!(c.cursor(), Some(4));

    // Only 2 left; asking for 5 must not panic.
    assert_eq!(c.reveal_next(5), 2);
    assert_eq!(c.cursor(), Some(6));
    assert_eq!(c.surface().count_class(MILONGA_CLASS), 7);

    assert_eq!(c.reveal_next(3), 0);
    assert_eq!(c.cursor(), Some(6));
}

#[test]
fn test_cursor_formula() {
    let len = three_months().len();
    for k in 0..=9 {
        let mut c = controller(three_months(), 2);
        c.reveal_next(2);
        let prev = c.cursor().unwrap();
        let added = c.reveal_next(k);
        assert!(added <= k);
        assert_eq!(c.cursor().unwrap(), (prev + k).min(len - 1), "k = {}", k);
    }
}

#[test]
fn test_reveal_zero_is_noop_and_announces_zero() {
    let mut c = controller(three_months(), 2);
    assert_eq!(c.reveal_next(0), 0);
    assert_eq!(c.cursor(), None);
    assert!(c.surface().is_empty());
    assert_eq!(c.status().text(), "0 weitere Milongas geladen");
}

#[test]
fn test_reveal_announces_milongas_not_dividers() {
    let mut c = controller(three_months(), 2);
    c.reveal_next(4);
    assert_eq!(c.status().text(), "4 weitere Milongas geladen");
}

#[test]
fn test_reveal_on_empty_calendar() {
    let mut c = controller(Vec::new(), 5);
    assert_eq!(c.reveal_next(5), 0);
    c.collapse();
    assert_eq!(c.cursor(), None);
    assert!(c.surface().is_empty());
}

#[test]
fn test_collapse_leaves_default_count_without_trailing_divider() {
    for d in 1..=7 {
        let mut c = controller(three_months(), d);
        c.reveal_next(7);
        c.collapse();

        assert_eq!(c.surface().count_class(MILONGA_CLASS), d, "d = {}", d);
        assert_eq!(c.rendered_count(), d);
        assert_ne!(c.surface().peek_last_class(), Some(MONTH_DIVIDER_CLASS));
    }
}

#[test]
fn test_collapse_at_month_boundary_removes_divider() {
    // D = 3 stops exactly at the end of March; the April divider must go.
    let mut c = controller(three_months(), 3);
    c.reveal_next(5);
    c.collapse();

    assert_eq!(
        classes(c.surface()),
        vec![
            MONTH_DIVIDER_CLASS,
            MILONGA_CLASS,
            MILONGA_CLASS,
            MILONGA_CLASS
        ]
    );
    assert_eq!(c.current_month(), Some((2026, 3)));
}

#[test]
fn test_collapse_with_fewer_than_default_is_noop() {
    let mut c = controller(three_months()[..2].to_vec(), 5);
    c.reveal_next(5);
    let before = c.surface().clone();
    c.collapse();
    assert_eq!(c.surface(), &before);
    assert_eq!(c.cursor(), Some(1));
}

#[test]
fn test_reveal_collapse_reveal_round_trip() {
    for d in 1..=7 {
        let mut single = controller(three_months(), d);
        single.reveal_next(d);

        let mut cycled = controller(three_months(), d);
        cycled.reveal_next(d);
        cycled.reveal_next(d);
        cycled.collapse();
        cycled.reveal_next(d);
        cycled.collapse();

        assert_eq!(cycled.surface(), single.surface(), "d = {}", d);
        assert_eq!(cycled.cursor(), single.cursor());
        assert_eq!(cycled.current_month(), single.current_month());
    }
}

#[test]
fn test_reveal_after_collapse_reemits_divider() {
    let mut c = controller(three_months(), 3);
    c.reveal_next(3);
    c.reveal_next(2);
    c.collapse();
    c.reveal_next(2);

    let dividers: Vec<_> = c
        .surface()
        .nodes()
        .iter()
        .filter(|n| n.class == MONTH_DIVIDER_CLASS)
        .map(|n| n.html.clone())
        .collect();
    assert_eq!(dividers.len(), 2);
    assert!(dividers[1].contains("April 2026"));
}

#[test]
fn test_same_month_different_year_gets_divider() {
    let mut c = controller(
        vec![milonga("2026-12-04", "a"), milonga("2027-12-03", "b")],
        2,
    );
    c.reveal_next(2);
    assert_eq!(c.surface().count_class(MONTH_DIVIDER_CLASS), 2);
}
