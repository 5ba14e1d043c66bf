//! End-to-end overflow scenarios: item ingestion, resize sequences, and the
//! reactive output contract, all with injected widths.

use std::cell::Cell;
use std::rc::Rc;

use responsive_nav::{
    ActivationSource, Destination, FixedWidths, InputEvent, ItemFlags, NavAction, NavBar, NavItem,
    NavItemKind, route_event, set_viewport_size,
};
use spark_signals::effect;

fn link(name: &str) -> NavItem {
    NavItem::link(name, Destination::Route(vec![format!("/{name}")]))
}

fn visible_names(nav: &NavBar) -> Vec<String> {
    nav.lists().visible().iter().map(|i| i.name.clone()).collect()
}

fn hidden_names(nav: &NavBar) -> Vec<String> {
    nav.lists().hidden().iter().map(|i| i.name.clone()).collect()
}

/// Five links at 20 cells each plus one always-hidden entry.
fn sample_nav() -> NavBar {
    let nav = NavBar::with_oracle(FixedWidths::new(&[
        ("home", 20),
        ("reports", 20),
        ("audiences", 20),
        ("settings", 20),
        ("admin", 20),
    ]));
    nav.set_items(vec![
        link("home"),
        link("reports"),
        link("audiences"),
        link("settings"),
        link("admin"),
        link("internal").with_flags(ItemFlags::ALWAYS_HIDDEN),
    ]);
    nav
}

#[test]
fn shrinking_viewport_demotes_from_the_end() {
    set_viewport_size(200, 24);
    let nav = sample_nav();
    assert_eq!(visible_names(&nav).len(), 5);

    // available = 75 - 10 = 65: room for three 20-cell items.
    route_event(&nav, InputEvent::Resize(75, 24));
    assert_eq!(visible_names(&nav), vec!["home", "reports", "audiences"]);
    assert_eq!(hidden_names(&nav), vec!["settings", "admin", "internal"]);
}

#[test]
fn growing_viewport_promotes_one_item_per_event() {
    set_viewport_size(200, 24);
    let nav = sample_nav();

    route_event(&nav, InputEvent::Resize(55, 24));
    assert_eq!(visible_names(&nav), vec!["home", "reports"]);

    route_event(&nav, InputEvent::Resize(200, 24));
    assert_eq!(visible_names(&nav), vec!["home", "reports", "audiences"]);

    route_event(&nav, InputEvent::Resize(200, 24));
    assert_eq!(visible_names(&nav), vec!["home", "reports", "audiences", "settings"]);

    route_event(&nav, InputEvent::Resize(200, 24));
    assert_eq!(visible_names(&nav), vec!["home", "reports", "audiences", "settings", "admin"]);

    // Everything measured is visible again; the always-hidden entry stays put.
    route_event(&nav, InputEvent::Resize(200, 24));
    assert_eq!(hidden_names(&nav), vec!["internal"]);
}

#[test]
fn always_hidden_survives_arbitrary_resize_sequences() {
    set_viewport_size(200, 24);
    let nav = sample_nav();

    for width in [200, 31, 500, 11, 80, 45, 300, 300, 300, 300, 300] {
        route_event(&nav, InputEvent::Resize(width, 24));
        assert!(!visible_names(&nav).contains(&"internal".to_string()));

        // Conservation: every enabled item is in exactly one list.
        assert_eq!(visible_names(&nav).len() + hidden_names(&nav).len(), 6);
    }
}

#[test]
fn replacing_items_recomputes_from_scratch() {
    set_viewport_size(200, 24);
    let nav = sample_nav();
    route_event(&nav, InputEvent::Resize(55, 24));
    assert_eq!(visible_names(&nav).len(), 2);

    // New, narrower working set fits entirely.
    nav.set_items(vec![link("home"), link("reports")]);
    assert_eq!(visible_names(&nav), vec!["home", "reports"]);
    assert!(hidden_names(&nav).is_empty());
}

#[test]
fn list_signals_notify_subscribers_on_membership_change() {
    set_viewport_size(200, 24);
    let nav = sample_nav();

    let runs = Rc::new(Cell::new(0));
    let runs_clone = runs.clone();
    let lists = nav.lists();
    let _stop = effect(move || {
        let _ = lists.visible();
        runs_clone.set(runs_clone.get() + 1);
    });
    assert_eq!(runs.get(), 1);

    route_event(&nav, InputEvent::Resize(55, 24));
    assert_eq!(runs.get(), 2);

    // Idle resize: membership unchanged, no notification.
    route_event(&nav, InputEvent::Resize(55, 24));
    assert_eq!(runs.get(), 2);
}

#[test]
fn action_flow_from_ingestion_to_payload() {
    set_viewport_size(200, 24);
    let nav = NavBar::with_oracle(FixedWidths::new(&[("home", 20), ("Log out", 20)]));
    nav.set_items(vec![
        link("home"),
        NavItem::action("Log out", NavAction::new("log-out")),
    ]);

    let count = Rc::new(Cell::new(0));
    let count_clone = count.clone();
    let _cleanup = nav.emitter().on(move |payload| {
        assert_eq!(payload.action.action_type, "log-out");
        count_clone.set(count_clone.get() + 1);
    });

    nav.activate_at(1, ActivationSource::Programmatic);
    assert_eq!(count.get(), 1);
}

#[test]
fn external_links_annotated_at_ingestion() {
    set_viewport_size(200, 24);
    let nav = NavBar::with_oracle(FixedWidths::new(&[("docs", 20), ("home", 20)]));
    nav.set_items(vec![
        NavItem::link("docs", Destination::Url("http://example.com".to_string())),
        NavItem::link("home", Destination::Route(vec!["/local".to_string(), "path".to_string()])),
    ]);

    let visible = nav.lists().visible();
    match &visible[0].kind {
        NavItemKind::Link { is_external, .. } => assert!(*is_external),
        NavItemKind::Action { .. } => panic!("expected link"),
    }
    match &visible[1].kind {
        NavItemKind::Link { is_external, .. } => assert!(!*is_external),
        NavItemKind::Action { .. } => panic!("expected link"),
    }
}
