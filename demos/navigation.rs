//! Navigation Example - Overflow layout under simulated resizes
//!
//! This example demonstrates basic usage of the engine:
//! - Ingesting a mixed item list (links, actions, always-hidden entries)
//! - Subscribing to the visible/hidden list signals
//! - Driving the layout with resize events
//!
//! Run with: cargo run --example navigation

use responsive_nav::{
    ActivationSource, Destination, InputEvent, ItemFlags, NavAction, NavBar, NavItem, User,
    route_event, set_viewport_size,
};
use spark_signals::effect;

fn main() {
    println!("=== responsive-nav Navigation Example ===\n");

    set_viewport_size(120, 24);

    let nav = NavBar::new();
    nav.set_user(Some(User { full_name: "Jane Doe".to_string() }));
    nav.set_items(vec![
        NavItem::link("Dashboard", Destination::Route(vec!["/dashboard".to_string()])),
        NavItem::link("Reports", Destination::Route(vec!["/reports".to_string()])),
        NavItem::link("Audiences", Destination::Route(vec!["/audiences".to_string()])),
        NavItem::link("Documentation", Destination::Url("http://docs.example.com".to_string())),
        NavItem::action("Log out", NavAction::new("log-out")),
        NavItem::link("Internal tools", Destination::Route(vec!["/internal".to_string()]))
            .with_flags(ItemFlags::ALWAYS_HIDDEN),
    ]);

    if let Some(greeting) = nav.greeting() {
        println!("{greeting}\n");
    }

    // Re-render the row whenever membership changes.
    let lists = nav.lists();
    let _stop = effect(move || {
        let visible: Vec<String> = lists.visible().iter().map(|i| i.name.clone()).collect();
        let hidden: Vec<String> = lists.hidden().iter().map(|i| i.name.clone()).collect();
        println!("visible: {visible:?}");
        println!("hidden:  {hidden:?}\n");
    });

    // React to action items.
    let _cleanup = nav.emitter().on(|payload| {
        println!("action fired: {}", payload.action.action_type);
    });

    println!("--- shrinking to 60 cells ---");
    route_event(&nav, InputEvent::Resize(60, 24));

    println!("--- shrinking to 30 cells ---");
    route_event(&nav, InputEvent::Resize(30, 24));

    println!("--- growing back to 120 cells (one promotion per event) ---");
    route_event(&nav, InputEvent::Resize(120, 24));
    route_event(&nav, InputEvent::Resize(120, 24));
    route_event(&nav, InputEvent::Resize(120, 24));

    println!("--- activating the last visible item ---");
    let visible_len = nav.lists().visible_len();
    if visible_len > 0 {
        nav.activate_at(visible_len - 1, ActivationSource::Programmatic);
    }
}
