//! Tests for the event registry: static and name-based dispatch.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use typed_events::prelude::*;
use typed_events::{DynRegistry, Error};

type Basic = events![key!("foo"), key!("bar"), key!("baz")];

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (count, move || c.set(c.get() + 1))
}

fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> impl FnMut() + 'static {
    let log = log.clone();
    move || log.borrow_mut().push(tag)
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_trigger_reaches_only_its_event() {
    let mut events = Registry::<Basic>::new();
    let (a, fa) = counter();
    let (b, fb) = counter();
    let (c, fc) = counter();

    events.on::<key!("foo"), _>(fa);
    events.on_dyn("foo", fb).unwrap();
    events.on::<key!("bar"), _>(fc);

    assert_eq!(events.trigger::<key!("foo"), _>(), 2);
    assert_eq!((a.get(), b.get(), c.get()), (1, 1, 0));

    // No listeners: nothing happens.
    assert_eq!(events.trigger::<key!("baz"), _>(), 0);
    assert_eq!(events.trigger_dyn("baz"), Ok(0));
    assert_eq!((a.get(), b.get(), c.get()), (1, 1, 0));

    assert_eq!(
        events.trigger_dyn("qux"),
        Err(Error::UnknownEvent { name: "qux".into() })
    );
    assert_eq!((a.get(), b.get(), c.get()), (1, 1, 0));
}

#[test]
fn test_registration_order() {
    let mut events = Registry::<Basic>::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    events.on::<key!("bar"), _>(recorder(&log, "first"));
    events.on_dyn("bar", recorder(&log, "second")).unwrap();
    events.on::<key!("bar"), _>(recorder(&log, "third"));

    events.trigger_dyn("bar").unwrap();
    assert_eq!(*log.borrow(), ["first", "second", "third"]);

    events.trigger::<key!("bar"), _>();
    assert_eq!(log.borrow().len(), 6);
    assert_eq!(log.borrow()[3..], ["first", "second", "third"]);
}

#[test]
fn test_duplicates_are_kept() {
    let mut events = Registry::<Basic>::new();
    let count = Rc::new(Cell::new(0));
    for _ in 0..3 {
        let c = count.clone();
        events.on::<key!("foo"), _>(move || c.set(c.get() + 1));
    }
    assert_eq!(events.listeners::<key!("foo"), _>(), 3);
    assert_eq!(events.trigger::<key!("foo"), _>(), 3);
    assert_eq!(count.get(), 3);
}

#[test]
fn test_static_and_dynamic_share_storage() {
    let mut events = Registry::<Basic>::new();
    let (dynamic, f) = counter();
    let (fixed, g) = counter();

    // Registered by name, triggered statically.
    events.on_dyn("baz", f).unwrap();
    events.trigger::<key!("baz"), _>();
    assert_eq!(dynamic.get(), 1);

    // Registered statically, triggered by name.
    events.on::<key!("bar"), _>(g);
    assert_eq!(events.trigger_dyn("bar"), Ok(1));
    assert_eq!(fixed.get(), 1);

    assert_eq!(events.listeners::<key!("baz"), _>(), 1);
    assert_eq!(events.listeners_dyn("bar"), Ok(1));
}

#[test]
fn test_repeated_triggers() {
    let mut events = Registry::<Basic>::new();
    let (count, f) = counter();
    events.on::<key!("foo"), _>(f);
    for _ in 0..5 {
        events.trigger::<key!("foo"), _>();
    }
    assert_eq!(count.get(), 5);
}

#[test]
fn test_callback_state_persists() {
    let mut events = Registry::<Basic>::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    let mut n = 0;
    events.on::<key!("foo"), _>(move || {
        n += 1;
        s.borrow_mut().push(n);
    });
    events.trigger::<key!("foo"), _>();
    events.trigger_dyn("foo").unwrap();
    assert_eq!(*seen.borrow(), [1, 2]);
}

// =============================================================================
// Unknown events
// =============================================================================

#[test]
fn test_unknown_event_on_dyn() {
    let mut events = Registry::<Basic>::new();
    let (count, f) = counter();

    let err = events.on_dyn("qux", f).unwrap_err();
    assert_eq!(err, Error::UnknownEvent { name: "qux".into() });
    assert_eq!(err.to_string(), r#"unknown event: "qux""#);

    assert_eq!(events.listeners_dyn("qux"), Err(Error::UnknownEvent { name: "qux".into() }));
    for name in ["foo", "bar", "baz"] {
        assert_eq!(events.listeners_dyn(name), Ok(0));
    }
    assert_eq!(count.get(), 0);
}

#[test]
fn test_unknown_event_is_the_same_error_everywhere() {
    let mut events = Registry::<Basic>::new();
    let err = Error::UnknownEvent { name: "qux".into() };
    assert_eq!(events.on_dyn("qux", || {}), Err(err.clone()));
    assert_eq!(events.trigger_dyn("qux"), Err(err.clone()));
    assert_eq!(events.listeners_dyn("qux"), Err(err));
}

#[test]
fn test_names_are_case_sensitive() {
    let mut events = Registry::<Basic>::new();
    assert!(events.contains_event("foo"));
    assert!(!events.contains_event("Foo"));
    assert!(!events.contains_event(""));
    assert!(events.trigger_dyn("FOO").is_err());
}

// =============================================================================
// Introspection
// =============================================================================

#[derive(Key)]
struct WindowResized;

#[derive(Key)]
#[key(name = "app.quit")]
struct Quit;

#[test]
fn test_derived_event_keys() {
    let mut events = Registry::<events![WindowResized, Quit, key!("tick")]>::new();
    let (count, f) = counter();
    events.on_dyn("window_resized", f).unwrap();
    events.trigger::<WindowResized, _>();
    assert_eq!(count.get(), 1);

    assert!(events.contains_event("app.quit"));
    assert!(!events.contains_event("quit"));
    assert_eq!(events.events().collect::<Vec<_>>(), ["window_resized", "app.quit", "tick"]);
}

#[test]
fn test_derived_and_literal_events_are_one_event() {
    let mut events = Registry::<events![WindowResized, Quit]>::new();
    let (count, f) = counter();
    events.on::<key!("window_resized"), _>(f);
    assert_eq!(events.trigger::<WindowResized, _>(), 1);
    assert_eq!(events.listeners::<key!("app.quit"), _>(), 0);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_events_and_len() {
    let events = Registry::<Basic>::default();
    assert_eq!(events.len(), 3);
    assert!(!events.is_empty());
    assert_eq!(events.events().collect::<Vec<_>>(), ["foo", "bar", "baz"]);
    assert_eq!(events.name_index().strategy(), "scan");
}

#[test]
fn test_empty_registry() {
    let mut events = Registry::<events![]>::new();
    assert!(events.is_empty());
    assert_eq!(events.events().count(), 0);
    assert!(events.trigger_dyn("foo").is_err());
}

#[test]
fn test_debug_lists_counts() {
    let mut events = Registry::<Basic>::new();
    events.on::<key!("bar"), _>(|| {});
    events.on::<key!("bar"), _>(|| {});
    assert_eq!(format!("{:?}", events), r#"{"foo": 0, "bar": 2, "baz": 0}"#);
}

// =============================================================================
// Large event sets
// =============================================================================

type Many = events![
    key!("e00"), key!("e01"), key!("e02"), key!("e03"), key!("e04"),
    key!("e05"), key!("e06"), key!("e07"), key!("e08"), key!("e09"),
    key!("e10"), key!("e11"), key!("e12"), key!("e13"), key!("e14"),
    key!("e15"), key!("e16"), key!("e17"), key!("e18"), key!("e19"),
];

#[test]
fn test_large_registry() {
    let mut events = Registry::<Many>::new();
    assert_eq!(events.len(), 20);
    assert_ne!(events.name_index().strategy(), "scan");

    let (last, f) = counter();
    let (mid, g) = counter();
    events.on::<key!("e19"), _>(f);
    events.on_dyn("e07", g).unwrap();

    assert_eq!(events.trigger_dyn("e19"), Ok(1));
    assert_eq!(events.trigger::<key!("e07"), _>(), 1);
    assert_eq!(events.trigger_dyn("e00"), Ok(0));
    assert!(events.trigger_dyn("e20").is_err());
    assert_eq!((last.get(), mid.get()), (1, 1));

    for (i, name) in events.events().enumerate() {
        assert_eq!(name, format!("e{:02}", i));
        assert_eq!(events.name_index().get(name), Some(i));
    }
}

// =============================================================================
// Run-time event sets
// =============================================================================

#[test]
fn test_dyn_registry_scenario() {
    let names: Vec<String> = ["foo", "bar", "baz"].iter().map(|s| s.to_string()).collect();
    let mut events = DynRegistry::new(names);
    let (a, fa) = counter();
    let (b, fb) = counter();
    let (c, fc) = counter();

    events.on("foo", fa).unwrap();
    events.on("foo", fb).unwrap();
    events.on("bar", fc).unwrap();

    assert_eq!(events.trigger("foo"), Ok(2));
    assert_eq!((a.get(), b.get(), c.get()), (1, 1, 0));

    assert_eq!(events.trigger("baz"), Ok(0));
    assert_eq!((a.get(), b.get(), c.get()), (1, 1, 0));

    assert_eq!(events.trigger("qux"), Err(Error::UnknownEvent { name: "qux".into() }));
    assert_eq!(events.on("qux", || {}), Err(Error::UnknownEvent { name: "qux".into() }));
    assert!(events.listeners("qux").is_err());
    assert_eq!((a.get(), b.get(), c.get()), (1, 1, 0));
}

#[test]
fn test_dyn_registry_order_and_duplicates() {
    let mut events = DynRegistry::new(["tick", "tock", "tick"]);
    assert_eq!(events.len(), 2);
    assert_eq!(events.events().collect::<Vec<_>>(), ["tick", "tock"]);

    let log = Rc::new(RefCell::new(Vec::new()));
    events.on("tock", recorder(&log, "first")).unwrap();
    events.on("tock", recorder(&log, "second")).unwrap();
    events.on("tock", recorder(&log, "first")).unwrap();
    assert_eq!(events.listeners("tock"), Ok(3));

    events.trigger("tock").unwrap();
    assert_eq!(*log.borrow(), ["first", "second", "first"]);
    assert_eq!(format!("{:?}", events), r#"{"tick": 0, "tock": 3}"#);
}

#[test]
fn test_dyn_registry_large_and_empty() {
    let mut events = DynRegistry::new((0..40).map(|i| format!("event{}", i)));
    assert_eq!(events.len(), 40);
    assert_ne!(events.name_index().strategy(), "scan");
    assert!(events.contains_event("event39"));
    assert!(!events.contains_event("event40"));

    let (count, f) = counter();
    events.on("event25", f).unwrap();
    assert_eq!(events.trigger("event25"), Ok(1));
    assert_eq!(count.get(), 1);

    let mut empty = DynRegistry::new(Vec::<String>::new());
    assert!(empty.is_empty());
    assert!(empty.trigger("event0").is_err());
}
