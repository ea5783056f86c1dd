//! Named-event dispatch over a fixed event set.
//!
//! Events named as key types are checked while compiling: registering or
//! triggering an event outside the set does not build. Events named by a
//! runtime string go through the registry's side table and report unknown
//! names as errors. Both paths share the same callback lists. A
//! `DynRegistry` covers event sets that are only known at run time.

use typed_events::prelude::*;

type Events = events![key!("foo"), key!("bar"), key!("baz")];

fn main() {
    let mut events = Registry::<Events>::new();

    events.on::<key!("foo"), _>(|| println!("foo triggered!"));
    events.on::<key!("foo"), _>(|| println!("foo again!"));
    events.on::<key!("bar"), _>(|| println!("bar triggered!"));
    events.on::<key!("baz"), _>(|| println!("baz triggered!"));
    // events.on::<key!("unknown"), _>(|| {}); // does not compile

    events.trigger::<key!("foo"), _>();
    events.trigger::<key!("bar"), _>();
    // events.trigger::<key!("unknown"), _>(); // does not compile

    // Name only known at runtime.
    let name = String::from("baz");
    match events.trigger_dyn(&name) {
        Ok(n) => println!("{} ran {} callback(s)", name, n),
        Err(e) => println!("error: {}", e),
    }

    if let Err(e) = events.trigger_dyn("unknown") {
        println!("error: {}", e);
    }

    println!("{:?}", events);

    // Event set only known at run time.
    let mut runtime = DynRegistry::new(["foo", "bar", "baz"]);
    runtime.on("foo", || println!("foo triggered!")).unwrap();
    runtime.on("baz", || println!("baz triggered!")).unwrap();
    for name in ["foo", "baz", "unknown"] {
        if let Err(e) = runtime.trigger(name) {
            println!("error: {}", e);
        }
    }
}
