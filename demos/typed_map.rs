//! A heterogeneous map: each key has its own value type, fixed at compile time.

use typed_events::prelude::*;

#[derive(Key)]
struct Retries;

type Config = spec![key!("foo") => i32, key!("bar") => String, Retries => u8];

fn main() {
    let mut config = HMap::<Config>::new((42, String::from("x"), 3));

    const HAS_FOO: bool = HMap::<Config>::contains::<key!("foo")>();
    const HAS_QUX: bool = HMap::<Config>::contains::<key!("qux")>();
    println!("contains foo: {}, contains qux: {}", HAS_FOO, HAS_QUX);

    println!("foo = {}", config.get::<key!("foo"), _>());
    config.set::<key!("bar"), _>("y");
    config.update::<key!("bar"), _, _>(|s: &mut String, tail: &str| s.push_str(tail), "z");
    config.update::<key!("foo"), _, _>(|v: &mut i32, n: i32| *v *= n, 2);
    let old = config.replace::<Retries, _>(5);
    println!("retries: {} -> {}", old, config.get::<Retries, _>());

    for ((name, ty), value) in config.keys().zip(config.value_types()).zip(config.values()) {
        if let Some(v) = value.downcast_ref::<i32>() {
            println!("{}: {} = {}", name, ty, v);
        } else if let Some(v) = value.downcast_ref::<String>() {
            println!("{}: {} = {:?}", name, ty, v);
        } else {
            println!("{}: {}", name, ty);
        }
    }

    println!("{:?}", config);
}
