//! # Layer 2: Event Registry
//!
//! Named-event dispatch over a fixed event set. Every event owns one
//! [`Callbacks`] list stored in an [`HMap`]; two dispatch paths read that
//! same storage:
//!
//! - **Static** (`on::<E, _>`, `trigger::<E, _>`): the event is a key type,
//!   its slot is resolved by the type checker, unknown events do not compile.
//! - **Dynamic** (`on_dyn`, `trigger_dyn`): the event is a runtime string,
//!   resolved through a [`NameIndex`] built once at construction, unknown
//!   events return [`Error::UnknownEvent`].
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use typed_events::prelude::*;
//!
//! let mut events = Registry::<events![key!("foo"), key!("bar")]>::new();
//!
//! let hits = Rc::new(Cell::new(0));
//! let h = hits.clone();
//! events.on::<key!("foo"), _>(move || h.set(h.get() + 1));
//!
//! events.trigger::<key!("foo"), _>();
//! assert_eq!(events.trigger_dyn("foo"), Ok(1));
//! assert_eq!(hits.get(), 2);
//!
//! assert!(events.trigger_dyn("unknown").is_err());
//! ```
//!
//! ```compile_fail
//! use typed_events::prelude::*;
//!
//! let mut events = Registry::<events![key!("foo"), key!("bar")]>::new();
//! // Never executed, still rejected.
//! if false {
//!     events.trigger::<key!("unknown"), _>();
//! }
//! ```
//!
//! Registering on an unknown event is rejected the same way:
//!
//! ```compile_fail
//! use typed_events::prelude::*;
//!
//! let mut events = Registry::<events![key!("foo"), key!("bar")]>::new();
//! events.on::<key!("unknown"), _>(|| {});
//! ```
//!
//! A name set only known at run time goes through [`DynRegistry`], which
//! has the name-based half of the API.

pub mod callbacks;
pub mod dynamic;
pub mod index;
mod log;

pub use callbacks::{Callback, Callbacks};
pub use dynamic::DynRegistry;
pub use index::{NameIndex, SCAN_LIMIT};

use core::fmt;

use crate::error::{Error, Result};
use crate::key::Key;
use crate::map::{HMap, Keys, Select, Uniform};
use crate::primitives::Peano;
use log::{debug, trace, warn_unknown};

/// Build a registry spec: `events![E0, E1]` is `spec![E0 => Callbacks, E1 => Callbacks]`.
#[macro_export]
macro_rules! events {
    ($($event:ty),* $(,)?) => {
        $crate::spec![$($event => $crate::registry::Callbacks),*]
    };
}

/// Fixed set of named events, each with an ordered callback list.
pub struct Registry<L> {
    slots: HMap<L>,
    index: NameIndex,
}

impl<L> Registry<L>
where
    L: Uniform<Callbacks> + Default,
{
    /// One empty callback list per event, plus the runtime side table.
    pub fn new() -> Self {
        let slots = HMap::<L>::default();
        let index = NameIndex::build(slots.keys());
        debug!(events = L::LEN, strategy = index.strategy(), "event registry constructed");
        Registry { slots, index }
    }

    // -------------------------------------------------------------------------
    // Static dispatch
    // -------------------------------------------------------------------------

    /// Append `callback` to event `E`.
    #[inline]
    pub fn on<E, I>(&mut self, callback: impl FnMut() + 'static)
    where
        E: Key,
        I: Peano,
        L: Select<E::Id, I, Value = Callbacks>,
    {
        trace!(event = E::NAME, "callback registered");
        self.slots.get_mut::<E, I>().push(callback);
    }

    /// Invoke the callbacks of event `E` in registration order. Returns how
    /// many ran.
    #[inline]
    pub fn trigger<E, I>(&mut self) -> usize
    where
        E: Key,
        I: Peano,
        L: Select<E::Id, I, Value = Callbacks>,
    {
        trace!(event = E::NAME, "event triggered");
        self.slots.get_mut::<E, I>().call_all()
    }

    pub fn listeners<E, I>(&self) -> usize
    where
        E: Key,
        I: Peano,
        L: Select<E::Id, I, Value = Callbacks>,
    {
        self.slots.get::<E, I>().len()
    }

    // -------------------------------------------------------------------------
    // Dynamic dispatch
    // -------------------------------------------------------------------------

    /// Append `callback` to the event named `event`.
    pub fn on_dyn(&mut self, event: &str, callback: impl FnMut() + 'static) -> Result<()> {
        trace!(event, "callback registered by name");
        self.lookup_mut(event)?.push(callback);
        Ok(())
    }

    /// Invoke the callbacks of the event named `event`. Returns how many ran.
    pub fn trigger_dyn(&mut self, event: &str) -> Result<usize> {
        trace!(event, "event triggered by name");
        Ok(self.lookup_mut(event)?.call_all())
    }

    pub fn listeners_dyn(&self, event: &str) -> Result<usize> {
        Ok(self.lookup(event)?.len())
    }

    pub fn contains_event(&self, event: &str) -> bool {
        self.index.get(event).is_some()
    }

    /// Event names in declaration order.
    pub fn events(&self) -> Keys<L> {
        self.slots.keys()
    }

    /// The runtime side table.
    pub fn name_index(&self) -> &NameIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn lookup(&self, event: &str) -> Result<&Callbacks> {
        self.index
            .get(event)
            .and_then(|i| self.slots.slots().slot(i))
            .ok_or_else(|| unknown_event(event))
    }

    fn lookup_mut(&mut self, event: &str) -> Result<&mut Callbacks> {
        let index = self.index.get(event);
        index
            .and_then(|i| self.slots.slots_mut().slot_mut(i))
            .ok_or_else(|| unknown_event(event))
    }
}

/// Every name-based miss goes through here.
pub(crate) fn unknown_event(event: &str) -> Error {
    warn_unknown!(event, "unknown event");
    Error::unknown_event(event)
}

impl<L> Default for Registry<L>
where
    L: Uniform<Callbacks> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Debug for Registry<L>
where
    L: Uniform<Callbacks>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.slots();
        let counts = self
            .slots
            .keys()
            .enumerate()
            .map(|(i, name)| (name, slots.slot(i).map_or(0, Callbacks::len)));
        f.debug_map().entries(counts).finish()
    }
}
