//! Registry over a name set only known at run time.
//!
//! Same contract as the name-based half of [`Registry`](super::Registry):
//! FIFO callback lists, an `Err(UnknownEvent)` for names outside the set,
//! never a silent no-op. There is no static path, so every call pays for
//! a [`NameIndex`] lookup.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::Result;
use super::callbacks::Callbacks;
use super::index::NameIndex;
use super::log::{debug, trace};
use super::unknown_event;

/// Named events fixed at construction from run-time strings.
///
/// ```
/// use typed_events::DynRegistry;
///
/// let names = vec!["foo".to_string(), "bar".to_string()];
/// let mut events = DynRegistry::new(names);
///
/// events.on("foo", || println!("foo triggered!")).unwrap();
/// assert_eq!(events.trigger("foo"), Ok(1));
/// assert!(events.trigger("unknown").is_err());
/// ```
pub struct DynRegistry {
    names: Vec<String>,
    lists: Vec<Callbacks>,
    index: NameIndex<String>,
}

impl DynRegistry {
    /// One empty callback list per distinct name. A repeated name keeps its
    /// first position.
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if unique.contains(&name) {
                debug!(event = name.as_str(), "duplicate event name ignored");
                continue;
            }
            unique.push(name);
        }

        let index = NameIndex::build(unique.iter().cloned());
        let lists = unique.iter().map(|_| Callbacks::new()).collect();
        debug!(events = unique.len(), strategy = index.strategy(), "dynamic event registry constructed");
        DynRegistry { names: unique, lists, index }
    }

    /// Append `callback` to the event named `event`.
    pub fn on(&mut self, event: &str, callback: impl FnMut() + 'static) -> Result<()> {
        trace!(event, "callback registered by name");
        self.lookup_mut(event)?.push(callback);
        Ok(())
    }

    /// Invoke the callbacks of the event named `event` in registration
    /// order. Returns how many ran.
    pub fn trigger(&mut self, event: &str) -> Result<usize> {
        trace!(event, "event triggered by name");
        Ok(self.lookup_mut(event)?.call_all())
    }

    pub fn listeners(&self, event: &str) -> Result<usize> {
        Ok(self.lookup(event)?.len())
    }

    pub fn contains_event(&self, event: &str) -> bool {
        self.index.get(event).is_some()
    }

    /// Event names in construction order.
    pub fn events(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn name_index(&self) -> &NameIndex<String> {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn lookup(&self, event: &str) -> Result<&Callbacks> {
        self.index
            .get(event)
            .and_then(|i| self.lists.get(i))
            .ok_or_else(|| unknown_event(event))
    }

    fn lookup_mut(&mut self, event: &str) -> Result<&mut Callbacks> {
        let index = self.index.get(event);
        index
            .and_then(|i| self.lists.get_mut(i))
            .ok_or_else(|| unknown_event(event))
    }
}

impl fmt::Debug for DynRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.names.iter().zip(&self.lists).map(|(name, list)| (name, list.len()));
        f.debug_map().entries(counts).finish()
    }
}
