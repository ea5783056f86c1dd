//! Per-event callback lists.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Zero-argument side-effecting callback.
pub type Callback = Box<dyn FnMut()>;

/// Ordered, append-only list of callbacks for one event.
///
/// Invocation order is registration order; duplicates are kept.
#[derive(Default)]
pub struct Callbacks {
    list: Vec<Callback>,
}

impl Callbacks {
    pub const fn new() -> Self {
        Callbacks { list: Vec::new() }
    }

    pub fn push(&mut self, callback: impl FnMut() + 'static) {
        self.list.push(Box::new(callback));
    }

    /// Invoke every callback in registration order. Returns how many ran.
    pub fn call_all(&mut self) -> usize {
        for callback in &mut self.list {
            callback();
        }
        self.list.len()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").field("len", &self.list.len()).finish()
    }
}
