//! Runtime errors.
//!
//! Unknown keys on static paths never reach this module: they are rejected
//! by the type checker. Only name-based (runtime) dispatch can fail.

use alloc::string::String;

/// Errors from runtime (name-based) dispatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The name is not part of the registry's fixed event set.
    #[error("unknown event: {name:?}")]
    UnknownEvent { name: String },
}

impl Error {
    pub(crate) fn unknown_event(name: &str) -> Self {
        Error::UnknownEvent { name: name.into() }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
