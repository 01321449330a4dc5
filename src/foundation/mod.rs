//! Foundation value types and the crate error surface.

pub(crate) mod core;
pub(crate) mod error;
