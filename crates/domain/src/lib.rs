//! Domain layer for the weather lookup tool
//!
//! Holds the validated primitives the rest of the workspace passes around:
//! the caller's location text and a pair of geographic coordinates.
//! This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
