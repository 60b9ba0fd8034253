//! Domain logic for the orphanage registry.
//!
//! Pure types and validation, no I/O. The db and api crates build on top
//! of the error enum and the draft validator defined here.

pub mod error;
pub mod types;
pub mod validation;
