//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod orphanage_repo;

pub use orphanage_repo::OrphanageRepo;
