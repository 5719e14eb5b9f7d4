//! Infrastructure layer: PostgreSQL persistence.

pub mod persistence;
