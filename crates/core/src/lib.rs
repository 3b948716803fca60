//! Domain logic for the eventstay booking platform.
//!
//! Holds the pieces that carry decision logic but no I/O: the shared id and
//! timestamp types, the error taxonomy, the hotel-entitlement rule, and the
//! per-operation error-mapping policy. Persistence and HTTP concerns live in
//! `eventstay-db` and `eventstay-api`.

pub mod entitlement;
pub mod error;
pub mod policy;
pub mod types;
