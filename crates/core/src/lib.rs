//! `relay-core` — shared domain primitives for the relay event library.
//!
//! This crate contains **pure domain** building blocks (no serialization or
//! transport concerns): strongly-typed identifiers and the shared error model.

pub mod error;
pub mod id;

pub use error::CoreError;
pub use id::{AggregateId, EventId};
