//! # Domain Models
//!
//! Pure restaurant-management types with minimal dependencies (`serde`, `serde_json`, `bitflags`).
//! No I/O and no networking here, only records and the small helpers that belong to them.
//!
//! All API-facing records use camelCase JSON and keep unknown fields in an `extra` map, so a
//! record survives a deserialize → transform → serialize cycle without losing data.

pub mod catalog;
pub mod categories;
pub mod config;
pub mod recipe;
pub mod response;
