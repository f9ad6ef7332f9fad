//! Configuration value types.
//!
//! Responsibilities:
//! - Define the tagged values stored by the configuration store
//!   (`ClientAdapter`, `DocumentWrapper`).
//! - Define `Setting`, the name of a single resettable attribute.
//!
//! Does NOT handle:
//! - Storing or resetting values (see `configuration` module).
//! - Resolving an adapter into a live transport (see client crate).
//!
//! Invariants:
//! - Every type has a snake_case serde and `Display` representation.

mod adapter;
mod setting;
mod wrapper;

pub use adapter::ClientAdapter;
pub use setting::Setting;
pub use wrapper::DocumentWrapper;
