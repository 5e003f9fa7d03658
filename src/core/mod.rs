//! Core components of the `electricitymap-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`EmClient`] and its builder.
//! - The primary [`EmError`] type.
//! - Query-parameter construction ([`Location`]).
//! - Internal networking (the shared GET-and-decode helper).

/// The main client (`EmClient`), builder, and defaults.
pub mod client;
/// The primary error type (`EmError`) for the crate.
pub mod error;
pub(crate) mod net;
/// Typed query parameters shared by every endpoint.
pub mod query;

// convenient re-exports so most code can just `use crate::core::EmClient`
pub use client::{EmClient, EmClientBuilder};
pub use error::EmError;
pub use query::Location;
