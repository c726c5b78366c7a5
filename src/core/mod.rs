//! Core components of the `marketaux-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`MxClient`] and its builder.
//! - The primary [`MxError`] type.
//! - Query canonicalization ([`cache::QueryKey`]) and the TTL result cache.

/// Query keys and the in-memory TTL cache.
pub mod cache;
/// The main client (`MxClient`), builder, and configuration.
pub mod client;
/// The primary error type (`MxError`) for the crate.
pub mod error;

// convenient re-exports so most code can just `use crate::core::MxClient`
pub use client::{MxClient, MxClientBuilder};
pub use error::MxError;
