//! `theater-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no formatting).

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::PlayId;
pub use money::Money;
