//! AdCraft Core - shared types for the ad publication pipeline
//!
//! Home of the error taxonomy every other crate reports through and the
//! content-hash primitive used for deterministic test identifiers and
//! oracle scalar encoding.

pub mod error;
pub mod hash;
pub mod time;

pub use error::{AdCraftError, Result};
pub use hash::ContentHash;
