//! AdCraft Pipeline - generation-to-publication orchestration
//!
//! Ties the content generator and the pin store together: generate an ad
//! image, pin it, compose the metadata document referencing it, pin that too,
//! and hand back both identifiers (plus a fixed-width encoding of them for
//! the oracle that asked).

pub mod metadata;
pub mod pipeline;
pub mod report;

pub use metadata::{compose, AdAttribute, AdMetadata};
pub use pipeline::{AdSpec, PublicationResult, Publisher};
pub use report::{encode_scalar, encode_scalar_hex};
