//! AdCraft Store - content-addressed storage publisher and query
//!
//! Wraps the Pinata pinning service behind a `PinStore` trait so the pipeline
//! can publish and look up content without knowing the wire details, and so
//! tests can swap in an in-memory store.

pub mod memory;
pub mod options;
pub mod pinata;
pub mod record;
pub mod store;

pub use memory::MemoryStore;
pub use options::{PinOptions, MAX_KEYVALUES};
pub use pinata::PinataStore;
pub use record::{ContentIdentifier, PinRecord};
pub use store::PinStore;
