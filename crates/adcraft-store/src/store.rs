//! Pin store trait
//!
//! The seam between the pipeline and the storage network. Implementations are
//! long-lived handles safe to share across concurrent pipeline invocations;
//! they hold no mutable per-call state.

use crate::options::PinOptions;
use crate::record::{ContentIdentifier, PinRecord};
use adcraft_core::Result;

/// A content-addressed storage network client (Pinata, in-memory test double)
pub trait PinStore: Send + Sync {
    /// Store name (e.g. "pinata", "memory")
    fn name(&self) -> &str;

    /// Pin raw binary content, returning its content identifier.
    ///
    /// Not idempotent: re-pinning identical bytes is valid and may return a
    /// different identifier.
    fn pin_file(&self, content: &[u8], options: &PinOptions) -> Result<ContentIdentifier>;

    /// Pin a structured JSON document, returning its content identifier
    fn pin_json(&self, content: &serde_json::Value, options: &PinOptions)
        -> Result<ContentIdentifier>;

    /// List pinned records, optionally filtered by identifier substring.
    ///
    /// A filter that matches nothing yields an empty list, not an error.
    fn pin_list(&self, hash_filter: Option<&str>) -> Result<Vec<PinRecord>>;
}
