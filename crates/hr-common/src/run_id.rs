//! Run and correlation identifiers.
//!
//! Every process gets one ULID at startup; individual ranking runs and
//! notification hand-offs mint fresh ones. ULIDs sort lexicographically by
//! creation time, which keeps log correlation cheap.

use once_cell::sync::Lazy;
use ulid::Ulid;

/// Process-level run ID, generated once at first access.
static RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// Returns the process-level run ID (same value for the process lifetime).
#[inline]
pub fn get() -> &'static str {
    &RUN_ID
}

/// Mints a fresh ULID for a single ranking run or notification hand-off.
#[inline]
pub fn generate() -> String {
    Ulid::new().to_string()
}
