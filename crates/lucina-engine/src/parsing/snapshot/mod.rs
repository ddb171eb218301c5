//! # Snapshot Testing Support
//!
//! Utilities for testing the document builder via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a `Document` to a stable `Snap` outline that
//!   serializes for `insta` and renders as indented text
//! - **`invariants`**: Checks every built document must pass (poems have
//!   verse, line numbers are contiguous, books ascend)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
