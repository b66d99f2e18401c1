//! # Snapshot Testing Support
//!
//! Utilities for testing the engine via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a stable `Snap` structure whose
//!   `Display` form is a plain-text outline, used by `insta` inline snapshots
//!   and the CLI's `--dump`
//! - **`invariants`**: Runtime checks run after every parse in debug builds
//!   (spans in bounds and on char boundaries, blocks ordered, inline nodes and
//!   token runs covering their text exactly)

pub mod invariants;
pub mod normalize;

pub use normalize::{Snap, normalize};
