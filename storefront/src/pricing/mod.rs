//! Price resolution
//!
//! Pure derivation of the displayed price breakdown from a product
//! snapshot and the current variation selection. Recomputed on every
//! selection change.

mod breakdown;

pub use breakdown::*;
