//! Integer stack
//!
//! - Push, pop, and peek on a contiguous owned buffer.
//! - Doubling growth on overflow; capacity never shrinks.
//! - Pop and peek report emptiness instead of reading stale slots.

pub use stack::{Stack, DEFAULT_CAPACITY};

pub mod stack;
