//! Typed values for temperature scales and descriptive bands.
//!
//! # Responsibility
//! - Give the raw `f64` APIs a typed vocabulary for units and bands.
//!
//! # Invariants
//! - Every type here is `Copy` and carries no state beyond its variant.

pub mod band;
pub mod unit;
