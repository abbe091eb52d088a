#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core primitives shared by the dictscan crates.
//!
//! - `PatternId`: insertion-order handle for an input pattern
//! - `Colors`: ANSI palette for dump and trace output
//! - `utils`: byte escaping and column-width helpers

mod colors;
pub mod invariants;
mod pattern;
pub mod utils;


pub use colors::Colors;
pub use pattern::PatternId;
