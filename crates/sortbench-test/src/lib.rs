//! Shared test fixtures for SortBench crates.
//!
//! This crate provides input sequences and assertions for testing.
//! It does NOT depend on `sortbench-core`, so core can use it as a
//! dev-dependency without a cycle.
//!
//! - [`sequences`] - Reference inputs with known operation counts
//! - [`assertions`] - Sortedness and permutation checks
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! sortbench-test = { workspace = true }
//! ```

pub mod assertions;
pub mod sequences;

pub use assertions::{assert_sorted_permutation, is_sorted};
