//! Task search and filtering.
//!
//! # Responsibility
//! - Narrow task collections by free text and attribute filters.
//!
//! # Invariants
//! - Filtering never reorders its input.

pub mod filter;
