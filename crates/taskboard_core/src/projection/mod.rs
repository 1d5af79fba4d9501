//! Read-side projections of task collections.
//!
//! # Responsibility
//! - Group tasks for board (per column) and timeline (per day) display.
//!
//! # Invariants
//! - Projections are pure and keep input order within every group.

pub mod board;
pub mod timeline;
