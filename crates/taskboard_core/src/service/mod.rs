//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into board-level use cases.
//! - Own input validation so repositories can trust their payloads.

pub mod board_service;
