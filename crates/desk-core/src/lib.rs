//! # desk-core
//!
//! Core types and error types for contractdesk.
//!
//! This crate provides the foundational types shared across all contractdesk crates:
//! - Raw record structs as the REST API returns them (contracts, meetings)
//! - Status and role enums
//! - Create/update drafts with form validation
//! - The explicit session context passed to services
//! - Cross-cutting error types

pub mod drafts;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;

mod wire;

/// Placeholder rendered wherever an optional field is missing.
pub const PLACEHOLDER: &str = "—";
