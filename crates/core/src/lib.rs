//! Ironvale Core - Shared types library.
//!
//! This crate provides common types used across all Ironvale Supply components:
//! - `site` - Public marketing site + admin JSON API
//! - `cli` - Command-line tools for migrations, seeding, and admin management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, roles, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
