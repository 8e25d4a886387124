//! Core types for Ironvale Supply.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod role;
pub mod status;

pub use id::*;
pub use role::{AdminRole, ParseRoleError};
pub use status::{MessageStatus, ParseStatusError, QuoteStatus};
