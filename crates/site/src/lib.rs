//! Ironvale Supply site library.
//!
//! Provides the site functionality as a library so handlers, services,
//! and repositories can be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
