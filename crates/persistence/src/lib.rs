//! Persistence layer for the Phone Tracker backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - Store error classification

pub mod db;
pub mod entities;
pub mod error;
pub mod repositories;

pub use error::StoreError;
