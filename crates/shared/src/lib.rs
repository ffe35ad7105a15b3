//! Shared utilities for the Phone Tracker backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Input validation logic

pub mod validation;
