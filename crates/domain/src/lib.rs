//! Domain layer for the Phone Tracker backend.
//!
//! This crate contains:
//! - Domain models (Device, LocationSample)
//! - Request and response payloads with input validation

pub mod models;
