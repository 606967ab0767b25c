//! Stay Engine for a villa rental storefront
//!
//! This crate prices stays (nights × nightly rate), searches the room
//! catalogue, derives the status of tracked compliance documents, and
//! builds expiry, renewal, and rent-due reminders against an explicit
//! "now". An axum HTTP API exposes the same operations.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
