//! Common utilities shared by the storage crates.
//!
//! This crate provides:
//! - Unified error handling
//! - Database configuration

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
