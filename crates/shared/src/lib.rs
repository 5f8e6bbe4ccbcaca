//! Shared types, errors, and configuration for Centavo.
//!
//! This crate provides the pieces every other crate agrees on:
//! - The free-form `Currency` code type
//! - The `MoneyError` type raised by money operations
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{BankConfig, BankKind, MoneyConfig, RateConfig};
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, DEFAULT_CURRENCY};
