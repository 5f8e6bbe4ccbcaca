//! Core money logic for Centavo.
//!
//! This crate contains pure value computation with ZERO I/O dependencies.
//! Amounts are whole cents; rates and scalars are exact decimals.
//!
//! # Modules
//!
//! - `money` - The `Money` value type: arithmetic, comparison, formatting, parsing
//! - `bank` - Exchange strategies (`NoExchangeBank`, `VariableExchangeBank`)
//! - `context` - Default currency plus the bank in use
//! - `export` - Structured export sinks (XML)

pub mod bank;
pub mod context;
pub mod export;
pub mod money;

pub use bank::{Bank, NoExchangeBank, VariableExchangeBank};
pub use centavo_shared::{Currency, MoneyConfig, MoneyError, MoneyResult};
pub use context::MoneyContext;
pub use export::{ExportSink, ExportValue, Exportable, XmlExporter};
pub use money::{FormatRule, Money, ToMoney};
