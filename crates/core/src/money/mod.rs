//! The `Money` value type.
//!
//! # Modules
//!
//! - `value` - the type itself, constructors and same-currency ordering
//! - `arithmetic` - add, subtract, multiply, divide, compare and exchange
//! - `format` - `$1.00 CAD`-style rendering
//! - `parse` - `ToMoney` adapters for numbers and strings

pub mod arithmetic;
pub mod format;
pub mod parse;
pub(crate) mod rounding;
pub mod value;

#[cfg(test)]
mod props;

pub use format::FormatRule;
pub use parse::ToMoney;
pub use value::Money;
