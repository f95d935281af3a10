//! # sheetfill-formula
//!
//! Formula template tokenizer and reference translator for sheetfill.
//!
//! This crate provides:
//! - Tokenization of a formula body into literal text and cell references
//! - Translation of a template anchored at an origin cell to any destination,
//!   shifting relative axes only
//!
//! ## Example
//!
//! ```rust
//! use sheetfill_core::CellAddress;
//! use sheetfill_formula::FormulaTemplate;
//!
//! let origin = CellAddress::parse("B2").unwrap();
//! let template = FormulaTemplate::parse("=SUM(B2:B2)", origin);
//!
//! let dest = CellAddress::parse("C3").unwrap();
//! assert_eq!(template.translate(dest).unwrap(), "SUM(C3:C3)");
//! ```

pub mod error;
pub mod template;
pub mod translate;

pub use error::{FormulaError, FormulaResult};
pub use template::{FormulaTemplate, TemplateToken};
