//! # gst-invoice
//!
//! Invoice generator for a single course purchase billed under Indian GST.
//! A draft is filled in, the 18% tax already embedded in the discounted MRP
//! is split out into CGST and SGST, and the frozen result is laid out as a
//! printable invoice with the company letterhead and an authorized signature.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use gst_invoice::core::*;
//! use rust_decimal_macros::dec;
//!
//! let amounts = calculate_amounts(dec!(1000), dec!(0));
//! assert_eq!(amounts.taxable_amount, dec!(847.46));
//! assert_eq!(amounts.gst_amount, dec!(152.54));
//! assert_eq!(amounts.cgst, dec!(76.27));
//! assert_eq!(amounts.sgst, dec!(76.27));
//! assert_eq!(amounts.total_amount, dec!(1000));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Draft types, GST calculator, session, document layout, text output |
//! | `html` | Printable XHTML output |
//! | `pdf` | Single-page A4 PDF output |
//! | `cli` | `gst-invoice` command-line binary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "html")]
pub mod html;

#[cfg(feature = "pdf")]
pub mod pdf;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
