//! Core invoice types, GST calculation, session control and document layout.
//!
//! Every price is tax-inclusive: GST at 18% is already part of
//! `mrp - discount` and is only decomposed, never added on top.

mod assets;
mod builder;
mod calculator;
pub mod document;
mod error;
mod letterhead;
mod numbering;
mod session;
mod types;

pub use assets::*;
pub use builder::*;
pub use calculator::*;
pub use document::{AmountRow, InvoiceDocument, LabeledLine, SIGNATURE_CAPTION};
pub use error::*;
pub use letterhead::*;
pub use numbering::*;
pub use session::*;
pub use types::*;
