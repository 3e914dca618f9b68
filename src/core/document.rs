//! Renderer-independent invoice layout.
//!
//! Sections appear in a fixed order: letterhead, invoice meta, Bill To,
//! course details, amounts, signature. Output formats walk this structure
//! and only decide how each piece looks.

use super::assets::{AssetImage, Assets, DEFAULT_LOGO_PATH, SignatureSource};
use super::calculator::{CGST_RATE_PERCENT, SGST_RATE_PERCENT, format_amount};
use super::letterhead::{LETTERHEAD, Letterhead};
use super::types::InvoiceSnapshot;

/// Caption printed under the signature image.
pub const SIGNATURE_CAPTION: &str = "Authorized Signatory";

/// Heading of the customer block.
pub const BILL_TO_HEADING: &str = "Bill To";

/// Heading of the description block.
pub const DESCRIPTION_HEADING: &str = "Course Details";

/// A labelled line such as `Invoice No: INV/2024-06/0042`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledLine {
    pub label: &'static str,
    pub value: String,
}

impl LabeledLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// One row of the amounts block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountRow {
    pub label: String,
    /// Formatted with currency prefix and two decimals.
    pub value: String,
    /// The closing total row, set apart from the others.
    pub is_total: bool,
}

/// Fully laid-out invoice, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    pub letterhead: Letterhead,
    /// Logo image if it was loaded.
    pub logo: Option<AssetImage>,
    /// Path the logo is published under, for formats that link images.
    pub logo_path: &'static str,
    /// Invoice No, Date, Order No.
    pub meta: Vec<LabeledLine>,
    /// Name, Email and, when non-empty, GSTIN and Address.
    pub bill_to: Vec<LabeledLine>,
    pub description: String,
    /// MRP, Discount, Taxable Amount, CGST, SGST, Total.
    pub amounts: Vec<AmountRow>,
    /// Signature block; omitted entirely when `None`.
    pub signature: Option<SignatureSource>,
}

impl InvoiceDocument {
    /// Lay out a frozen snapshot.
    ///
    /// GSTIN and address lines depend only on the snapshot values being
    /// non-empty, never on whether the form currently shows those inputs.
    pub fn new(snapshot: &InvoiceSnapshot, assets: &Assets) -> Self {
        let input = &snapshot.input;
        let amounts = &snapshot.amounts;

        let meta = vec![
            LabeledLine::new("Invoice No", &input.invoice_no),
            LabeledLine::new("Date", &input.date),
            LabeledLine::new("Order No", &input.order_no),
        ];

        let mut bill_to = vec![
            LabeledLine::new("Name", &input.customer_name),
            LabeledLine::new("Email", &input.customer_email),
        ];
        if let Some(gstin) = input.gstin() {
            bill_to.push(LabeledLine::new("GSTIN", gstin));
        }
        if let Some(address) = input.address() {
            bill_to.push(LabeledLine::new("Address", address));
        }

        let row = |label: String, value, is_total| AmountRow {
            label,
            value: format_amount(value),
            is_total,
        };
        let amounts = vec![
            row("MRP Amount".into(), input.mrp, false),
            row("Discount".into(), input.discount, false),
            row("Taxable Amount".into(), amounts.taxable_amount, false),
            row(format!("CGST ({CGST_RATE_PERCENT}%)"), amounts.cgst, false),
            row(format!("SGST ({SGST_RATE_PERCENT}%)"), amounts.sgst, false),
            row("Total Amount".into(), amounts.total_amount, true),
        ];

        Self {
            letterhead: LETTERHEAD,
            logo: assets.logo.clone(),
            logo_path: DEFAULT_LOGO_PATH,
            meta,
            bill_to,
            description: input.description.clone(),
            amounts,
            signature: assets.signature.clone(),
        }
    }

    /// Plain-text rendering for terminals and logs.
    pub fn to_text(&self) -> String {
        const LABEL_WIDTH: usize = 18;
        const VALUE_WIDTH: usize = 16;

        let labeled = |line: &LabeledLine| format!("{}: {}", line.label, line.value);

        let mut lines = vec![self.letterhead.company_name.to_string()];
        lines.extend(self.letterhead.detail_lines());
        lines.push(String::new());

        lines.extend(self.meta.iter().map(labeled));
        lines.push(String::new());

        lines.push(format!("{BILL_TO_HEADING}:"));
        lines.extend(self.bill_to.iter().map(labeled));
        lines.push(String::new());

        lines.push(format!("{DESCRIPTION_HEADING}:"));
        lines.push(self.description.clone());
        lines.push(String::new());

        for row in &self.amounts {
            if row.is_total {
                lines.push("-".repeat(LABEL_WIDTH + VALUE_WIDTH));
            }
            let label = format!("{}:", row.label);
            lines.push(format!(
                "{label:<w$}{:>v$}",
                row.value,
                w = LABEL_WIDTH,
                v = VALUE_WIDTH
            ));
        }

        if self.signature.is_some() {
            lines.push(String::new());
            lines.push(SIGNATURE_CAPTION.to_string());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
