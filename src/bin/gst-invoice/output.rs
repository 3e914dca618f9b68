use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use gst_invoice::core::{CalculatedAmounts, InvoiceDocument, format_amount};

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Html,
    Pdf,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Html => "html",
            Self::Pdf => "pdf",
        }
    }
}

/// Render `doc` in `format`.
pub fn render(doc: &InvoiceDocument, format: Format) -> Result<Vec<u8>> {
    Ok(match format {
        Format::Text => doc.to_text().into_bytes(),
        Format::Html => gst_invoice::html::to_html(doc)?.into_bytes(),
        Format::Pdf => gst_invoice::pdf::to_pdf(doc)?,
    })
}

/// Render and write `doc`, to `out` or to `output_dir/{invoice-no}.{ext}`.
pub fn write_document(
    doc: &InvoiceDocument,
    format: Format,
    out: Option<&Path>,
    output_dir: &Path,
) -> Result<PathBuf> {
    let bytes = render(doc, format)?;
    let path = match out {
        Some(p) => p.to_path_buf(),
        None => {
            let invoice_no = doc.meta.first().map(|l| l.value.as_str()).unwrap_or("invoice");
            output_dir.join(format!("{}.{}", file_stem(invoice_no), format.extension()))
        }
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), ?format, "invoice written");
    Ok(path)
}

/// Filesystem-safe name for an invoice number: `INV/2024-06/0042` → `INV-2024-06-0042`.
pub fn file_stem(invoice_no: &str) -> String {
    let stem: String = invoice_no
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    let stem = stem.trim_matches('-');
    if stem.is_empty() { "invoice".to_string() } else { stem.to_string() }
}

/// Amount summary shown after Calculate.
pub fn summary_table(amounts: &CalculatedAmounts) -> Table {
    let mut table = Table::new();
    table.set_header(vec![Cell::new("Amount Summary"), Cell::new("")]);
    let rows = [
        ("Taxable Amount", amounts.taxable_amount),
        ("GST Amount (18%)", amounts.gst_amount),
        ("CGST (9%)", amounts.cgst),
        ("SGST (9%)", amounts.sgst),
    ];
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format_amount(value)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total Amount").add_attribute(Attribute::Bold),
        Cell::new(format_amount(amounts.total_amount))
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    ]);
    table
}
