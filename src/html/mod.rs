//! Printable XHTML output.
//!
//! The page carries its own print stylesheet. Images are inlined as
//! `data:` URLs when they were loaded and linked by path otherwise.
//!
//! # Example
//!
//! ```
//! use gst_invoice::core::*;
//! use rust_decimal_macros::dec;
//!
//! let input = InvoiceInputBuilder::new("Asha Raman", "asha@example.in")
//!     .mrp(dec!(1000))
//!     .build();
//! let snapshot = InvoiceSnapshot { amounts: input.calculate(), input };
//! let doc = InvoiceDocument::new(&snapshot, &Assets::default());
//! let html = gst_invoice::html::to_html(&doc).unwrap();
//! assert!(html.contains("Rs. 847.46"));
//! ```

mod writer;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub use writer::HtmlWriter;

use crate::core::document::{BILL_TO_HEADING, DESCRIPTION_HEADING};
use crate::core::{AssetImage, InvoiceDocument, InvoiceError, SIGNATURE_CAPTION, SignatureSource};

const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

const STYLESHEET: &str = "
@page { size: A4; margin: 30px; }
body { font-family: Times, serif; color: #111827; margin: 0; }
.page { max-width: 794px; margin: 0 auto; padding: 30px; }
.header { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 30px; }
.header-left { width: 65%; }
.header-right { width: 30%; text-align: right; }
.logo { width: 100px; height: 100px; object-fit: contain; margin-bottom: 10px; }
.company-name { font-size: 14pt; font-weight: normal; margin: 0 0 10px 0; }
.company-details { font-size: 9pt; color: #374151; margin: 0 0 1px 0; }
.invoice-details { font-size: 10pt; color: #374151; margin: 0 0 4px 0; }
.section { margin-bottom: 20px; }
.title { font-size: 16pt; font-weight: bold; margin: 0 0 15px 0; }
.amounts { margin-top: 30px; border-top: 1px solid #E5E7EB; padding-top: 15px; }
.amount-row { display: flex; justify-content: space-between; margin-bottom: 5px; font-size: 10pt; }
.amount-value { font-weight: bold; }
.total-row { display: flex; justify-content: space-between; margin-top: 10px; padding-top: 10px; border-top: 1px solid #E5E7EB; font-size: 12pt; font-weight: bold; }
.signature { margin-top: 50px; text-align: right; }
.signature img { width: 150px; height: 60px; object-fit: contain; }
";

/// Render the document as a standalone XHTML page.
pub fn to_html(doc: &InvoiceDocument) -> Result<String, InvoiceError> {
    let invoice_no = doc
        .meta
        .first()
        .map(|line| line.value.as_str())
        .unwrap_or_default();

    let mut w = HtmlWriter::new()?;
    w.start_element_with_attrs("html", &[("xmlns", XHTML_NS), ("lang", "en")])?;

    w.start_element("head")?;
    w.empty_element("meta", &[("charset", "utf-8")])?;
    w.text_element("title", &format!("Invoice {invoice_no}"))?;
    w.raw_element("style", STYLESHEET)?;
    w.end_element("head")?;

    w.start_element("body")?;
    w.start_element_with_attrs("div", &[("class", "page")])?;

    write_header(&mut w, doc)?;

    // Bill To
    w.start_element_with_attrs("section", &[("class", "section")])?;
    w.text_element_with_attrs("h2", &format!("{BILL_TO_HEADING}:"), &[("class", "title")])?;
    for line in &doc.bill_to {
        w.text_element_with_attrs(
            "p",
            &format!("{}: {}", line.label, line.value),
            &[("class", "company-details")],
        )?;
    }
    w.end_element("section")?;

    // Description
    w.start_element_with_attrs("section", &[("class", "section")])?;
    w.text_element_with_attrs("h2", &format!("{DESCRIPTION_HEADING}:"), &[("class", "title")])?;
    w.text_element_with_attrs("p", &doc.description, &[("class", "company-details")])?;
    w.end_element("section")?;

    // Amounts
    w.start_element_with_attrs("section", &[("class", "amounts")])?;
    for row in &doc.amounts {
        let class = if row.is_total { "total-row" } else { "amount-row" };
        w.start_element_with_attrs("div", &[("class", class)])?;
        w.text_element_with_attrs("span", &format!("{}:", row.label), &[("class", "amount-label")])?;
        w.text_element_with_attrs("span", &row.value, &[("class", "amount-value")])?;
        w.end_element("div")?;
    }
    w.end_element("section")?;

    if let Some(signature) = &doc.signature {
        let src = match signature {
            SignatureSource::Embedded(img) => data_url(img),
            SignatureSource::Reference(path) => path.to_string_lossy().into_owned(),
        };
        w.start_element_with_attrs("section", &[("class", "signature")])?;
        w.empty_element("img", &[("src", src.as_str()), ("alt", "Signature")])?;
        w.text_element_with_attrs("p", SIGNATURE_CAPTION, &[("class", "company-details")])?;
        w.end_element("section")?;
    }

    w.end_element("div")?;
    w.end_element("body")?;
    w.end_element("html")?;

    tracing::debug!(invoice_no, "rendered HTML invoice");
    w.into_string()
}

fn write_header(w: &mut HtmlWriter, doc: &InvoiceDocument) -> Result<(), InvoiceError> {
    let logo_src = match &doc.logo {
        Some(img) => data_url(img),
        None => doc.logo_path.to_string(),
    };

    w.start_element_with_attrs("header", &[("class", "header")])?;

    w.start_element_with_attrs("div", &[("class", "header-left")])?;
    w.empty_element(
        "img",
        &[("class", "logo"), ("src", logo_src.as_str()), ("alt", "Company Logo")],
    )?;
    w.text_element_with_attrs("h1", doc.letterhead.company_name, &[("class", "company-name")])?;
    for line in doc.letterhead.detail_lines() {
        w.text_element_with_attrs("p", &line, &[("class", "company-details")])?;
    }
    w.end_element("div")?;

    w.start_element_with_attrs("div", &[("class", "header-right")])?;
    for line in &doc.meta {
        w.text_element_with_attrs(
            "p",
            &format!("{}: {}", line.label, line.value),
            &[("class", "invoice-details")],
        )?;
    }
    w.end_element("div")?;

    w.end_element("header")?;
    Ok(())
}

/// `data:{media};base64,{payload}` for an in-memory image.
pub fn data_url(img: &AssetImage) -> String {
    format!("data:{};base64,{}", img.media_type, STANDARD.encode(&img.bytes))
}
