//! Output formats: text, HTML and PDF.
//!
//! Run with: `cargo test --features all --test render_tests`

use std::path::PathBuf;

use gst_invoice::core::*;
use rust_decimal_macros::dec;

fn snapshot(gstin: &str, address: &str) -> InvoiceSnapshot {
    let input = InvoiceInputBuilder::new("Asha Raman", "asha@example.in")
        .gstin(gstin)
        .address(address)
        .description("Data Science Bootcamp")
        .mrp(dec!(1000))
        .discount(dec!(180))
        .date("2024-06-15")
        .invoice_no("INV/2024-06/0042")
        .order_no("1718442000000")
        .build();
    let amounts = input.calculate();
    InvoiceSnapshot { input, amounts }
}

fn reference_signature() -> Assets {
    Assets {
        logo: None,
        signature: Some(SignatureSource::Reference(PathBuf::from(DEFAULT_SIGNATURE_PATH))),
    }
}

#[test]
fn text_layout() {
    let doc = InvoiceDocument::new(
        &snapshot("29ABCDE1234F1Z5", "12 MG Road, Bengaluru"),
        &reference_signature(),
    );
    insta::assert_snapshot!("invoice_text", doc.to_text());
}

#[test]
fn amount_rows() {
    let doc = InvoiceDocument::new(&snapshot("", ""), &Assets::default());
    let rows: Vec<_> = doc
        .amounts
        .iter()
        .map(|r| (r.label.as_str(), r.value.as_str(), r.is_total))
        .collect();
    assert_eq!(
        rows,
        [
            ("MRP Amount", "Rs. 1000.00", false),
            ("Discount", "Rs. 180.00", false),
            ("Taxable Amount", "Rs. 694.92", false),
            ("CGST (9%)", "Rs. 62.54", false),
            ("SGST (9%)", "Rs. 62.54", false),
            ("Total Amount", "Rs. 820.00", true),
        ]
    );
}

#[cfg(feature = "html")]
mod html {
    use super::*;
    use gst_invoice::html::{data_url, to_html};

    #[test]
    fn contains_all_sections() {
        let doc = InvoiceDocument::new(&snapshot("", ""), &reference_signature());
        let html = to_html(&doc).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Invoice INV/2024-06/0042</title>"));
        assert!(html.contains("TSMC Creations India Pvt.Ltd."));
        assert!(html.contains("GSTIN: 33AAJCT3867G1Z4"));
        assert!(html.contains("Invoice No: INV/2024-06/0042"));
        assert!(html.contains("Order No: 1718442000000"));
        assert!(html.contains("Bill To:"));
        assert!(html.contains("Name: Asha Raman"));
        assert!(html.contains("Course Details:"));
        assert!(html.contains("Rs. 694.92"));
        assert!(html.contains("class=\"total-row\""));
        assert!(html.contains("Authorized Signatory"));
        assert!(html.contains("src=\"assets/sign.png\""));
        assert!(html.contains("src=\"assets/LOGO.png\""));
    }

    #[test]
    fn optional_customer_lines() {
        let doc = InvoiceDocument::new(&snapshot("", ""), &Assets::default());
        let html = to_html(&doc).unwrap();
        assert!(!html.contains("GSTIN: 29"));
        assert!(!html.contains("Address: 12"));

        let doc = InvoiceDocument::new(
            &snapshot("29ABCDE1234F1Z5", "12 MG Road, Bengaluru"),
            &Assets::default(),
        );
        let html = to_html(&doc).unwrap();
        assert!(html.contains("GSTIN: 29ABCDE1234F1Z5"));
        assert!(html.contains("Address: 12 MG Road, Bengaluru"));
    }

    #[test]
    fn no_signature_block_without_signature() {
        let doc = InvoiceDocument::new(&snapshot("", ""), &Assets::default());
        let html = to_html(&doc).unwrap();
        assert!(!html.contains("Authorized Signatory"));
        assert!(!html.contains("class=\"signature\""));
    }

    #[test]
    fn embedded_images_are_inlined() {
        let img = AssetImage::from_bytes(b"\x89PNG\r\n\x1a\n".to_vec());
        let assets = Assets {
            logo: Some(img.clone()),
            signature: Some(SignatureSource::Embedded(img.clone())),
        };
        let doc = InvoiceDocument::new(&snapshot("", ""), &assets);
        let html = to_html(&doc).unwrap();
        assert_eq!(html.matches(data_url(&img).as_str()).count(), 2);
        assert!(!html.contains("assets/LOGO.png"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut snap = snapshot("", "");
        snap.input.customer_name = "<script>alert(1)</script> & co".into();
        let doc = InvoiceDocument::new(&snap, &Assets::default());
        let html = to_html(&doc).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"));
    }
}

#[cfg(feature = "pdf")]
mod pdf {
    use super::*;
    use gst_invoice::pdf::to_pdf;

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|w| w == needle.as_bytes())
    }

    #[test]
    fn renders_single_page() {
        let doc = InvoiceDocument::new(
            &snapshot("29ABCDE1234F1Z5", "12 MG Road, Bengaluru"),
            &reference_signature(),
        );
        let bytes = to_pdf(&doc).unwrap();

        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(contains(&bytes, "(TSMC Creations India Pvt.Ltd.)"));
        assert!(contains(&bytes, "(Invoice No: INV/2024-06/0042)"));
        assert!(contains(&bytes, "(GSTIN: 29ABCDE1234F1Z5)"));
        assert!(contains(&bytes, "(Total Amount:)"));
        assert!(contains(&bytes, "(Rs. 820.00)"));
        assert!(contains(&bytes, "(Authorized Signatory)"));

        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 1);
    }

    #[test]
    fn no_caption_without_signature() {
        let doc = InvoiceDocument::new(&snapshot("", ""), &Assets::default());
        let bytes = to_pdf(&doc).unwrap();
        assert!(!contains(&bytes, "Authorized Signatory"));
        assert!(!contains(&bytes, "(GSTIN: 29"));
    }

    #[test]
    fn undecodable_images_are_skipped() {
        let junk = AssetImage::from_bytes(b"not an image".to_vec());
        let assets = Assets {
            logo: Some(junk.clone()),
            signature: Some(SignatureSource::Embedded(junk)),
        };
        let doc = InvoiceDocument::new(&snapshot("", ""), &assets);
        let bytes = to_pdf(&doc).unwrap();
        assert!(contains(&bytes, "(Authorized Signatory)"));
        assert!(!contains(&bytes, "/XObject"));
    }
}
