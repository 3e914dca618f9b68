//! Edge cases: unvalidated input, rounding midpoints, asset fallbacks.

use std::path::PathBuf;

use gst_invoice::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn snapshot(input: InvoiceInput) -> InvoiceSnapshot {
    let amounts = input.calculate();
    InvoiceSnapshot { input, amounts }
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

#[test]
fn midpoints_round_away_from_zero() {
    assert_eq!(round_half_up(dec!(0.005), 2), dec!(0.01));
    assert_eq!(round_half_up(dec!(2.675), 2), dec!(2.68));
    assert_eq!(round_half_up(dec!(76.195), 2), dec!(76.20));
    assert_eq!(round_half_up(dec!(-3.815), 2), dec!(-3.82));
    assert_eq!(round_half_up(dec!(0.0049), 2), dec!(0.00));
}

#[test]
fn one_rupee() {
    let a = calculate_amounts(dec!(1), dec!(0));
    assert_eq!(a.taxable_amount, dec!(0.85));
    assert_eq!(a.gst_amount, dec!(0.15));
    assert_eq!(a.cgst, dec!(0.08));
    assert_eq!(a.cgst + a.sgst, dec!(0.16));
}

#[test]
fn full_discount_is_all_zero() {
    let a = calculate_amounts(dec!(4999), dec!(4999));
    assert_eq!(a.total_amount, Decimal::ZERO);
    assert_eq!(a.taxable_amount, Decimal::ZERO);
    assert_eq!(a.gst_amount, Decimal::ZERO);
    assert_eq!(a.cgst, Decimal::ZERO);
}

#[test]
fn large_amount() {
    let a = calculate_amounts(dec!(99999999.99), dec!(0));
    assert_eq!(a.taxable_amount, dec!(84745762.70));
    assert_eq!(a.gst_amount, dec!(15254237.29));
    assert_eq!(a.cgst, dec!(7627118.65));
}

#[test]
fn negative_mrp_is_accepted() {
    let mut input = InvoiceInputBuilder::new("", "").build();
    input.set_field(Field::Mrp, "-118");
    let a = input.calculate();
    assert_eq!(a.total_amount, dec!(-118));
    assert_eq!(a.taxable_amount, dec!(-100));
    assert_eq!(a.gst_amount, dec!(-18));
}

#[test]
fn out_of_range_amounts_read_as_zero() {
    let mut input = InvoiceInputBuilder::new("", "").build();
    input.set_field(Field::Mrp, &Decimal::MAX.to_string());
    input.set_field(Field::Discount, "-1");
    assert_eq!(input.mrp, Decimal::ZERO);

    let a = input.calculate();
    assert_eq!(a.total_amount, dec!(1));
    assert_eq!(format_amount(a.total_amount), "Rs. 1.00");

    input.set_field(Field::Mrp, "100000000000000000000");
    input.set_field(Field::Discount, "-100000000000000000000");
    let a = input.calculate();
    assert_eq!(a.total_amount, MAX_AMOUNT * dec!(2));
    assert!(format_amount(a.total_amount).ends_with(".00"));
    assert!(format_amount(a.taxable_amount).rsplit_once('.').is_some_and(|(_, f)| f.len() == 2));
}

#[test]
fn exponent_prefix_is_read() {
    assert_eq!(parse_amount("1e3abc"), dec!(1000));
    assert_eq!(parse_amount("4.999E3 rupees"), dec!(4999));
    assert_eq!(parse_amount("1e25"), Decimal::ZERO);
}

// ---------------------------------------------------------------------------
// Unvalidated fields
// ---------------------------------------------------------------------------

#[test]
fn empty_form_still_renders() {
    let input = InvoiceInputBuilder::new("", "")
        .invoice_no("")
        .order_no("")
        .date("")
        .build();
    let doc = InvoiceDocument::new(&snapshot(input), &Assets::default());
    let text = doc.to_text();
    assert!(text.contains("Name: \n"));
    assert!(text.contains("Invoice No: \n"));
    assert!(text.contains("Rs. 0.00"));
}

#[test]
fn garbage_amounts_become_zero() {
    let mut input = InvoiceInputBuilder::new("", "").build();
    for raw in ["", "   ", "abc", "Rs. 100", "-", ".", "1,000"] {
        input.set_field(Field::Mrp, raw);
        let expected = if raw == "1,000" { dec!(1) } else { Decimal::ZERO };
        assert_eq!(input.mrp, expected, "input {raw:?}");
    }
}

#[test]
fn amount_prefix_wins() {
    assert_eq!(parse_amount("100rs"), dec!(100));
    assert_eq!(parse_amount("12.5.6"), dec!(12.5));
    assert_eq!(parse_amount("-7.25 off"), dec!(-7.25));
}

#[test]
fn whitespace_only_gstin_is_printed() {
    let input = InvoiceInputBuilder::new("Asha", "a@b.in").gstin(" ").build();
    assert_eq!(input.gstin(), Some(" "));
    let doc = InvoiceDocument::new(&snapshot(input), &Assets::default());
    assert_eq!(doc.bill_to.len(), 3);
}

#[test]
fn unknown_field_name() {
    assert_eq!(Field::from_name("gstin"), None);
    assert_eq!(Field::from_name("customer_gstin"), Some(Field::CustomerGstin));
    assert!(Field::Mrp.is_amount());
    assert!(!Field::Date.is_amount());
}

// ---------------------------------------------------------------------------
// Numbering shapes
// ---------------------------------------------------------------------------

#[test]
fn invoice_number_shapes() {
    assert!(is_invoice_number_format("INV/2024-06/0042"));
    assert!(is_invoice_number_format("INV/2024-12/9999"));
    assert!(!is_invoice_number_format("INV/2024-13/0042"));
    assert!(!is_invoice_number_format("INV/2024-6/0042"));
    assert!(!is_invoice_number_format("INV/2024-06/42"));
    assert!(!is_invoice_number_format("inv/2024-06/0042"));
    assert!(!is_order_number_format(""));
    assert!(!is_order_number_format("17184-42"));
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

#[test]
fn missing_assets_fall_back() {
    let dir = std::env::temp_dir().join("gst-invoice-missing-assets");
    let assets = Assets::load(dir.join("LOGO.png"), dir.join("sign.png"));
    assert_eq!(assets.logo, None);
    assert_eq!(
        assets.signature,
        Some(SignatureSource::Reference(dir.join("sign.png")))
    );
}

#[test]
fn loaded_signature_is_embedded() {
    let dir = std::env::temp_dir().join(format!("gst-invoice-edge-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let sign = dir.join("sign.png");
    std::fs::write(&sign, b"\x89PNG\r\n\x1a\nrest").unwrap();

    match load_default_signature(&sign) {
        SignatureSource::Embedded(img) => assert_eq!(img.media_type, "image/png"),
        other => panic!("expected embedded signature, got {other:?}"),
    }
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn document_without_signature_has_no_caption() {
    let input = InvoiceInputBuilder::new("Asha", "a@b.in").build();
    let assets = Assets {
        logo: None,
        signature: None,
    };
    let doc = InvoiceDocument::new(&snapshot(input.clone()), &assets);
    assert!(!doc.to_text().contains(SIGNATURE_CAPTION));

    let assets = Assets {
        logo: None,
        signature: Some(SignatureSource::Reference(PathBuf::from("assets/sign.png"))),
    };
    let doc = InvoiceDocument::new(&snapshot(input), &assets);
    assert!(doc.to_text().contains(SIGNATURE_CAPTION));
}
