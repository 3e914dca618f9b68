use std::path::PathBuf;

use chrono::{Local, TimeZone};
use gst_invoice::core::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal_macros::dec;

fn session() -> Session {
    let now = Local.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
    let assets = Assets {
        logo: None,
        signature: Some(SignatureSource::Reference(PathBuf::from(DEFAULT_SIGNATURE_PATH))),
    };
    Session::new(&now, assets)
}

fn fill(s: &mut Session) {
    s.set_field(Field::CustomerName, "Asha Raman").unwrap();
    s.set_field(Field::CustomerEmail, "asha@example.in").unwrap();
    s.set_field(Field::Description, "Data Science Bootcamp").unwrap();
    s.set_field(Field::Mrp, "1000").unwrap();
}

#[test]
fn calculate_then_generate_agree() {
    let mut s = session();
    fill(&mut s);
    let calculated = s.calculate().unwrap();
    let generated = s.generate().unwrap();
    assert_eq!(calculated, generated);
    assert_eq!(s.preview().unwrap().amounts, generated);
}

#[test]
fn generate_twice_after_back_gives_same_result() {
    let mut s = session();
    fill(&mut s);
    let first = s.generate().unwrap();
    let first_doc = s.document().unwrap();
    s.back().unwrap();
    let second = s.generate().unwrap();
    assert_eq!(first, second);
    assert_eq!(s.document().unwrap(), first_doc);
}

#[test]
fn generate_uses_current_values_without_calculate() {
    let mut s = session();
    fill(&mut s);
    s.calculate().unwrap();
    s.set_field(Field::Discount, "180").unwrap();
    let amounts = s.generate().unwrap();
    assert_eq!(amounts.total_amount, dec!(820));
    assert_eq!(s.summary(), Some(&amounts));
}

#[test]
fn previewing_rejects_editing_actions() {
    let mut s = session();
    s.generate().unwrap();

    let err = s.calculate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid transition: calculate is not available while previewing"
    );
    assert!(matches!(
        s.clear(&Local::now()),
        Err(InvoiceError::InvalidTransition { action: "clear", .. })
    ));
    assert!(s.draft_mut().is_err());
    assert!(s.toggle_gstin().is_err());
    assert!(s.set_show_address(true).is_err());
}

#[test]
fn back_keeps_draft_for_further_edits() {
    let mut s = session();
    fill(&mut s);
    s.generate().unwrap();
    s.back().unwrap();
    assert_eq!(s.draft().customer_name, "Asha Raman");
    assert_eq!(s.draft().mrp, dec!(1000));
    s.draft_mut().unwrap().discount = dec!(100);
    assert_eq!(s.calculate().unwrap().total_amount, dec!(900));
}

#[test]
fn clear_resets_draft_and_toggles() {
    let mut s = session();
    fill(&mut s);
    s.toggle_gstin().unwrap();
    s.toggle_address().unwrap();
    s.set_field(Field::CustomerGstin, "29ABCDE1234F1Z5").unwrap();
    let summary = s.calculate().unwrap();

    let later = Local.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap();
    s.clear_with_rng(&later, &mut StdRng::seed_from_u64(7)).unwrap();

    let draft = s.draft();
    assert!(draft.customer_name.is_empty());
    assert!(draft.customer_email.is_empty());
    assert!(draft.description.is_empty());
    assert_eq!(draft.gstin(), None);
    assert_eq!(draft.mrp, dec!(0));
    assert_eq!(draft.date, "2024-07-01");
    assert!(draft.invoice_no.starts_with("INV/2024-07/"));
    assert!(is_invoice_number_format(&draft.invoice_no));
    assert_eq!(draft.order_no, later.timestamp_millis().to_string());
    assert!(!s.show_gstin());
    assert!(!s.show_address());
    assert!(s.is_editing());
    // the last summary survives a clear
    assert_eq!(s.summary(), Some(&summary));
}

#[test]
fn hidden_inputs_still_reach_the_document() {
    let mut s = session();
    fill(&mut s);
    assert!(s.toggle_gstin().unwrap());
    s.set_field(Field::CustomerGstin, "29ABCDE1234F1Z5").unwrap();
    assert!(!s.toggle_gstin().unwrap());

    s.generate().unwrap();
    let doc = s.document().unwrap();
    let labels: Vec<_> = doc.bill_to.iter().map(|l| l.label).collect();
    assert_eq!(labels, ["Name", "Email", "GSTIN"]);
}

#[test]
fn shown_but_empty_inputs_are_omitted() {
    let mut s = session();
    fill(&mut s);
    s.set_show_gstin(true).unwrap();
    s.set_show_address(true).unwrap();
    s.generate().unwrap();
    let doc = s.document().unwrap();
    assert_eq!(doc.bill_to.len(), 2);
}

#[test]
fn session_assets_decide_signature_block() {
    let mut s = session();
    s.generate().unwrap();
    let doc = s.document().unwrap();
    assert!(matches!(doc.signature, Some(SignatureSource::Reference(_))));
    assert!(doc.to_text().ends_with("Authorized Signatory\n"));

    let now = Local.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
    let mut bare = Session::new(&now, Assets::default());
    bare.generate().unwrap();
    assert!(!bare.document().unwrap().to_text().contains(SIGNATURE_CAPTION));
}

#[test]
fn mode_exposes_snapshot() {
    let mut s = session();
    fill(&mut s);
    assert_eq!(s.mode(), &Mode::Editing);
    s.generate().unwrap();
    match s.mode() {
        Mode::Previewing(snapshot) => assert_eq!(snapshot.input.customer_name, "Asha Raman"),
        Mode::Editing => panic!("expected preview"),
    }
}
