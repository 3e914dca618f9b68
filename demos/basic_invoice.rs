use chrono::{Local, TimeZone};
use gst_invoice::core::*;
use rust_decimal_macros::dec;

fn main() {
    // Draft a course invoice the way the form does: raw field values in,
    // amounts parsed leniently.
    let created = Local.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap();
    let mut session = Session::new(&created, Assets::load_defaults());

    session.set_field(Field::CustomerName, "Asha Raman").unwrap();
    session.set_field(Field::CustomerEmail, "asha@example.in").unwrap();
    session.set_show_gstin(true).unwrap();
    session.set_field(Field::CustomerGstin, "29ABCDE1234F1Z5").unwrap();
    session.set_field(Field::Description, "Full Stack Web Development").unwrap();
    session.set_field(Field::Mrp, "4999").unwrap();
    session.set_field(Field::Discount, "1000").unwrap();

    let summary = session.calculate().unwrap();
    println!("Taxable Amount: {}", format_amount(summary.taxable_amount));
    println!("GST Amount:     {}", format_amount(summary.gst_amount));
    println!("Total Amount:   {}", format_amount(summary.total_amount));
    assert_eq!(summary.total_amount, dec!(3999));

    let amounts = session.generate().unwrap();
    assert_eq!(amounts.cgst, amounts.sgst);

    let doc = session.document().expect("previewing after generate");
    println!();
    print!("{}", doc.to_text());

    // Back to the form; the draft is unchanged and can be edited again.
    session.back().unwrap();
    println!();
    println!("Editing {} again", session.draft().invoice_no);
}
