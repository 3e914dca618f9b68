#![no_main]

use gst_invoice::core::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (mrp, discount) = s.split_once('|').unwrap_or((s, ""));
        let mut input = InvoiceInputBuilder::new("", "").invoice_no("INV/2024-06/0001").build();
        input.set_field(Field::Mrp, mrp);
        input.set_field(Field::Discount, discount);
        assert!(input.mrp.abs() <= MAX_AMOUNT);
        let amounts = input.calculate();
        assert_eq!(amounts.cgst, amounts.sgst);
        let printed = format_amount(amounts.total_amount);
        assert!(printed.rsplit_once('.').is_some_and(|(_, frac)| frac.len() == 2));
    }
});
