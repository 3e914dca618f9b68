#![no_main]

use gst_invoice::core::*;
use libfuzzer_sys::fuzz_target;
use rust_decimal_macros::dec;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let input = InvoiceInputBuilder::new(s, s)
            .gstin(s)
            .address(s)
            .description(s)
            .mrp(dec!(1000))
            .invoice_no(s)
            .order_no(s)
            .date(s)
            .build();
        let amounts = input.calculate();
        let doc = InvoiceDocument::new(&InvoiceSnapshot { input, amounts }, &Assets::default());
        let _ = doc.to_text();
        let _ = gst_invoice::html::to_html(&doc);
        let _ = gst_invoice::pdf::to_pdf(&doc);
    }
});
