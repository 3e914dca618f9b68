use chrono::{DateTime, Local, TimeZone};
use rand::Rng;
use rust_decimal::Decimal;

use super::numbering::{generate_invoice_number, generate_order_number};
use super::types::InvoiceInput;

/// Date format used for the default draft date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl InvoiceInput {
    /// A fresh draft: empty customer fields, zero amounts, today's date and
    /// newly generated invoice and order numbers.
    pub fn new_draft<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::new_draft_with_rng(now, &mut rand::thread_rng())
    }

    /// [`InvoiceInput::new_draft`] with an explicit random source for the
    /// invoice number suffix.
    pub fn new_draft_with_rng<Tz: TimeZone, R: Rng>(now: &DateTime<Tz>, rng: &mut R) -> Self {
        let today = now.date_naive();
        Self {
            customer_name: String::new(),
            customer_email: String::new(),
            customer_gstin: Some(String::new()),
            customer_address: Some(String::new()),
            description: String::new(),
            mrp: Decimal::ZERO,
            discount: Decimal::ZERO,
            date: today.format(DATE_FORMAT).to_string(),
            invoice_no: generate_invoice_number(today, rng),
            order_no: generate_order_number(now),
        }
    }
}

/// Builder for an [`InvoiceInput`].
///
/// ```
/// use gst_invoice::core::*;
/// use rust_decimal_macros::dec;
///
/// let input = InvoiceInputBuilder::new("Asha Raman", "asha@example.in")
///     .description("Full Stack Web Development")
///     .mrp(dec!(4999))
///     .discount(dec!(1000))
///     .invoice_no("INV/2024-06/0042")
///     .build();
///
/// assert_eq!(input.calculate().total_amount, dec!(3999));
/// ```
pub struct InvoiceInputBuilder {
    customer_name: String,
    customer_email: String,
    customer_gstin: Option<String>,
    customer_address: Option<String>,
    description: String,
    mrp: Decimal,
    discount: Decimal,
    date: Option<String>,
    invoice_no: Option<String>,
    order_no: Option<String>,
    created_at: Option<DateTime<Local>>,
}

impl InvoiceInputBuilder {
    pub fn new(customer_name: impl Into<String>, customer_email: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            customer_gstin: None,
            customer_address: None,
            description: String::new(),
            mrp: Decimal::ZERO,
            discount: Decimal::ZERO,
            date: None,
            invoice_no: None,
            order_no: None,
            created_at: None,
        }
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.customer_gstin = Some(gstin.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.customer_address = Some(address.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn mrp(mut self, mrp: Decimal) -> Self {
        self.mrp = mrp;
        self
    }

    pub fn discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn invoice_no(mut self, number: impl Into<String>) -> Self {
        self.invoice_no = Some(number.into());
        self
    }

    pub fn order_no(mut self, number: impl Into<String>) -> Self {
        self.order_no = Some(number.into());
        self
    }

    /// Moment used for the default date and generated numbers (default: now).
    pub fn created_at(mut self, at: DateTime<Local>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Build the draft. Missing date and numbers are generated; nothing is
    /// validated, so this cannot fail.
    pub fn build(self) -> InvoiceInput {
        let now = self.created_at.unwrap_or_else(Local::now);
        let defaults = InvoiceInput::new_draft(&now);

        InvoiceInput {
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_gstin: self.customer_gstin,
            customer_address: self.customer_address,
            description: self.description,
            mrp: self.mrp,
            discount: self.discount,
            date: self.date.unwrap_or(defaults.date),
            invoice_no: self.invoice_no.unwrap_or(defaults.invoice_no),
            order_no: self.order_no.unwrap_or(defaults.order_no),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::numbering::{is_invoice_number_format, is_order_number_format};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    #[test]
    fn draft_defaults() {
        let now = Local.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
        let draft = InvoiceInput::new_draft_with_rng(&now, &mut StdRng::seed_from_u64(1));
        assert_eq!(draft.date, "2024-06-15");
        assert!(draft.invoice_no.starts_with("INV/2024-06/"));
        assert!(is_invoice_number_format(&draft.invoice_no));
        assert_eq!(draft.order_no, now.timestamp_millis().to_string());
        assert!(draft.customer_name.is_empty());
        assert_eq!(draft.gstin(), None);
        assert_eq!(draft.address(), None);
        assert_eq!(draft.mrp, Decimal::ZERO);
        assert_eq!(draft.discount, Decimal::ZERO);
    }

    #[test]
    fn builder_fills_missing_numbers() {
        let input = InvoiceInputBuilder::new("Asha", "asha@example.in")
            .mrp(dec!(1180))
            .discount(dec!(180))
            .build();
        assert!(is_invoice_number_format(&input.invoice_no));
        assert!(is_order_number_format(&input.order_no));
        assert_eq!(input.customer_gstin, None);
    }

    #[test]
    fn builder_keeps_explicit_values() {
        let input = InvoiceInputBuilder::new("", "")
            .date("not a date")
            .invoice_no("custom")
            .order_no("ORD-1")
            .build();
        assert_eq!(input.date, "not a date");
        assert_eq!(input.invoice_no, "custom");
        assert_eq!(input.order_no, "ORD-1");
    }
}
