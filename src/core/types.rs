use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The editable invoice draft.
///
/// Nothing here is validated: empty names, negative amounts and malformed
/// dates are carried into the calculation and the document unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceInput {
    /// Customer name printed under "Bill To".
    pub customer_name: String,
    /// Customer email printed under "Bill To".
    pub customer_email: String,
    /// Customer GSTIN; printed only when non-empty.
    pub customer_gstin: Option<String>,
    /// Customer postal address; printed only when non-empty.
    pub customer_address: Option<String>,
    /// Purchased course / item.
    pub description: String,
    /// Listed price before discount, tax-inclusive.
    pub mrp: Decimal,
    /// Amount subtracted from `mrp`. May exceed it.
    pub discount: Decimal,
    /// Invoice date as entered (ISO `YYYY-MM-DD` by default).
    pub date: String,
    /// Display identifier, `INV/{year}-{month}/{NNNN}` by default.
    pub invoice_no: String,
    /// Display identifier, creation timestamp in milliseconds by default.
    pub order_no: String,
}

/// Amounts derived from `mrp - discount` with 18% GST embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedAmounts {
    /// Pre-tax base, rounded to 2 places.
    pub taxable_amount: Decimal,
    /// Tax extracted from the discounted price, rounded to 2 places.
    pub gst_amount: Decimal,
    /// Central GST, half of `gst_amount` rounded to 2 places.
    pub cgst: Decimal,
    /// State GST, always identical to `cgst`.
    pub sgst: Decimal,
    /// Final payable amount, exactly `mrp - discount`.
    pub total_amount: Decimal,
}

/// Immutable pair captured by Generate and shown by the document view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    pub input: InvoiceInput,
    pub amounts: CalculatedAmounts,
}

/// Editable draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    InvoiceNo,
    Date,
    CustomerName,
    CustomerEmail,
    CustomerGstin,
    CustomerAddress,
    Description,
    Mrp,
    Discount,
    OrderNo,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 10] = [
        Field::InvoiceNo,
        Field::Date,
        Field::CustomerName,
        Field::CustomerEmail,
        Field::CustomerGstin,
        Field::CustomerAddress,
        Field::Description,
        Field::Mrp,
        Field::Discount,
        Field::OrderNo,
    ];

    /// snake_case field name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvoiceNo => "invoice_no",
            Self::Date => "date",
            Self::CustomerName => "customer_name",
            Self::CustomerEmail => "customer_email",
            Self::CustomerGstin => "customer_gstin",
            Self::CustomerAddress => "customer_address",
            Self::Description => "description",
            Self::Mrp => "mrp",
            Self::Discount => "discount",
            Self::OrderNo => "order_no",
        }
    }

    /// Parse from the snake_case field name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Human-readable form label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvoiceNo => "Invoice Number",
            Self::Date => "Date",
            Self::CustomerName => "Name",
            Self::CustomerEmail => "Email",
            Self::CustomerGstin => "GSTIN",
            Self::CustomerAddress => "Address",
            Self::Description => "Description",
            Self::Mrp => "MRP Amount",
            Self::Discount => "Discount",
            Self::OrderNo => "Order Number",
        }
    }

    /// Whether the field holds a monetary amount.
    pub fn is_amount(&self) -> bool {
        matches!(self, Self::Mrp | Self::Discount)
    }
}

impl InvoiceInput {
    /// Store a raw form value into `field`.
    ///
    /// Text fields keep the value verbatim. Amount fields go through
    /// [`parse_amount`], so unparseable input becomes zero.
    pub fn set_field(&mut self, field: Field, raw: &str) {
        match field {
            Field::InvoiceNo => self.invoice_no = raw.to_string(),
            Field::Date => self.date = raw.to_string(),
            Field::CustomerName => self.customer_name = raw.to_string(),
            Field::CustomerEmail => self.customer_email = raw.to_string(),
            Field::CustomerGstin => self.customer_gstin = Some(raw.to_string()),
            Field::CustomerAddress => self.customer_address = Some(raw.to_string()),
            Field::Description => self.description = raw.to_string(),
            Field::Mrp => self.mrp = parse_amount(raw),
            Field::Discount => self.discount = parse_amount(raw),
            Field::OrderNo => self.order_no = raw.to_string(),
        }
    }

    /// Current value of `field` as form text.
    pub fn field_value(&self, field: Field) -> String {
        match field {
            Field::InvoiceNo => self.invoice_no.clone(),
            Field::Date => self.date.clone(),
            Field::CustomerName => self.customer_name.clone(),
            Field::CustomerEmail => self.customer_email.clone(),
            Field::CustomerGstin => self.customer_gstin.clone().unwrap_or_default(),
            Field::CustomerAddress => self.customer_address.clone().unwrap_or_default(),
            Field::Description => self.description.clone(),
            Field::Mrp => self.mrp.to_string(),
            Field::Discount => self.discount.to_string(),
            Field::OrderNo => self.order_no.clone(),
        }
    }

    /// GSTIN if present and non-empty.
    pub fn gstin(&self) -> Option<&str> {
        non_empty(self.customer_gstin.as_deref())
    }

    /// Address if present and non-empty.
    pub fn address(&self) -> Option<&str> {
        non_empty(self.customer_address.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Largest magnitude [`parse_amount`] accepts. Anything beyond it counts as
/// unparseable, which keeps `mrp - discount` and its two-decimal display
/// inside the `Decimal` range.
pub const MAX_AMOUNT: Decimal = dec!(100000000000000000000);

/// Lenient amount parsing: the longest leading number wins, anything
/// without one is zero.
///
/// A leading number is an optional sign, digits with at most one decimal
/// point, and an optional exponent (`e`/`E`, optional sign, digits). Trailing
/// text is ignored. Magnitudes above [`MAX_AMOUNT`] are zero.
///
/// `"1500"` → 1500, `" 99.5 "` → 99.5, `"1e3abc"` → 1000, `"12abc"` → 12,
/// `""` / `"abc"` / `"1e30"` → 0.
pub fn parse_amount(raw: &str) -> Decimal {
    let Some(number) = leading_number(raw.trim()) else {
        return Decimal::ZERO;
    };
    match number.to_decimal() {
        Some(d) if d.abs() <= MAX_AMOUNT => d,
        _ => Decimal::ZERO,
    }
}

struct LeadingNumber<'a> {
    negative: bool,
    int_digits: &'a str,
    frac_digits: &'a str,
    exponent: Option<&'a str>,
}

impl LeadingNumber<'_> {
    fn to_decimal(&self) -> Option<Decimal> {
        let sign = if self.negative { "-" } else { "" };
        let int_digits = if self.int_digits.is_empty() { "0" } else { self.int_digits };
        let mantissa = if self.frac_digits.is_empty() {
            format!("{sign}{int_digits}")
        } else {
            format!("{sign}{int_digits}.{}", self.frac_digits)
        };

        let m = Decimal::from_str(&mantissa).ok()?;
        let Some(exponent) = self.exponent else {
            return Some(m);
        };
        let exponent: i64 = exponent.trim_start_matches('+').parse().ok()?;
        // Decimal covers 28 digits either side of the point, so past 56
        // shifts the value is zero or out of range.
        if m.is_zero() || exponent < -56 {
            return Some(Decimal::ZERO);
        }
        if exponent > 56 {
            return None;
        }
        if exponent < 0 {
            (0..-exponent).try_fold(m, |acc, _| acc.checked_div(Decimal::TEN))
        } else {
            (0..exponent).try_fold(m, |acc, _| acc.checked_mul(Decimal::TEN))
        }
    }
}

fn leading_number(s: &str) -> Option<LeadingNumber<'_>> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .map_or(bytes.len(), |n| start + n)
    };

    let (negative, int_start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    let int_end = digits_from(int_start);
    let (frac_start, frac_end) = if bytes.get(int_end) == Some(&b'.') {
        (int_end + 1, digits_from(int_end + 1))
    } else {
        (int_end, int_end)
    };
    if int_end == int_start && frac_end == frac_start {
        return None;
    }

    let mut exponent = None;
    if matches!(bytes.get(frac_end), Some(b'e' | b'E')) {
        let sign_len = usize::from(matches!(bytes.get(frac_end + 1), Some(b'+' | b'-')));
        let exp_digits = frac_end + 1 + sign_len;
        let exp_end = digits_from(exp_digits);
        if exp_end > exp_digits {
            exponent = Some(&s[frac_end + 1..exp_end]);
        }
    }

    Some(LeadingNumber {
        negative,
        int_digits: &s[int_start..int_end],
        frac_digits: &s[frac_start..frac_end],
        exponent,
    })
}
