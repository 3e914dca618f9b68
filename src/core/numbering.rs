use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use rand::Rng;

/// Generate a display invoice number `INV/{year}-{month}/{NNNN}`.
///
/// The trailing four digits are random (0000–9999). Nothing guarantees
/// uniqueness; the number is only a label and stays freely editable.
pub fn generate_invoice_number<R: Rng>(date: NaiveDate, rng: &mut R) -> String {
    let suffix: u32 = rng.gen_range(0..10_000);
    format!("INV/{}-{:02}/{:04}", date.year(), date.month(), suffix)
}

/// Generate a display order number: milliseconds since the Unix epoch.
pub fn generate_order_number<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    timestamp.timestamp_millis().to_string()
}

/// Whether `s` has the shape produced by [`generate_invoice_number`].
///
/// Never enforced on user edits.
pub fn is_invoice_number_format(s: &str) -> bool {
    let Some(rest) = s.strip_prefix("INV/") else {
        return false;
    };
    let Some((period, suffix)) = rest.split_once('/') else {
        return false;
    };
    let Some((year, month)) = period.split_once('-') else {
        return false;
    };
    let all_digits = |p: &str, len: usize| p.len() == len && p.bytes().all(|b| b.is_ascii_digit());
    all_digits(year, 4)
        && all_digits(month, 2)
        && all_digits(suffix, 4)
        && matches!(month.parse::<u32>(), Ok(1..=12))
}

/// Whether `s` has the shape produced by [`generate_order_number`].
pub fn is_order_number_format(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
