use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::types::{CalculatedAmounts, InvoiceInput};

/// Total GST rate embedded in every price.
pub const GST_RATE_PERCENT: Decimal = dec!(18);
/// Central half of the GST rate.
pub const CGST_RATE_PERCENT: Decimal = dec!(9);
/// State half of the GST rate.
pub const SGST_RATE_PERCENT: Decimal = dec!(9);
/// `1 + GST_RATE_PERCENT / 100`.
pub const GST_DIVISOR: Decimal = dec!(1.18);

/// Fixed prefix for every printed amount.
pub const CURRENCY_PREFIX: &str = "Rs.";

/// Split the tax-inclusive price `mrp - discount` into its GST components.
///
/// The sequence of operations is fixed:
///
/// 1. `discounted = mrp - discount` (may be negative; saturates at the
///    `Decimal` range, which [`parse_amount`](super::parse_amount) input never reaches)
/// 2. `taxable = round2(discounted / 1.18)`
/// 3. `gst = round2(discounted - taxable)`: the unrounded price minus the
///    already rounded base, rounded afterwards
/// 4. `total = discounted`, no rounding
/// 5. `cgst = round2(gst / 2)`, `sgst = cgst`
///
/// Because SGST copies CGST instead of taking the remainder, an odd-cent
/// `gst` makes `cgst + sgst` one cent larger than `gst`.
pub fn calculate_amounts(mrp: Decimal, discount: Decimal) -> CalculatedAmounts {
    let discounted = mrp.saturating_sub(discount);
    let taxable_amount = round_half_up(discounted / GST_DIVISOR, 2);
    let gst_amount = round_half_up(discounted - taxable_amount, 2);
    let cgst = round_half_up(gst_amount / dec!(2), 2);

    CalculatedAmounts {
        taxable_amount,
        gst_amount,
        cgst,
        sgst: cgst,
        total_amount: discounted,
    }
}

impl InvoiceInput {
    /// Run [`calculate_amounts`] on this draft's MRP and discount.
    pub fn calculate(&self) -> CalculatedAmounts {
        calculate_amounts(self.mrp, self.discount)
    }
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
///
/// Midpoints move away from zero: `0.005` → `0.01`, `-3.815` → `-3.82`.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount for print: currency prefix and exactly two decimals.
pub fn format_amount(value: Decimal) -> String {
    format!("{CURRENCY_PREFIX} {}", format_decimal_2(value))
}

/// Exactly two decimals, half-up.
pub fn format_decimal_2(value: Decimal) -> String {
    let mut rounded = round_half_up(value, 2);
    rounded.rescale(2);
    rounded.to_string()
}
