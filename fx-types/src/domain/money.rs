//! Monetary rounding.
//!
//! Amounts in this service are decimal major units (dollars, euros, ...).
//! Every converted amount is rounded to 2 decimal places before it is
//! recorded or returned, so downstream consumers never see sub-cent values.

/// Rounds an amount to 2 decimal places, half away from zero.
///
/// This is standard currency rounding: `85.6789` becomes `85.68`,
/// `0.0085` becomes `0.01`.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
