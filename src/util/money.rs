//! Currency display formatting for campaign amounts.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format a dollar amount for display: whole amounts without cents,
/// fractional amounts with two decimal places.
pub fn format_usd(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}
