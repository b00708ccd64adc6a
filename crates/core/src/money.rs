//! Money representation.
//!
//! All prices and totals are held in paise (smallest currency unit) so that
//! display, spreadsheet and bill always agree to the last digit.

/// Amount in paise.
pub type Paise = u64;

/// Convert a whole-rupee amount to paise.
pub const fn rupees(whole: u64) -> Paise {
    whole * 100
}

/// Render a paise amount as rupees with two decimals, e.g. `520.00`.
pub fn format_rupees(amount: Paise) -> String {
    format!("{}.{:02}", amount / 100, amount % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(format_rupees(rupees(85)), "85.00");
        assert_eq!(format_rupees(8_550), "85.50");
        assert_eq!(format_rupees(5), "0.05");
        assert_eq!(format_rupees(0), "0.00");
    }
}
