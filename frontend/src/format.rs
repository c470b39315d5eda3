use num_format::{CustomFormat, Grouping, ToFormattedString};

/// Formats an amount as rupees with Indian digit grouping and no paise,
/// e.g. `1234567.0` becomes `₹12,34,567`.
pub fn inr(amount: f64) -> String {
    let rounded = amount.round();
    let magnitude = rounded.abs() as i64;
    let grouped = match CustomFormat::builder()
        .grouping(Grouping::Indian)
        .separator(",")
        .build()
    {
        Ok(format) => magnitude.to_formatted_string(&format),
        Err(_) => magnitude.to_string(),
    };
    if rounded < 0.0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// One decimal place, for percentage shares.
pub fn percent(share: f64) -> String {
    format!("{share:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_the_indian_way() {
        assert_eq!(inr(1_234_567.0), "₹12,34,567");
        assert_eq!(inr(50_000.0), "₹50,000");
        assert_eq!(inr(999.0), "₹999");
    }

    #[test]
    fn rounds_away_the_paise() {
        assert_eq!(inr(1_499.5), "₹1,500");
        assert_eq!(inr(0.4), "₹0");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_the_symbol() {
        assert_eq!(inr(-1_00_000.0), "-₹1,00,000");
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(percent(66.666_666), "66.7%");
        assert_eq!(percent(0.0), "0.0%");
    }
}
