//! Currency formatting for raised/target amounts.

/// Format an amount as whole US dollars with thousands separators,
/// e.g. `1234567.0` → `"$1,234,567"`.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;

    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(7.0), "$7");
        assert_eq!(format_usd(999.0), "$999");
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_usd(1000.0), "$1,000");
        assert_eq!(format_usd(25500.0), "$25,500");
        assert_eq!(format_usd(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_rounds_to_whole_dollars() {
        assert_eq!(format_usd(999.6), "$1,000");
        assert_eq!(format_usd(10.4), "$10");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_usd(-1234.0), "-$1,234");
    }
}
