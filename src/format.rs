//! Number formatting for display.

/// Format an integer with comma thousands separators, e.g. `39512223` →
/// `"39,512,223"`.
pub fn with_separator(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(with_separator(0), "0");
        assert_eq!(with_separator(999), "999");
        assert_eq!(with_separator(1_000), "1,000");
        assert_eq!(with_separator(331_097_593), "331,097,593");
        assert_eq!(with_separator(1_000_000_000), "1,000,000,000");
    }

    #[test]
    fn handles_max_value() {
        assert_eq!(with_separator(u64::MAX), "18,446,744,073,709,551,615");
    }
}
