/// Normalizes a raw contact value to the `+<country><digits>` form the
/// transport expects, or `None` when the value cannot hold a dialable number.
///
/// Spreadsheet exports often carry numeric cells in decimal form
/// ("11987654321.0"); those are reduced to their integer string first.
/// There is no upper bound on digit count: over-length numbers pass through.
pub fn normalize_contact(raw: &str, country_code: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Decimal export of a numeric cell: truncate to the integer part.
    let source = if trimmed.contains('.') {
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => (value.trunc() as i64).to_string(),
            _ => trimmed.to_string(),
        }
    } else {
        trimmed.to_string()
    };

    let digits: String = source.chars().filter(|c| c.is_ascii_digit()).collect();

    // At least area code + subscriber number.
    if digits.len() < 10 {
        return None;
    }

    if digits.starts_with(country_code) {
        Some(format!("+{}", digits))
    } else {
        Some(format!("+{}{}", country_code, digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_digits_get_country_prefix() {
        assert_eq!(
            normalize_contact("11987654321", "55"),
            Some("+5511987654321".to_string())
        );
    }

    #[test]
    fn test_formatted_number_is_stripped() {
        assert_eq!(
            normalize_contact("(11) 98765-4321", "55"),
            Some("+5511987654321".to_string())
        );
    }

    #[test]
    fn test_already_prefixed_number_is_not_doubled() {
        assert_eq!(
            normalize_contact("5511987654321", "55"),
            Some("+5511987654321".to_string())
        );
    }

    #[test]
    fn test_decimal_cell_export() {
        assert_eq!(
            normalize_contact("11987654321.0", "55"),
            Some("+5511987654321".to_string())
        );
    }

    #[test]
    fn test_too_few_digits() {
        assert_eq!(normalize_contact("123", "55"), None);
        assert_eq!(normalize_contact("(11) 9876", "55"), None);
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_contact("", "55"), None);
        assert_eq!(normalize_contact("   ", "55"), None);
    }

    #[test]
    fn test_nine_digits_rejected_ten_accepted() {
        assert_eq!(normalize_contact("119876543", "55"), None);
        assert_eq!(
            normalize_contact("1198765432", "55"),
            Some("+551198765432".to_string())
        );
    }

    #[test]
    fn test_over_length_number_still_passes() {
        // Known looseness: no upper bound on digit count.
        assert_eq!(
            normalize_contact("12345678901234567890", "55"),
            Some("+5512345678901234567890".to_string())
        );
    }
}
