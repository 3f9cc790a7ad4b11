//! 宽松整数归一化
//!
//! 预订表单的 guests / days 字段可能以描述性文本提交
//! (例如 "1 Day")，归一化后才能入库。

/// Try to convert a form value to an integer.
///
/// Attempts a direct parse first, so already-numeric text ("5", "05",
/// "-3") passes through unchanged. On failure, scans left-to-right for
/// the first contiguous run of ASCII digits and parses that run
/// ("1 Day" -> 1). Returns `None` when no digits exist at all.
///
/// The digit scan never picks up a minus sign: "-3 days" yields 3, not
/// -3. Downstream form handling relies on this exact behavior, so keep
/// the fallback order (direct parse before digit scan) intact.
pub fn parse_int_loose(val: &str) -> Option<i64> {
    if let Ok(n) = val.trim().parse::<i64>() {
        return Some(n);
    }

    let digits: String = val
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_numbers_pass_through() {
        assert_eq!(parse_int_loose("5"), Some(5));
        assert_eq!(parse_int_loose("05"), Some(5));
        assert_eq!(parse_int_loose(" 12 "), Some(12));
    }

    #[test]
    fn descriptive_text_yields_first_digit_run() {
        assert_eq!(parse_int_loose("1 Day"), Some(1));
        assert_eq!(parse_int_loose("2 Days"), Some(2));
        assert_eq!(parse_int_loose("about 150 guests"), Some(150));
    }

    #[test]
    fn no_digits_is_a_failure() {
        assert_eq!(parse_int_loose("abc"), None);
        assert_eq!(parse_int_loose(""), None);
        assert_eq!(parse_int_loose("many"), None);
    }

    #[test]
    fn direct_parse_keeps_negative_sign() {
        assert_eq!(parse_int_loose("-3"), Some(-3));
    }

    #[test]
    fn digit_scan_ignores_minus_sign() {
        // Accepted quirk: the scan only collects digits
        assert_eq!(parse_int_loose("-3 days"), Some(3));
    }

    #[test]
    fn only_the_first_run_counts() {
        assert_eq!(parse_int_loose("2 to 3 days"), Some(2));
    }
}
