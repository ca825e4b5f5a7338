/// Leading integer of `raw`, read the way a browser's `parseInt` reads it.
/// Anything without leading digits counts as 0.
pub fn parse_price(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(0)
}

pub fn total_price<'a>(options: impl IntoIterator<Item = &'a str>) -> i64 {
    options.into_iter().map(parse_price).sum()
}

/// Thousands grouped with a no-break space, as prices are shown in rubles.
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("15000"), 15000);
        assert_eq!(parse_price("  7000 руб"), 7000);
        assert_eq!(parse_price("-20"), -20);
        assert_eq!(parse_price(""), 0);
        assert_eq!(parse_price("abc"), 0);
        assert_eq!(parse_price("-"), 0);
    }

    #[test]
    fn test_total_price() {
        assert_eq!(total_price(["10000", "25000", "5000"]), 40000);
        assert_eq!(total_price(["10000", "", "x"]), 10000);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(40000), "40\u{a0}000");
        assert_eq!(format_price(1234567), "1\u{a0}234\u{a0}567");
        assert_eq!(format_price(-1500), "-1\u{a0}500");
    }
}
