//! # Shared Utility Functions
//!
//! Display helpers used by the project cards, the project filter and the
//! wallet widget.
//!
//! ```rust
//! use shared::utils::{format_number, to_kebab_case};
//!
//! assert_eq!(format_number(75000.0, 0), "75,000");
//! assert_eq!(to_kebab_case("Soundtrack / Film Score"), "soundtrack--film-score");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Returned unchanged when it is too short to shorten. Works on characters, so
/// non-ASCII input never splits a code point.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Address as shown in the wallet widget. Full-length addresses are shortened
/// to 6 leading and 4 trailing characters; short placeholders pass through.
pub fn display_address(address: &str) -> String {
    if address.chars().count() > DISPLAY_ADDRESS_MAX {
        format_address(address, 6, 4)
    } else {
        address.to_string()
    }
}

const DISPLAY_ADDRESS_MAX: usize = 20;

/// Format a number with comma thousands separators (e.g. 1234567.89 -> "1,234,567.89").
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && value.abs() >= 0.5 * 10f64.powi(-(decimals as i32)) {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(dec) => format!("{}{}.{}", sign, grouped, dec),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a whole amount in dollars, e.g. `$75,000`.
pub fn format_usd(amount: u64) -> String {
    format!("${}", format_number(amount as f64, 0))
}

/// Format a percentage to one decimal, dropping the fraction when it is whole.
///
/// Values below 100 never round up to "100%".
pub fn format_percentage(pct: f64) -> String {
    let mut tenths = (pct * 10.0).round();
    if pct < 100.0 && tenths >= 1000.0 {
        tenths = 999.0;
    }

    if tenths % 10.0 == 0.0 {
        format!("{:.0}%", tenths / 10.0)
    } else {
        format!("{:.1}%", tenths / 10.0)
    }
}

/// Genre value used by the project filter.
///
/// Lowercases, turns each whitespace run into `-`, then drops `/`, `(` and `)`.
pub fn to_kebab_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_space = false;

    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        if matches!(ch, '/' | '(' | ')') {
            continue;
        }
        out.extend(ch.to_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
        assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
        assert_eq!(format_address(addr, 6, 6), "8W6Qgi...uJKAL");
    }

    #[test]
    fn test_display_address() {
        assert_eq!(display_address("SP2C2...EXAMPLE"), "SP2C2...EXAMPLE");
        assert_eq!(
            display_address("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7"),
            "SP2J6Z...9EJ7"
        );
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("SP3...45G", 4, 4), "SP3...45G");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(75000.0, 0), "75,000");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-1500.0, 0), "-1,500");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(120_000), "$120,000");
        assert_eq!(format_usd(0), "$0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(75.0), "75%");
        assert_eq!(format_percentage(41.666), "41.7%");
        assert_eq!(format_percentage(120.0), "120%");
    }

    #[test]
    fn test_format_percentage_absorbs_float_noise() {
        assert_eq!(format_percentage(7.000000000000001), "7%");
        assert_eq!(format_percentage(28.999999999999996), "29%");
        assert_eq!(format_percentage(56.99999999999999), "57%");
        assert_eq!(format_percentage(99.9999), "99.9%");
        assert_eq!(format_percentage(99.94), "99.9%");
        assert_eq!(format_percentage(100.0), "100%");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("Feature Film"), "feature-film");
        assert_eq!(to_kebab_case("EP (Extended Play)"), "ep-extended-play");
        assert_eq!(to_kebab_case("Theatre / Play"), "theatre--play");
        assert_eq!(to_kebab_case("Children's Book"), "children's-book");
        assert_eq!(to_kebab_case("Animation"), "animation");
    }
}
