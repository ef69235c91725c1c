//! # Price Module
//!
//! Parsing of user-typed price tokens and display formatting.
//!
//! ## Precision
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHERE ROUNDING HAPPENS                                                 │
//! │                                                                         │
//! │  form "19.999" ──► parse_price ──► 19.999 (stored as-is)               │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                                   format_price ──► "$20.00" (display)  │
//! │                                                                         │
//! │  The catalog never rounds. Only rendered rows do.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ministore_core::price::{format_price, parse_price};
//!
//! assert_eq!(parse_price("12.50"), Some(12.5));
//! assert_eq!(parse_price("12.5kg"), Some(12.5));
//! assert_eq!(parse_price("kg"), None);
//! assert_eq!(format_price(79.99, "$"), "$79.99");
//! ```

// =============================================================================
// Parsing
// =============================================================================

/// Parses the leading decimal literal of a price token.
///
/// Leading whitespace is skipped, then the longest prefix of the form
/// `[+-]digits[.digits][e[+-]digits]` is converted. Trailing text is ignored,
/// so `"24.99 USD"` reads as `24.99`. Returns `None` when no digits lead the
/// token.
///
/// No range check is made here; see
/// [`crate::validation::validate_price`] for what the catalog accepts.
pub fn parse_price(token: &str) -> Option<f64> {
    let s = token.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it ("5e" is 5).
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a price with two decimals and a currency symbol.
///
/// ## Example
/// ```rust
/// use ministore_core::price::format_price;
///
/// assert_eq!(format_price(149.99, "$"), "$149.99");
/// assert_eq!(format_price(5.0, "€"), "€5.00");
/// assert_eq!(format_price(-2.5, "$"), "-$2.50");
/// ```
pub fn format_price(price: f64, symbol: &str) -> String {
    if price < 0.0 {
        format!("-{}{:.2}", symbol, price.abs())
    } else {
        format!("{}{:.2}", symbol, price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_price("79.99"), Some(79.99));
        assert_eq!(parse_price("  5"), Some(5.0));
        assert_eq!(parse_price(".5"), Some(0.5));
        assert_eq!(parse_price("3."), Some(3.0));
        assert_eq!(parse_price("-4"), Some(-4.0));
        assert_eq!(parse_price("1e2"), Some(100.0));
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse_price("24.99 USD"), Some(24.99));
        assert_eq!(parse_price("5e"), Some(5.0));
        assert_eq!(parse_price("7.5.1"), Some(7.5));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("   "), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("."), None);
        assert_eq!(parse_price("-"), None);
        assert_eq!(parse_price("$5"), None);
    }

    #[test]
    fn test_format_rounds_for_display_only() {
        assert_eq!(format_price(19.999, "$"), "$20.00");
        assert_eq!(format_price(0.0, "$"), "$0.00");
        assert_eq!(format_price(1234.5, "$"), "$1234.50");
    }
}
