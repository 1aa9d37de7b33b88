//! Formatting utilities used for CLI outputs.

use crate::core::aggregate::round_whole;
use rust_decimal::Decimal;
use unicode_width::UnicodeWidthStr;

/// Whole-unit amount with thousands separators: `1250000` → `1,250,000`.
pub fn money(value: Decimal) -> String {
    let rounded = round_whole(value);
    let digits = rounded.abs().normalize().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{out}")
    } else {
        out
    }
}

/// Minutes as `02h 25m`.
pub fn mins2readable(mins: i64) -> String {
    let m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

/// Display width of a cell, counting wide characters as two columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{s}", " ".repeat(fill))
}

/// Placeholder for empty text cells.
pub fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "--" } else { s }
}
