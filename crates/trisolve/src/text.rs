//! Text boundary: field parsing and display formatting.
//!
//! - `parse_number`: lenient leading-number parse; anything non-finite or
//!   unparsable becomes `None`, never NaN.
//! - `format_value`: two decimals, a trailing `.00` dropped.
//! - `Cell`: display model for one result field.

use crate::classify::{FieldResult, SolveResult};
use crate::types::FieldKey;

/// Length of the longest prefix of `s` that reads as a decimal number
/// (`[+-]digits[.digits][e[+-]digits]`). Zero if there is none.
fn number_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_end = digits_from(i);
    let mut end = int_end;
    let mut mantissa_digits = int_end - i;
    if end < b.len() && b[end] == b'.' {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }
    if end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let mut j = end + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    end
}

/// Parse a text field. `"12abc"` reads as 12; `""`, `"abc"`, `"inf"` and
/// overflowing literals read as absent.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let n = number_prefix_len(s);
    if n == 0 {
        return None;
    }
    s[..n].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Display text for a number; `"N.A."` for non-finite values.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return "N.A.".to_string();
    }
    let fixed = format!("{:.2}", v);
    match fixed.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => fixed,
    }
}

/// Display model for one field cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Value(String),
    Bad { tooltip: String },
    Na { tooltip: String },
}

impl Cell {
    pub fn text(&self) -> &str {
        match self {
            Cell::Value(s) => s,
            Cell::Bad { .. } => "Bad value",
            Cell::Na { .. } => "N.A.",
        }
    }

    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Cell::Value(_) => None,
            Cell::Bad { tooltip } | Cell::Na { tooltip } => Some(tooltip),
        }
    }
}

impl From<&FieldResult> for Cell {
    fn from(f: &FieldResult) -> Self {
        match f {
            FieldResult::Value { value } => Cell::Value(format_value(*value)),
            FieldResult::Bad { reason } => Cell::Bad {
                tooltip: reason.to_string(),
            },
            FieldResult::Na { reason } => Cell::Na {
                tooltip: reason.to_string(),
            },
        }
    }
}

/// One display cell per field, in `FieldKey::ALL` order.
pub fn cells(result: &SolveResult) -> Vec<(FieldKey, Cell)> {
    result.fields.iter().map(|(k, f)| (k, Cell::from(f))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Reason;

    #[test]
    fn parse_accepts_leading_numbers() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("  7.5 "), Some(7.5));
        assert_eq!(parse_number("12abc"), Some(12.0));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("+.5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e2"), Some(100.0));
        assert_eq!(parse_number("1e"), Some(1.0));
        assert_eq!(parse_number("2.5E-1x"), Some(0.25));
        assert_eq!(parse_number("0"), Some(0.0));
    }

    #[test]
    fn parse_rejects_non_numbers() {
        for s in ["", "   ", "abc", ".", "-", "inf", "Infinity", "NaN", "e5", "1e999"] {
            assert_eq!(parse_number(s), None, "input {:?}", s);
        }
    }

    #[test]
    fn format_drops_trailing_zero_decimals() {
        assert_eq!(format_value(60.0), "60");
        assert_eq!(format_value(3.535533), "3.54");
        assert_eq!(format_value(2.5), "2.50");
        assert_eq!(format_value(f64::NAN), "N.A.");
    }

    #[test]
    fn cells_follow_field_tags() {
        let r = SolveResult::all_bad(Reason::Collinear);
        let cs = cells(&r);
        assert_eq!(cs.len(), 9);
        assert_eq!(cs[0].0, FieldKey::A);
        assert_eq!(cs[0].1.text(), "Bad value");
        assert_eq!(
            cs[8].1.tooltip(),
            Some("Points are collinear (not a valid triangle).")
        );
        assert_eq!(Cell::from(&FieldResult::value(45.0)).text(), "45");
    }
}
