//! Numeric micro-grammars shared by rule handlers.

use nom::{
    IResult,
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Divisor for the px to rem conversion used by the CSS profile.
pub const REM_BASE: f64 = 16.0;

/// Parse a floating point or integer number.
fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parses a complete numeric value, rejecting trailing garbage.
pub fn parse_number(input: &str) -> Option<f64> {
    match number(input) {
        Ok(("", value)) => Some(value),
        _ => None,
    }
}

/// Parses a complete number with an optional `%` suffix.
///
/// Returns the numeric value and whether the percent sign was present.
pub fn parse_length(input: &str) -> Option<(f64, bool)> {
    let (rest, value) = number(input).ok()?;
    match rest {
        "" => Some((value, false)),
        "%" => Some((value, true)),
        _ => None,
    }
}

/// True when the input is one or more ASCII digits and nothing else.
pub fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Formats a number the way CSS expects: no trailing `.0`.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Converts a unit-less pixel value to rem text; non-numeric values
/// pass through unchanged.
pub fn px_to_rem(value: &str) -> String {
    match parse_number(value) {
        Some(px) => format!("{}rem", format_number(px / REM_BASE)),
        None => value.to_string(),
    }
}

/// Formats a position offset: percentages stay as written, bare
/// integers gain a `px` suffix. Returns `None` for anything else.
pub fn offset_value(value: &str) -> Option<String> {
    let (n, percent) = parse_length(value)?;
    if n.fract() != 0.0 {
        return None;
    }
    if percent {
        Some(value.to_string())
    } else {
        Some(format!("{value}px"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_decimals() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number("-4"), Some(-4.0));
        assert_eq!(parse_number("0.5"), Some(0.5));
        assert_eq!(parse_number("33.3"), Some(33.3));
    }

    #[test]
    fn rejects_partial_numbers() {
        assert_eq!(parse_number("12px"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn lengths_keep_percent_flag() {
        assert_eq!(parse_length("50%"), Some((50.0, true)));
        assert_eq!(parse_length("-10"), Some((-10.0, false)));
        assert_eq!(parse_length("10em"), None);
    }

    #[test]
    fn rem_conversion() {
        assert_eq!(px_to_rem("16"), "1rem");
        assert_eq!(px_to_rem("12"), "0.75rem");
        assert_eq!(px_to_rem("auto"), "auto");
    }

    #[test]
    fn offsets_pick_px_or_percent() {
        assert_eq!(offset_value("10"), Some("10px".to_string()));
        assert_eq!(offset_value("-50%"), Some("-50%".to_string()));
        assert_eq!(offset_value("wide"), None);
    }
}
