use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use regex::Regex;

use crate::error::QueryError;

/// A typed clause value.
///
/// The variant is decided purely by the lexical shape of the raw text, see
/// [`parse_field_value`].
///
/// # Examples
///
/// ```
/// use qclause::{parse_field_value, Value};
///
/// assert_eq!(parse_field_value("2.1").unwrap(), Value::Number(2.1));
/// assert_eq!(parse_field_value("true").unwrap(), Value::Boolean(true));
/// assert_eq!(
///     parse_field_value("\"true\"").unwrap(),
///     Value::String("true".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text, either a quoted literal or an uncoerced join target
    String(String),

    /// Floating-point number (the language has a single number type)
    Number(f64),

    /// Boolean (`true` / `false`)
    Boolean(bool),

    /// Point in time, compared by instant
    Timestamp(DateTime<FixedOffset>),
}

impl Value {
    /// Human-readable name of the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Timestamp(_) => "timestamp",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Timestamp(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Timestamp(t) => f.write_str(&t.to_rfc3339()),
        }
    }
}

static ISO_8601: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(?:[Tt ]([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{1,3}))?(Z|([+-])([0-9]{2}):([0-9]{2})))?$",
    )
    .expect("ISO 8601 pattern is valid")
});

/// Coerce raw clause text into a typed [`Value`].
///
/// Rules are tried in order:
///
/// 1. Wrapped in double quotes: the outer pair is stripped. An ISO 8601
///    date or date-time interior becomes a [`Value::Timestamp`], anything
///    else is returned verbatim as a [`Value::String`]. Interior quotes are
///    left alone, so `"""1"2"""` yields `""1"2""`.
/// 2. A leading numeric prefix becomes a [`Value::Number`]. Trailing text is
///    ignored: `12abc` is `12`.
/// 3. Exactly `true` or `false` becomes a [`Value::Boolean`].
///
/// Anything else is a [`QueryError::InvalidFieldValue`] carrying the raw text.
pub fn parse_field_value(raw: &str) -> Result<Value, QueryError> {
    if let Some(inner) = strip_outer_quotes(raw) {
        if let Some(timestamp) = parse_timestamp(inner) {
            tracing::trace!(raw, "coerced to timestamp");
            return Ok(Value::Timestamp(timestamp));
        }
        tracing::trace!(raw, "coerced to string");
        return Ok(Value::String(inner.to_string()));
    }

    if let Some(n) = parse_float_prefix(raw) {
        tracing::trace!(raw, n, "coerced to number");
        return Ok(Value::Number(n));
    }

    match raw {
        "true" => Ok(Value::Boolean(true)),
        "false" => Ok(Value::Boolean(false)),
        _ => Err(QueryError::InvalidFieldValue(raw.to_string())),
    }
}

fn strip_outer_quotes(raw: &str) -> Option<&str> {
    if raw == "\"" {
        // A lone quote both opens and closes: empty interior
        Some("")
    } else if raw.starts_with('"') && raw.ends_with('"') {
        Some(&raw[1..raw.len() - 1])
    } else {
        None
    }
}

/// Parse an ISO 8601 date (`2023-04-09`) or date-time with a mandatory zone
/// (`2023-04-09T12:34:56.789+02:00`, `2023-04-09 12:34:56Z`).
///
/// Date-only input is midnight UTC. Returns `None` when the text does not
/// have that shape or does not name a real calendar instant.
pub fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    let caps = ISO_8601.captures(text)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let date = NaiveDate::from_ymd_opt(num(1)? as i32, num(2)?, num(3)?)?;

    if caps.get(4).is_none() {
        let utc = FixedOffset::east_opt(0)?;
        let midnight = NaiveTime::from_hms_opt(0, 0, 0)?;
        return date.and_time(midnight).and_local_timezone(utc).single();
    }

    // ".5" is 500ms, ".05" is 50ms
    let millis = match caps.get(7) {
        Some(frac) => {
            let digits = frac.as_str();
            digits.parse::<u32>().ok()? * 10u32.pow(3 - digits.len() as u32)
        }
        None => 0,
    };
    let time = NaiveTime::from_hms_milli_opt(num(4)?, num(5)?, num(6)?, millis)?;

    let offset = if caps.get(8)?.as_str() == "Z" {
        FixedOffset::east_opt(0)?
    } else {
        let seconds = (num(10)? * 3600 + num(11)? * 60) as i32;
        match caps.get(9)?.as_str() {
            "-" => FixedOffset::west_opt(seconds)?,
            _ => FixedOffset::east_opt(seconds)?,
        }
    };

    date.and_time(time).and_local_timezone(offset).single()
}

/// Permissive float parse: accepts the longest leading numeric prefix and
/// ignores whatever follows.
///
/// Leading whitespace, a sign, `Infinity`, a fraction without integer digits
/// (`.5`) and an exponent are accepted. Returns `None` when no digit starts
/// the text.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Whole-text numeric parse used for pagination values. Never fails.
///
/// Surrounding whitespace is ignored and empty text is `0`. Besides decimal
/// and exponent forms, unsigned `0x` / `0o` / `0b` integers and a signed
/// `Infinity` are accepted. Anything else is `NaN`.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_integer(&text[2..], radix).unwrap_or(f64::NAN);
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Keeps out the spellings str::parse accepts on top of decimals (inf, nan)
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_integer(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
