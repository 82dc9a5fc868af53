//! JavaScript literal helpers
//!
//! Quoting/unquoting of string literals, identifier checks and numeric
//! literal decoding. Pure text functions, shared by the printer, the
//! evaluator and the mutators.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Number;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier pattern"));

/// Check whether `name` can be written as a bare property key
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Render `value` as a string literal delimited by `quote`
pub fn quote_string(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Render a property key, quoting it when it is not an identifier
pub fn property_key(name: &str, quote: char) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote_string(name, quote)
    }
}

/// Quote character of a string literal's raw text (defaults to `'`)
pub fn quote_of(raw: &str) -> char {
    match raw.chars().next() {
        Some('"') => '"',
        _ => '\'',
    }
}

/// Decode the raw text of a string literal (quotes included)
pub fn unquote_string(raw: &str) -> String {
    let inner = if raw.len() >= 2 {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };
    unescape(inner)
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut pending_high: Option<u32> = None;

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_surrogate(&mut out, &mut pending_high);
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        let code = match escaped {
            'n' => Some('\n' as u32),
            'r' => Some('\r' as u32),
            't' => Some('\t' as u32),
            'b' => Some(0x08),
            'f' => Some(0x0c),
            'v' => Some(0x0b),
            '0' if !chars.peek().is_some_and(|c| c.is_ascii_digit()) => Some(0),
            'x' => read_hex(&mut chars, 2),
            'u' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    let mut digits = String::new();
                    for d in chars.by_ref() {
                        if d == '}' {
                            break;
                        }
                        digits.push(d);
                    }
                    u32::from_str_radix(&digits, 16).ok()
                } else {
                    read_hex(&mut chars, 4)
                }
            }
            // line continuation
            '\n' => None,
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                None
            }
            other => Some(other as u32),
        };

        let Some(code) = code else {
            continue;
        };
        if (0xD800..0xDC00).contains(&code) {
            flush_surrogate(&mut out, &mut pending_high);
            pending_high = Some(code);
            continue;
        }
        if (0xDC00..0xE000).contains(&code) {
            if let Some(high) = pending_high.take() {
                let combined = 0x10000 + ((high - 0xD800) << 10) + (code - 0xDC00);
                out.push(char::from_u32(combined).unwrap_or('\u{FFFD}'));
                continue;
            }
        }
        flush_surrogate(&mut out, &mut pending_high);
        out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
    }
    flush_surrogate(&mut out, &mut pending_high);
    out
}

fn flush_surrogate(out: &mut String, pending: &mut Option<u32>) {
    if pending.take().is_some() {
        out.push('\u{FFFD}');
    }
}

fn read_hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, len: usize) -> Option<u32> {
    let mut digits = String::with_capacity(len);
    for _ in 0..len {
        match chars.peek() {
            Some(c) if c.is_ascii_hexdigit() => {
                digits.push(*c);
                chars.next();
            }
            _ => break,
        }
    }
    u32::from_str_radix(&digits, 16).ok()
}

/// Decode a numeric literal into a JSON number
///
/// Returns `None` for BigInt literals and values JSON cannot represent.
pub fn parse_number(raw: &str) -> Option<Number> {
    let text: String = raw.chars().filter(|c| *c != '_').collect();
    if text.ends_with('n') {
        return None;
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        return match u64::from_str_radix(digits, radix) {
            Ok(v) => Some(Number::from(v)),
            Err(_) => None,
        };
    }

    let is_integer = !text.contains(['.', 'e', 'E']);
    if is_integer {
        if let Ok(v) = text.parse::<i64>() {
            return Some(Number::from(v));
        }
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

/// Negate a JSON number
pub fn negate_number(n: &Number) -> Option<Number> {
    if let Some(v) = n.as_i64() {
        if let Some(neg) = v.checked_neg() {
            return Some(Number::from(neg));
        }
    }
    n.as_f64().and_then(|v| Number::from_f64(-v))
}
