// Parameter rendering
//
// Execution output echoes the request parameters as a dict literal, e.g.
//   {'x': 1, 'name': 'demo', 'flags': [True, None]}
// Clients of the service match on these strings, so the format is fixed:
// single-quoted strings, Python-style booleans/null, ", " and ": " separators.

use serde_json::{Map, Number, Value};
use std::fmt::Write;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Render a parameter map as a dict literal
pub fn render_parameters(params: &Map<String, Value>) -> String {
    let mut out = String::new();
    write_object(&mut out, params);
    out
}

/// Render any JSON value in the same literal style
pub fn render_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => write_number(out, n),
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => write_object(out, map),
    }
}

fn write_object(out: &mut String, map: &Map<String, Value>) {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_string(out, key);
        out.push_str(": ");
        write_value(out, value);
    }
    out.push('}');
}

fn write_number(out: &mut String, n: &Number) {
    // Number keeps its source text, so integers of any size are written as-is
    let text = n.to_string();
    if is_integer_literal(&text) {
        if text == "-0" {
            out.push('0');
        } else {
            out.push_str(&text);
        }
    } else if let Ok(f) = text.parse::<f64>() {
        write_float(out, f);
    } else {
        out.push_str(&text);
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Shortest round-trip float, scientific outside [1e-4, 1e16)
fn write_float(out: &mut String, f: f64) {
    let abs = f.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{:e}", f);
        match sci.split_once('e') {
            Some((mantissa, exponent)) => {
                let exp: i32 = exponent.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                let _ = write!(out, "{}e{}{:02}", mantissa, sign, exp.abs());
            }
            None => out.push_str(&sci),
        }
    } else if f.fract() == 0.0 {
        let _ = write!(out, "{:.1}", f);
    } else {
        let _ = write!(out, "{}", f);
    }
}

fn write_string(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => write_escaped_char(out, c),
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Printable unless a control, format, surrogate, private-use, unassigned or
/// separator character (plain ASCII space excepted)
fn is_printable(c: char) -> bool {
    if c.is_ascii() {
        return !c.is_ascii_control();
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}

fn write_escaped_char(out: &mut String, c: char) {
    let code = c as u32;
    let _ = if code <= 0xff {
        write!(out, "\\x{:02x}", code)
    } else if code <= 0xffff {
        write!(out, "\\u{:04x}", code)
    } else {
        write!(out, "\\U{:08x}", code)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: Value) -> String {
        match value {
            Value::Object(map) => render_parameters(&map),
            other => render_value(&other),
        }
    }

    #[test]
    fn test_empty_parameters() {
        assert_eq!(render(json!({})), "{}");
    }

    #[test]
    fn test_single_integer() {
        assert_eq!(render(json!({"x": 1})), "{'x': 1}");
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let params: Map<String, Value> =
            serde_json::from_str(r#"{"b": 2, "a": 1, "c": 3}"#).unwrap();
        assert_eq!(render_parameters(&params), "{'b': 2, 'a': 1, 'c': 3}");
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            render(json!({"t": true, "f": false, "n": null})),
            "{'t': True, 'f': False, 'n': None}"
        );
    }

    #[test]
    fn test_nested_structures() {
        assert_eq!(
            render(json!({"list": [1, "two", [3]], "obj": {"k": "v"}})),
            "{'list': [1, 'two', [3]], 'obj': {'k': 'v'}}"
        );
        assert_eq!(render(json!([])), "[]");
    }

    #[test]
    fn test_floats() {
        assert_eq!(render(json!(1.5)), "1.5");
        assert_eq!(render(json!(2.0)), "2.0");
        assert_eq!(render(json!(-0.25)), "-0.25");
        assert_eq!(render(json!(0.0001)), "0.0001");
        assert_eq!(render(json!(0.00001)), "1e-05");
        assert_eq!(render(json!(1e16)), "1e+16");
        assert_eq!(render(json!(1.5e300)), "1.5e+300");
        assert_eq!(render(json!(1e15)), "1000000000000000.0");
    }

    #[test]
    fn test_large_integers() {
        assert_eq!(render(json!(u64::MAX)), "18446744073709551615");
        assert_eq!(render(json!(-42)), "-42");
    }

    #[test]
    fn test_integers_beyond_u64() {
        let big: Value = serde_json::from_str("100000000000000000000").unwrap();
        assert_eq!(render_value(&big), "100000000000000000000");

        let params: Map<String, Value> =
            serde_json::from_str(r#"{"n": -123456789012345678901234567890}"#).unwrap();
        assert_eq!(
            render_parameters(&params),
            "{'n': -123456789012345678901234567890}"
        );
    }

    #[test]
    fn test_number_source_forms() {
        let parse = |text: &str| render_value(&serde_json::from_str::<Value>(text).unwrap());
        assert_eq!(parse("-0"), "0");
        assert_eq!(parse("1E5"), "100000.0");
        assert_eq!(parse("1.50"), "1.5");
        assert_eq!(parse("1e400"), "inf");
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!(render(json!("plain")), "'plain'");
        assert_eq!(render(json!("it's")), "\"it's\"");
        assert_eq!(render(json!("both ' and \"")), "'both \\' and \"'");
        assert_eq!(render(json!("say \"hi\"")), "'say \"hi\"'");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(render(json!("a\nb")), "'a\\nb'");
        assert_eq!(render(json!("tab\there")), "'tab\\there'");
        assert_eq!(render(json!("back\\slash")), "'back\\\\slash'");
        assert_eq!(render(json!("\u{1}")), "'\\x01'");
        assert_eq!(render(json!("caf\u{e9}")), "'caf\u{e9}'");
        assert_eq!(render(json!("\u{7f}")), "'\\x7f'");
    }

    #[test]
    fn test_non_printable_characters_are_escaped() {
        assert_eq!(render(json!("a\u{200b}b")), "'a\\u200bb'");
        assert_eq!(render(json!("a\u{3000}b")), "'a\\u3000b'");
        assert_eq!(render(json!("nb\u{a0}sp")), "'nb\\xa0sp'");
        assert_eq!(render(json!("soft\u{ad}")), "'soft\\xad'");
        assert_eq!(render(json!("\u{2028}\u{2029}")), "'\\u2028\\u2029'");
        assert_eq!(render(json!("\u{feff}")), "'\\ufeff'");
        assert_eq!(render(json!("\u{e000}")), "'\\ue000'");
        assert_eq!(render(json!("\u{f0000}")), "'\\U000f0000'");
    }

    #[test]
    fn test_printable_unicode_is_kept() {
        assert_eq!(render(json!("日本語")), "'日本語'");
        assert_eq!(render(json!("emoji \u{1f600}")), "'emoji \u{1f600}'");
        assert_eq!(render(json!("a b")), "'a b'");
    }

    #[test]
    fn test_keys_are_quoted_like_strings() {
        assert_eq!(render(json!({"it's": 1})), "{\"it's\": 1}");
    }
}
