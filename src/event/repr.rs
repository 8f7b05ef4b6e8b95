//! Dictionary-notation rendering of gateway events.
//!
//! Echo replies embed the inbound event written the way a dynamic-language
//! dict prints: `{'requestContext': {'connectionId': 'abc123'}}`. Keys keep
//! the order in which they were received.
//!
//! Numbers follow the dict convention too: integers print exactly as sent,
//! fractions and exponents print as the shortest round-trip float, in
//! scientific form below `1e-4` and from `1e16` up.

use serde_json::{Number, Value};

/// Render a JSON value in dictionary notation
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_into(value, &mut out);
    out
}

fn render_into(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => render_number(n, out),
        Value::String(s) => render_str(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render_into(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, val)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render_str(key, out);
                out.push_str(": ");
                render_into(val, out);
            }
            out.push('}');
        }
    }
}

fn render_number(n: &Number, out: &mut String) {
    // Source text, kept verbatim by `arbitrary_precision`
    let text = n.to_string();
    if !text.contains(['.', 'e', 'E']) {
        out.push_str(if text == "-0" { "0" } else { text.as_str() });
        return;
    }

    match text.parse::<f64>() {
        Ok(f) => render_float(f, out),
        Err(_) => out.push_str(&text),
    }
}

fn render_float(f: f64, out: &mut String) {
    if f.is_infinite() {
        out.push_str(if f > 0.0 { "inf" } else { "-inf" });
        return;
    }

    let scientific = format!("{:e}", f);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
        .unwrap_or((scientific.as_str(), 0));

    if (-4..16).contains(&exponent) {
        let fixed = f.to_string();
        out.push_str(&fixed);
        if !fixed.contains('.') {
            out.push_str(".0");
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let magnitude = exponent.unsigned_abs();
        out.push_str(&format!("{}e{}{:02}", mantissa, sign, magnitude));
    }
}

/// Characters shown as-is inside a quoted string.
///
/// Separators, format controls, private use, noncharacters and unassigned
/// planes are escaped. The plain space is the one printable separator.
fn is_printable(c: char) -> bool {
    let cp = c as u32;
    if c == ' ' {
        return true;
    }
    if c.is_control() {
        return false;
    }
    if cp & 0xfffe == 0xfffe {
        return false;
    }
    !matches!(
        cp,
        0x00a0
            | 0x00ad
            | 0x0600..=0x0605
            | 0x061c
            | 0x06dd
            | 0x070f
            | 0x0890..=0x0891
            | 0x08e2
            | 0x1680
            | 0x180e
            | 0x2000..=0x200f
            | 0x2028..=0x202f
            | 0x205f..=0x2064
            | 0x2066..=0x206f
            | 0x3000
            | 0xe000..=0xf8ff
            | 0xfdd0..=0xfdef
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0x40000..=0xdffff
            | 0xe0001
            | 0xe0020..=0xe00ff
            | 0xe01f0..=0xeffff
            | 0xf0000..=0x10ffff
    )
}

fn push_escaped(c: char, out: &mut String) {
    let cp = c as u32;
    let escaped = if cp <= 0xff {
        format!("\\x{:02x}", cp)
    } else if cp <= 0xffff {
        format!("\\u{:04x}", cp)
    } else {
        format!("\\U{:08x}", cp)
    };
    out.push_str(&escaped);
}

fn render_str(s: &str, out: &mut String) {
    // Single quotes unless the text has a single quote and no double quote
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
            c if is_printable(c) => out.push(c),
            c => push_escaped(c, out),
        }
    }
    out.push(quote);
}
