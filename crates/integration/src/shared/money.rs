use serde_json::Value;

/// Normalize an upstream money value to centavos.
///
/// The numeric branch mirrors what the upstream actually sends, not what it
/// should send: a float below 1000 is a whole-real amount, anything bigger
/// already arrived in centavos, and integers pass through untouched. Keep
/// the heuristic as is; "fixing" it breaks real payloads.
///
/// Strings accept both Brazilian ("1.234,56") and dotted ("1234.56")
/// notation: when both separators show up, the right-most one is the
/// decimal point. An unparseable value is 0, never an error.
pub fn parse_centavos(value: &Value) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return i;
            }
            let f = n.as_f64().unwrap_or(0.0);
            if f < 1000.0 {
                (f * 100.0).round() as i64
            } else {
                f.round() as i64
            }
        }
        Value::String(s) => match parse_decimal(s) {
            Some(v) => (v * 100.0).round() as i64,
            None => 0,
        },
        _ => 0,
    }
}

/// Same locale-tolerant parse without the minor-unit scaling, for stock
/// quantities. Truncates toward zero.
pub fn parse_quantity(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .unwrap_or_else(|| n.as_f64().unwrap_or(0.0).trunc() as i64),
        Value::String(s) => parse_decimal(s).map(|v| v.trunc() as i64).unwrap_or(0),
        _ => 0,
    }
}

/// Parse a human-formatted decimal, tolerating currency symbols and both
/// separator conventions.
fn parse_decimal(raw: &str) -> Option<f64> {
    let s: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    if s.is_empty() {
        return None;
    }

    let dot = s.rfind('.');
    let comma = s.rfind(',');
    let normalized = match (dot, comma) {
        // "1.234,56": comma is the decimal, dots are thousands
        (Some(d), Some(c)) if c > d => s.replace('.', "").replace(',', "."),
        // "1,234.56": dot is the decimal, commas are thousands
        (Some(_), Some(_)) => s.replace(',', ""),
        // "21,74": lone comma is a decimal comma
        (None, Some(_)) => s.replace(',', "."),
        // dot-only or plain digits; a lone dot is the decimal point,
        // several dots can only be thousands separators
        _ => match s.matches('.').count() {
            0 | 1 => s,
            _ => s.replace('.', ""),
        },
    };

    normalized.parse::<f64>().ok()
}
