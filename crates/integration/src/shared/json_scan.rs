use once_cell::sync::Lazy;
use serde_json::Value;

/// One step of a field probe. Paths are tagged steps instead of dotted
/// strings so upstream keys containing literal dots stay unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStep {
    Key(&'static str),
    Index(usize),
}

/// Key-name hints that mark a value (or a whole subtree) as
/// shipping-related during the fallback scan.
const SHIPPING_HINTS: [&str; 4] = ["frete", "shipping", "envio", "entrega"];

static EMPTY_OBJECT: Lazy<Value> = Lazy::new(|| Value::Object(serde_json::Map::new()));

/// Walk `path` from `record`, `None` as soon as a step does not match.
pub fn probe<'a>(record: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = record;
    for step in path {
        current = match step {
            PathStep::Key(key) => current.as_object()?.get(*key)?,
            PathStep::Index(index) => current.as_array()?.get(*index)?,
        };
    }
    Some(current)
}

/// Unwrap the upstream's inconsistent envelopes down to one record.
///
/// Payloads show up as a bare object, `{"data": {...}}`, `{"data": [...]}`
/// or a bare list; a list contributes its first element, an empty list an
/// empty object. Never errors.
pub fn unwrap_first(raw: &Value) -> &Value {
    match raw {
        Value::Object(map) => match map.get("data") {
            Some(data @ Value::Object(_)) => data,
            Some(Value::Array(items)) => items.first().unwrap_or(&EMPTY_OBJECT),
            _ => raw,
        },
        Value::Array(items) => items.first().unwrap_or(&EMPTY_OBJECT),
        _ => &EMPTY_OBJECT,
    }
}

/// Unwrap a list payload. Some accounts double-wrap:
/// `{"data": {"data": [...]}}`.
pub fn unwrap_list(raw: &Value) -> &[Value] {
    let mut current = raw;
    for _ in 0..2 {
        match current {
            Value::Object(map) => match map.get("data") {
                Some(inner) => current = inner,
                None => break,
            },
            _ => break,
        }
    }
    current.as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Pre-order sweep of the whole record collecting scalar values that live
/// under any shipping-named key, either the leaf's own key or an ancestor's
/// (`"frete": {"valor": "10,00"}` must surface `valor`).
///
/// Parent comes before children, object keys keep the record's native
/// order (serde_json `preserve_order`), arrays go by ascending index.
/// The rendered path is for the debug trail only, never re-parsed.
pub fn scan_shipping_values(record: &Value) -> Vec<(String, &Value)> {
    let mut found = Vec::new();
    walk(record, "", false, &mut found);
    found
}

fn walk<'a>(node: &'a Value, path: &str, inherited: bool, out: &mut Vec<(String, &'a Value)>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                let hit = inherited || key_is_shipping(key);
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                match child {
                    Value::Object(_) | Value::Array(_) => walk(child, &child_path, hit, out),
                    _ if hit => out.push((child_path, child)),
                    _ => {}
                }
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let child_path = format!("{path}[{index}]");
                match child {
                    Value::Object(_) | Value::Array(_) => {
                        walk(child, &child_path, inherited, out)
                    }
                    _ if inherited => out.push((child_path, child)),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

fn key_is_shipping(key: &str) -> bool {
    let key = key.to_lowercase();
    SHIPPING_HINTS.iter().any(|hint| key.contains(hint))
}
