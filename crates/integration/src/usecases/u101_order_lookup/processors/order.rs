use contracts::domain::a001_order_summary::OrderSummary;
use serde_json::Value;

use crate::shared::json_scan::{self, PathStep};
use crate::shared::money;

use PathStep::{Index, Key};

/// Candidate locations for the shipping total, most common first.
///
/// The upstream moves this field around between API releases (top-level
/// decimal on some accounts, nested under `frete` or `totals` on others).
/// Order matters: the first candidate with a positive parse wins.
static SHIPPING_PATHS: &[&[PathStep]] = &[
    &[Key("shipping_total")],
    &[Key("valor_frete")],
    &[Key("frete_total")],
    &[Key("total_frete")],
    &[Key("frete"), Key("valor")],
    &[Key("totals"), Key("shipping")],
    &[Key("order"), Key("shipping_total")],
];

/// Known homes of the tracking code, including the list-shaped variant.
static TRACKING_PATHS: &[&[PathStep]] = &[
    &[Key("frete"), Key("rastreio")],
    &[Key("rastreio")],
    &[Key("rastreamento")],
    &[Key("shipping"), Key("tracking")],
    &[Key("order"), Key("tracking")],
    &[Key("rastreios"), Index(0), Key("codigo")],
];

/// Recover a money field in centavos from a caller-supplied candidate
/// list: ordered probes first, then the whole-tree scan for shipping-named
/// keys. 0 means "no usable value", never an error.
pub fn resolve_money(record: &Value, candidates: &[&[PathStep]]) -> i64 {
    for path in candidates {
        if let Some(value) = json_scan::probe(record, path) {
            let centavos = money::parse_centavos(value);
            if centavos > 0 {
                return centavos;
            }
        }
    }

    // Last resort: the field exists under some key nobody mapped yet.
    for (path, value) in json_scan::scan_shipping_values(record) {
        let centavos = money::parse_centavos(value);
        if centavos > 0 {
            tracing::debug!("shipping total recovered via tree scan at {}", path);
            return centavos;
        }
    }

    0
}

/// The shipping total with the stock candidate list.
pub fn resolve_shipping_total(record: &Value) -> i64 {
    resolve_money(record, SHIPPING_PATHS)
}

/// First non-empty tracking candidate, trimmed and upper-cased.
/// `None` is the legitimate "not yet shipped" state.
pub fn resolve_tracking(record: &Value) -> Option<String> {
    for path in TRACKING_PATHS {
        let Some(value) = json_scan::probe(record, path) else {
            continue;
        };
        let text = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => continue,
        };
        if !text.is_empty() {
            return Some(text.to_uppercase());
        }
    }
    None
}

/// Unwrap the raw payload and resolve both fields into an [`OrderSummary`].
pub fn summarize_order(order_id: Option<&str>, raw: &Value) -> OrderSummary {
    let record = json_scan::unwrap_first(raw);
    OrderSummary {
        order_id: order_id.map(str::to_string),
        shipping_total: resolve_shipping_total(record),
        tracking: resolve_tracking(record),
    }
}
