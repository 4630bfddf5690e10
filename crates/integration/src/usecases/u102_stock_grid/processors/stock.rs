use contracts::domain::a002_stock_item::{StockItem, SEM_COR, SEM_PRODUTO, SEM_TAMANHO};
use serde_json::Value;

use crate::shared::json_scan::{self, PathStep};
use crate::shared::money;

use PathStep::Key;

static NAME_PATHS: &[&[PathStep]] = &[&[Key("produto")], &[Key("nome")], &[Key("name")]];

/// Size lives in the variation sub-object; `valor` on newer payloads,
/// `nome` on older ones.
static SIZE_PATHS: &[&[PathStep]] = &[
    &[Key("variacao"), Key("valor")],
    &[Key("variacao"), Key("nome")],
];

static COLOR_PATHS: &[&[PathStep]] = &[&[Key("cor"), Key("nome")]];

static SKU_PATHS: &[&[PathStep]] = &[
    &[Key("sku")],
    &[Key("erp_id")],
    &[Key("codigo")],
    &[Key("id")],
];

static QUANTITY_PATHS: &[&[PathStep]] = &[
    &[Key("estoque")],
    &[Key("qtd")],
    &[Key("quantidade")],
];

/// Normalize one raw catalog item. Missing sub-fields degrade to the
/// documented placeholders: an upstream data-quality gap, not an error.
pub fn resolve_stock_item(raw: &Value) -> StockItem {
    let record = json_scan::unwrap_first(raw);

    StockItem {
        sku: first_string(record, SKU_PATHS).unwrap_or_default(),
        product_name: first_string(record, NAME_PATHS).unwrap_or_else(|| SEM_PRODUTO.to_string()),
        size: first_string(record, SIZE_PATHS).unwrap_or_else(|| SEM_TAMANHO.to_string()),
        color: first_string(record, COLOR_PATHS).unwrap_or_else(|| SEM_COR.to_string()),
        quantity: first_quantity(record, QUANTITY_PATHS),
        active: flag(record, "ativo"),
        sellable: flag(record, "disponivel"),
    }
}

fn first_string(record: &Value, paths: &[&[PathStep]]) -> Option<String> {
    for path in paths {
        let Some(value) = json_scan::probe(record, path) else {
            continue;
        };
        let text = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => continue,
        };
        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}

fn first_quantity(record: &Value, paths: &[&[PathStep]]) -> i64 {
    for path in paths {
        match json_scan::probe(record, path) {
            Some(Value::Null) | None => continue,
            Some(value) => return money::parse_quantity(value),
        }
    }
    0
}

/// The upstream encodes booleans as the strings "0"/"1"; a stray native
/// number or bool also counts.
fn flag(record: &Value, key: &str) -> bool {
    match record.get(key) {
        Some(Value::String(s)) => s.trim() == "1",
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}
