use anyhow::Result;
use contracts::domain::a001_order_summary::OrderSummary;
use contracts::usecases::u101_order_lookup::{OrderLookupRequest, OrderLookupResponse};
use serde_json::Value;

use super::processors::order as order_processor;
use crate::shared::json_scan;
use crate::shared::wbuy::WbuyApi;

/// Status buckets the upstream paginates orders under.
const SWEEP_STATUSES: std::ops::RangeInclusive<u8> = 1..=18;
const SWEEP_MAX_PAGES: u32 = 5;
const SWEEP_PAGE_LIMIT: u32 = 100;

/// Route a lookup request: by upstream ID when present, by tracking code
/// otherwise.
pub async fn lookup(api: &impl WbuyApi, request: &OrderLookupRequest) -> Result<OrderLookupResponse> {
    if let Some(order_id) = request
        .order_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    {
        return lookup_by_id(api, order_id).await;
    }

    let tracking = request
        .tracking
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_uppercase();
    if tracking.is_empty() {
        anyhow::bail!("informe tracking ou id");
    }

    lookup_by_tracking(api, &tracking, request.deep).await
}

/// Fetch one order and resolve its shipping total and tracking code.
/// Upstream fetch failure propagates untouched; an empty record is
/// "not found".
pub async fn lookup_by_id(api: &impl WbuyApi, order_id: &str) -> Result<OrderLookupResponse> {
    let mut tried = Vec::new();
    let raw = api.fetch_order_detail(order_id, &mut tried).await?;

    let record = json_scan::unwrap_first(&raw);
    if record.as_object().map_or(true, |o| o.is_empty()) {
        anyhow::bail!("order {} not found (tried {} URLs)", order_id, tried.len());
    }

    let summary = order_processor::summarize_order(Some(order_id), &raw);
    Ok(respond(summary, tried))
}

/// Find an order by tracking code.
///
/// Fast path first: the upstream's indexed search sometimes knows the
/// code. When it misses and `deep` is set, sweep every status bucket a few
/// pages at a time and compare each candidate's resolved tracking. A miss
/// is an empty summary, not an error: "not shipped yet" is a valid state.
pub async fn lookup_by_tracking(
    api: &impl WbuyApi,
    tracking: &str,
    deep: bool,
) -> Result<OrderLookupResponse> {
    let mut tried = Vec::new();

    match api.search_orders(tracking, SWEEP_PAGE_LIMIT, &mut tried).await {
        Ok(raw) => {
            let first = json_scan::unwrap_first(&raw);
            let order_id = extract_order_id(first);
            if !order_id.is_empty() {
                match api.fetch_order_detail(&order_id, &mut tried).await {
                    Ok(detail) => {
                        let summary = order_processor::summarize_order(Some(&order_id), &detail);
                        return Ok(respond(summary, tried));
                    }
                    Err(e) => {
                        // the search index can point at an order the detail
                        // endpoint refuses; keep going instead of aborting
                        tracing::warn!("fast path detail fetch failed for {}: {}", order_id, e);
                    }
                }
            }
        }
        Err(e) => {
            tracing::warn!("tracking search failed for {}: {}", tracking, e);
        }
    }

    if !deep {
        return Ok(respond(OrderSummary::not_found(), tried));
    }

    for status in SWEEP_STATUSES {
        for page in 1..=SWEEP_MAX_PAGES {
            let raw = match api
                .fetch_orders_page(status, page, SWEEP_PAGE_LIMIT, &mut tried)
                .await
            {
                Ok(raw) => raw,
                Err(e) => {
                    // best-effort sweep: a bad page must not kill the search
                    tracing::warn!("sweep page failed (status {}, page {}): {}", status, page, e);
                    continue;
                }
            };

            let items = json_scan::unwrap_list(&raw);
            if items.is_empty() {
                break;
            }

            for item in items {
                let order_id = extract_order_id(item);
                if order_id.is_empty() {
                    continue;
                }
                let detail = match api.fetch_order_detail(&order_id, &mut tried).await {
                    Ok(detail) => detail,
                    Err(_) => continue,
                };
                let record = json_scan::unwrap_first(&detail);
                if order_processor::resolve_tracking(record).as_deref() == Some(tracking) {
                    let summary = OrderSummary {
                        order_id: Some(order_id),
                        shipping_total: order_processor::resolve_shipping_total(record),
                        tracking: Some(tracking.to_string()),
                    };
                    return Ok(respond(summary, tried));
                }
            }
        }
    }

    Ok(respond(OrderSummary::not_found(), tried))
}

/// Order IDs arrive as strings or numbers depending on the endpoint.
fn extract_order_id(record: &Value) -> String {
    let candidate = record.get("id").or_else(|| record.get("order_id"));
    match candidate {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn respond(summary: OrderSummary, tried: Vec<String>) -> OrderLookupResponse {
    OrderLookupResponse {
        shipping_total_reais: summary.shipping_total_reais(),
        summary,
        tried,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;

    use crate::shared::wbuy::StockPage;

    /// Canned upstream: order details by id, one optional search hit and
    /// sweep pages keyed by (status, page).
    #[derive(Default)]
    struct FakeApi {
        orders: HashMap<String, Value>,
        search_hit: Option<Value>,
        pages: HashMap<(u8, u32), Value>,
    }

    #[async_trait]
    impl WbuyApi for FakeApi {
        async fn fetch_order_detail(
            &self,
            order_id: &str,
            tried: &mut Vec<String>,
        ) -> Result<Value> {
            tried.push(format!("fake:/order/{order_id}"));
            self.orders
                .get(order_id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("upstream 404"))
        }

        async fn search_orders(
            &self,
            query: &str,
            _limit: u32,
            tried: &mut Vec<String>,
        ) -> Result<Value> {
            tried.push(format!("fake:/order?search={query}"));
            Ok(self.search_hit.clone().unwrap_or_else(|| json!({"data": []})))
        }

        async fn fetch_orders_page(
            &self,
            status: u8,
            page: u32,
            _limit: u32,
            tried: &mut Vec<String>,
        ) -> Result<Value> {
            tried.push(format!("fake:/order?page={page}&status={status}"));
            Ok(self
                .pages
                .get(&(status, page))
                .cloned()
                .unwrap_or_else(|| json!({"data": []})))
        }

        async fn fetch_stock_page(&self, _offset: u64, _page_size: u64) -> Result<StockPage> {
            Ok(StockPage {
                rows: vec![],
                total: Some(0),
            })
        }
    }

    fn detail(frete: &str, rastreio: &str) -> Value {
        json!({"data": {"valor_frete": frete, "frete": {"rastreio": rastreio}}})
    }

    #[tokio::test]
    async fn test_lookup_by_id_resolves_fields() {
        let mut api = FakeApi::default();
        api.orders.insert("42".into(), detail("21,74", " am123456789br "));

        let response = lookup_by_id(&api, "42").await.unwrap();
        assert_eq!(response.summary.order_id.as_deref(), Some("42"));
        assert_eq!(response.summary.shipping_total, 2174);
        assert_eq!(response.shipping_total_reais, 21.74);
        assert_eq!(response.summary.tracking.as_deref(), Some("AM123456789BR"));
        assert_eq!(response.tried.len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_by_id_fetch_failure_propagates() {
        let api = FakeApi::default();
        assert!(lookup_by_id(&api, "missing").await.is_err());
    }

    #[tokio::test]
    async fn test_tracking_fast_path_uses_search_hit() {
        let mut api = FakeApi::default();
        api.search_hit = Some(json!({"data": [{"id": 77}]}));
        api.orders.insert("77".into(), detail("10,00", "BR123"));

        let request = OrderLookupRequest::by_tracking("br123", false);
        let response = lookup(&api, &request).await.unwrap();
        assert_eq!(response.summary.order_id.as_deref(), Some("77"));
        assert_eq!(response.summary.shipping_total, 1000);
    }

    #[tokio::test]
    async fn test_tracking_miss_without_deep_is_not_found() {
        let api = FakeApi::default();
        let response = lookup_by_tracking(&api, "NADA123", false).await.unwrap();
        assert_eq!(response.summary, OrderSummary::not_found());
        assert_eq!(response.shipping_total_reais, 0.0);
    }

    #[tokio::test]
    async fn test_deep_sweep_finds_match_on_later_page() {
        let mut api = FakeApi::default();
        api.pages.insert(
            (2, 1),
            json!({"data": [{"id": "900"}, {"id": "901"}]}),
        );
        api.orders.insert("900".into(), detail("5,00", "XX000"));
        api.orders.insert("901".into(), detail("35,90", "dd444444444br"));

        let response = lookup_by_tracking(&api, "DD444444444BR", true).await.unwrap();
        assert_eq!(response.summary.order_id.as_deref(), Some("901"));
        assert_eq!(response.summary.shipping_total, 3590);
        assert_eq!(response.summary.tracking.as_deref(), Some("DD444444444BR"));
    }

    #[tokio::test]
    async fn test_fast_path_detail_failure_falls_back_to_deep_sweep() {
        let mut api = FakeApi::default();
        // search knows order 77 but its detail endpoint errors out;
        // the sweep still holds the real match
        api.search_hit = Some(json!({"data": [{"id": 77}]}));
        api.pages.insert((1, 1), json!({"data": [{"id": "78"}]}));
        api.orders.insert("78".into(), detail("12,50", "BR123"));

        let response = lookup_by_tracking(&api, "BR123", true).await.unwrap();
        assert_eq!(response.summary.order_id.as_deref(), Some("78"));
        assert_eq!(response.summary.shipping_total, 1250);
    }

    #[tokio::test]
    async fn test_fast_path_detail_failure_without_deep_is_not_found() {
        let mut api = FakeApi::default();
        api.search_hit = Some(json!({"data": [{"id": 77}]}));

        let response = lookup_by_tracking(&api, "BR123", false).await.unwrap();
        assert_eq!(response.summary, OrderSummary::not_found());
    }

    #[tokio::test]
    async fn test_deep_sweep_skips_broken_details() {
        let mut api = FakeApi::default();
        // 900 has no detail record at all; the sweep must move on
        api.pages.insert((1, 1), json!({"data": [{"id": "900"}, {"id": "901"}]}));
        api.orders.insert("901".into(), detail("8,00", "EE555"));

        let response = lookup_by_tracking(&api, "EE555", true).await.unwrap();
        assert_eq!(response.summary.order_id.as_deref(), Some("901"));
    }

    #[tokio::test]
    async fn test_lookup_requires_some_query() {
        let api = FakeApi::default();
        let request = OrderLookupRequest {
            order_id: None,
            tracking: Some("   ".into()),
            deep: false,
        };
        assert!(lookup(&api, &request).await.is_err());
    }
}
