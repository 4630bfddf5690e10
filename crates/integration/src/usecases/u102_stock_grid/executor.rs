use anyhow::Result;
use contracts::domain::a002_stock_item::StockItem;
use contracts::usecases::u102_stock_grid::{StockGridRequest, StockGridResponse};

use super::grid_builder;
use super::processors::stock as stock_processor;
use crate::shared::wbuy::WbuyApi;

/// Walk the whole paginated catalog and fold it into the availability
/// grid.
///
/// Pagination stops at `offset >= total` when the upstream advertises a
/// total, or at the first short/empty page otherwise. Rows are filtered
/// (ativo, disponível, quantidade mínima) before aggregation; the grid
/// builder itself never filters. Fetch failure aborts and propagates; the
/// core never retries.
pub async fn build_catalog_grid(
    api: &impl WbuyApi,
    request: &StockGridRequest,
) -> Result<StockGridResponse> {
    let page_size = request.page_size.max(1);
    let mut offset = 0u64;
    let mut pages_fetched = 0u64;
    let mut rows_seen = 0u64;
    let mut kept: Vec<StockItem> = Vec::new();

    loop {
        let page = api.fetch_stock_page(offset, page_size).await?;
        if page.rows.is_empty() {
            break;
        }

        pages_fetched += 1;
        let batch = page.rows.len() as u64;
        rows_seen += batch;

        for raw in &page.rows {
            let item = stock_processor::resolve_stock_item(raw);
            if item.active && item.sellable && item.quantity >= request.min_quantity {
                kept.push(item);
            }
        }

        offset += page_size;
        match page.total {
            Some(total) if offset >= total => break,
            None if batch < page_size => break,
            _ => {}
        }

        if request.page_delay_ms > 0 {
            // upstream rate-limit courtesy
            tokio::time::sleep(std::time::Duration::from_millis(request.page_delay_ms)).await;
        }
    }

    tracing::info!(
        "stock scan finished: {} pages, {} rows seen, {} kept",
        pages_fetched,
        rows_seen,
        kept.len()
    );

    Ok(StockGridResponse {
        rows_kept: kept.len() as u64,
        grid: grid_builder::build_grid(&kept, &request.expected_sizes),
        pages_fetched,
        rows_seen,
        generated_at: chrono::Utc::now(),
    })
}
