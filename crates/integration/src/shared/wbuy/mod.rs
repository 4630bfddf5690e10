use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use thiserror::Error;

use super::config::WbuyConfig;
use super::json_scan;
use super::money;

/// Falhas de fetch no upstream. O core não faz retry; quem quiser
/// repetir a chamada decide isso na camada HTTP de fora.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("WBuy API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse WBuy API JSON: {source}. Response: {preview}")]
    Decode {
        source: serde_json::Error,
        preview: String,
    },
}

/// Uma página da listagem de estoque.
#[derive(Debug, Clone)]
pub struct StockPage {
    pub rows: Vec<Value>,

    /// Total anunciado pelo upstream, quando ele anuncia algum
    pub total: Option<u64>,
}

/// Seam entre executores e o upstream WBuy; em produção é o
/// [`WbuyApiClient`], nos testes um stub com páginas enlatadas.
///
/// Todo método de listagem/consulta registra as URLs tentadas em `tried`
/// para o rastro de debug da resposta.
#[async_trait]
pub trait WbuyApi {
    /// Detalhe de um pedido, com fallback de endpoint (ver
    /// [`WbuyApiClient::fetch_order_detail`])
    async fn fetch_order_detail(&self, order_id: &str, tried: &mut Vec<String>) -> Result<Value>;

    /// Busca indexada do upstream (`search=`)
    async fn search_orders(
        &self,
        query: &str,
        limit: u32,
        tried: &mut Vec<String>,
    ) -> Result<Value>;

    /// Uma página da listagem de pedidos de um status, para a varredura
    /// profunda por rastreio
    async fn fetch_orders_page(
        &self,
        status: u8,
        page: u32,
        limit: u32,
        tried: &mut Vec<String>,
    ) -> Result<Value>;

    /// Uma página da listagem de produtos ativos
    async fn fetch_stock_page(&self, offset: u64, page_size: u64) -> Result<StockPage>;
}

/// HTTP client for the WBuy REST API.
pub struct WbuyApiClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl WbuyApiClient {
    pub fn new(config: &WbuyConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.trim().to_string(),
        }
    }

    /// Append the request trail to a plain log file next to the process,
    /// one line per event.
    fn log_to_file(&self, message: &str) {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open("wbuy_api_requests.log")
        {
            let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {}", timestamp, message);
        }
    }

    /// Cheap credential/reachability check: one order, status only.
    pub async fn ping(&self) -> Result<bool> {
        if self.token.is_empty() {
            return Ok(false);
        }
        let url = format!("{}/order?limit=1", self.api_url);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    async fn get_json(&self, url: &str) -> Result<Value, UpstreamError> {
        self.log_to_file(&format!(
            "=== REQUEST ===\nGET {}\nAuthorization: Bearer ****",
            url
        ));

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let status = response.status();
        self.log_to_file(&format!("Response status: {}", status));

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            self.log_to_file(&format!("ERROR Response body:\n{}", body));
            tracing::error!("WBuy API request failed: {} {}", status, body);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                let preview: String = body.chars().take(500).collect();
                self.log_to_file(&format!("Failed to parse JSON: {}", e));
                tracing::error!("Failed to parse WBuy API response: {}", e);
                Err(UpstreamError::Decode { source: e, preview })
            }
        }
    }
}

#[async_trait]
impl WbuyApi for WbuyApiClient {
    /// `GET /order/{id}` first; some accounts only answer on the list
    /// endpoint, so fall back to `GET /order?id={id}&limit=1&complete=1`
    /// when the direct route fails or comes back empty.
    async fn fetch_order_detail(&self, order_id: &str, tried: &mut Vec<String>) -> Result<Value> {
        let url = format!("{}/order/{}", self.api_url, urlencoding::encode(order_id));
        tried.push(url.clone());
        match self.get_json(&url).await {
            Ok(raw) => {
                let record = json_scan::unwrap_first(&raw);
                if record.as_object().is_some_and(|o| !o.is_empty()) {
                    return Ok(raw);
                }
                tracing::debug!("order {} detail came back empty, trying list route", order_id);
            }
            Err(e) => {
                tracing::warn!("order {} detail endpoint failed: {}", order_id, e);
            }
        }

        let url = format!(
            "{}/order?id={}&limit=1&complete=1",
            self.api_url,
            urlencoding::encode(order_id)
        );
        tried.push(url.clone());
        Ok(self.get_json(&url).await?)
    }

    async fn search_orders(
        &self,
        query: &str,
        limit: u32,
        tried: &mut Vec<String>,
    ) -> Result<Value> {
        let url = format!(
            "{}/order?limit={}&complete=1&search={}",
            self.api_url,
            limit,
            urlencoding::encode(query)
        );
        tried.push(url.clone());
        Ok(self.get_json(&url).await?)
    }

    async fn fetch_orders_page(
        &self,
        status: u8,
        page: u32,
        limit: u32,
        tried: &mut Vec<String>,
    ) -> Result<Value> {
        let url = format!(
            "{}/order?limit={}&complete=1&page={}&status={}",
            self.api_url, limit, page, status
        );
        tried.push(url.clone());
        Ok(self.get_json(&url).await?)
    }

    async fn fetch_stock_page(&self, offset: u64, page_size: u64) -> Result<StockPage> {
        let url = format!(
            "{}/product/?ativo=1&limit={}&offset={}",
            self.api_url, page_size, offset
        );
        let raw = self.get_json(&url).await?;

        let rows = json_scan::unwrap_list(&raw).to_vec();
        let total = ["total", "total_count", "count"]
            .iter()
            .find_map(|key| raw.get(*key))
            .map(money::parse_quantity)
            .filter(|n| *n >= 0)
            .map(|n| n as u64);

        Ok(StockPage { rows, total })
    }
}
