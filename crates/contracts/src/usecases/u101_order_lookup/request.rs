use serde::{Deserialize, Serialize};

/// Consulta de um pedido: por ID do upstream ou por código de rastreio.
///
/// `order_id` tem precedência quando os dois vêm preenchidos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLookupRequest {
    /// ID do pedido no upstream
    #[serde(default)]
    pub order_id: Option<String>,

    /// Código de rastreio (ex.: "AM123456789BR"); comparado sem distinção
    /// de maiúsculas
    #[serde(default)]
    pub tracking: Option<String>,

    /// Quando a busca indexada não acha o rastreio, varrer todos os status
    /// de pedido página a página (lento, porém robusto)
    #[serde(default)]
    pub deep: bool,
}

impl OrderLookupRequest {
    pub fn by_id(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            tracking: None,
            deep: false,
        }
    }

    pub fn by_tracking(tracking: impl Into<String>, deep: bool) -> Self {
        Self {
            order_id: None,
            tracking: Some(tracking.into()),
            deep,
        }
    }
}
