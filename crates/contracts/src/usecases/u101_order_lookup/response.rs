use serde::{Deserialize, Serialize};

use crate::domain::a001_order_summary::OrderSummary;

/// Resultado da consulta de pedido.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLookupResponse {
    #[serde(flatten)]
    pub summary: OrderSummary,

    /// Frete em reais, espelho de `shipping_total` para exibição
    pub shipping_total_reais: f64,

    /// URLs tentadas contra o upstream, na ordem, para troubleshooting
    pub tried: Vec<String>,
}
