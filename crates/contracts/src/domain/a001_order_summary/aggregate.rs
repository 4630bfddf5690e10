use serde::{Deserialize, Serialize};

/// Resumo de um pedido WBuy devolvido ao chamador.
///
/// Produzido uma vez por consulta a partir do JSON bruto do upstream;
/// imutável depois de criado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// ID do pedido no upstream; `None` quando a busca não encontrou nada
    pub order_id: Option<String>,

    /// Frete total em centavos, nunca negativo
    pub shipping_total: i64,

    /// Código de rastreio, aparado e em maiúsculas;
    /// `None` significa "ainda não postado", não é erro
    pub tracking: Option<String>,
}

impl OrderSummary {
    /// Resultado vazio das rotas de busca: the upstream was reachable but
    /// no order matched the query.
    pub fn not_found() -> Self {
        Self {
            order_id: None,
            shipping_total: 0,
            tracking: None,
        }
    }

    /// Frete em reais, só para exibição (todo o cálculo fica em centavos)
    pub fn shipping_total_reais(&self) -> f64 {
        self.shipping_total as f64 / 100.0
    }
}
