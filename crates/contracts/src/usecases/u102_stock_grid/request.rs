use serde::{Deserialize, Serialize};

/// Parâmetros da varredura de catálogo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockGridRequest {
    /// Grade esperada de tamanhos (ex.: ["P", "M", "G", "GG"]).
    /// Vazia = sem checagem de completude, nenhum par fica "desgradiado".
    #[serde(default)]
    pub expected_sizes: Vec<String>,

    /// Quantidade mínima para a linha entrar na grade (aplicada depois dos
    /// filtros ativo/disponível, antes da agregação)
    #[serde(default)]
    pub min_quantity: i64,

    /// Tamanho de página da listagem do upstream
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Pausa fixa entre páginas, em milissegundos, para não estourar o
    /// rate-limit do upstream (0 = sem pausa)
    #[serde(default)]
    pub page_delay_ms: u64,
}

fn default_page_size() -> u64 {
    100
}

impl Default for StockGridRequest {
    fn default() -> Self {
        Self {
            expected_sizes: Vec::new(),
            min_quantity: 0,
            page_size: default_page_size(),
            page_delay_ms: 0,
        }
    }
}
