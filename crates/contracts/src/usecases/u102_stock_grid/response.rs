use serde::{Deserialize, Serialize};

use crate::domain::a003_stock_grid::StockGrid;

/// Resultado da varredura de catálogo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockGridResponse {
    pub grid: StockGrid,

    /// Páginas buscadas no upstream
    pub pages_fetched: u64,

    /// Linhas brutas vistas na listagem
    pub rows_seen: u64,

    /// Linhas que passaram nos filtros ativo/disponível/quantidade mínima
    pub rows_kept: u64,

    pub generated_at: chrono::DateTime<chrono::Utc>,
}
