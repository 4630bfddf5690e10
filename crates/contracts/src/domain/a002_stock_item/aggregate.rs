use serde::{Deserialize, Serialize};

/// Placeholder para produto sem nome resolvível no upstream.
///
/// Campos ausentes são um problema real de qualidade de dados do WBuy,
/// não um erro: o placeholder propaga o buraco de forma visível em vez
/// de derrubar a linha.
pub const SEM_PRODUTO: &str = "SEM_PRODUTO";

/// Placeholder para variação/tamanho ausente
pub const SEM_TAMANHO: &str = "SEM_TAMANHO";

/// Placeholder para cor ausente
pub const SEM_COR: &str = "SEM_COR";

/// Linha de estoque normalizada a partir de um item bruto do catálogo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    /// SKU / código ERP do item ("" quando o upstream não informa nenhum)
    pub sku: String,

    /// Nome do produto ou [`SEM_PRODUTO`]
    pub product_name: String,

    /// Tamanho da variação ou [`SEM_TAMANHO`]
    pub size: String,

    /// Cor ou [`SEM_COR`]
    pub color: String,

    /// Quantidade em estoque (0 quando ausente ou ilegível)
    pub quantity: i64,

    /// Flag "ativo" do upstream (codificada lá como string "1")
    pub active: bool,

    /// Flag "disponível para venda" do upstream
    pub sellable: bool,
}
