use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Grade de disponibilidade produto → cor → tamanho, montada uma vez por
/// varredura de catálogo e descartada em seguida (nada é persistido).
///
/// A ordem de iteração de produtos, cores e tamanhos é a ordem de primeira
/// aparição na listagem do upstream; quem precisar de ordenação estável
/// ordena depois.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockGrid {
    pub produtos: IndexMap<String, ProductGrade>,
}

/// Todas as cores de um produto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductGrade {
    pub cores: IndexMap<String, ColorGrade>,
}

/// Grade de tamanhos de um par (produto, cor).
///
/// Invariante: `desgradiado == !faltando.is_empty()`, e ambos só são
/// não-triviais quando o chamador informou a grade esperada de tamanhos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorGrade {
    /// Quantidade total por tamanho (somada entre SKUs duplicados)
    pub tamanhos: IndexMap<String, i64>,

    /// Grade incompleta: algum tamanho esperado está zerado
    pub desgradiado: bool,

    /// Tamanhos esperados com quantidade <= 0, na ordem da grade esperada
    pub faltando: Vec<String>,
}
