pub mod aggregate;

pub use aggregate::{StockItem, SEM_COR, SEM_PRODUTO, SEM_TAMANHO};
