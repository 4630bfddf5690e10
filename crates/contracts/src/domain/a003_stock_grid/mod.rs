pub mod aggregate;

pub use aggregate::{ColorGrade, ProductGrade, StockGrid};
