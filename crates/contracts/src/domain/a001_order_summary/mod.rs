pub mod aggregate;

pub use aggregate::OrderSummary;
