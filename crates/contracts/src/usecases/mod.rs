pub mod common;
pub mod u101_order_lookup;
pub mod u102_stock_grid;
