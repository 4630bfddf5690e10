pub mod a001_order_summary;
pub mod a002_stock_item;
pub mod a003_stock_grid;
