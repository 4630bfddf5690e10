pub mod config;
pub mod json_scan;
pub mod money;
pub mod wbuy;
