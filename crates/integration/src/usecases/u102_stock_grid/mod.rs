pub mod executor;
pub mod grid_builder;
pub mod processors;
