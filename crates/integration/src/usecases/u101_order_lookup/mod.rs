pub mod executor;
pub mod processors;
