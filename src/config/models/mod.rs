//! Configuration model structs

pub mod server;
pub mod storage;

pub use server::{CorsConfig, ServerConfig};
pub use storage::{DatabaseConfig, StorageConfig};
