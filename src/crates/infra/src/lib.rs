pub mod repository;

pub mod id_generator;

pub mod config;
pub use config::{ServerConfig, StatsConfig};
