//! # Core Module
//!
//! Shared settings used by the loader.
//!
//! ## Organization
//!
//! - **Config**: loader configuration and its file formats

pub mod config;

pub use config::{
    CollisionLoaderConfig,
    StaticMeshMode,
    Config,
    ConfigError,
};
