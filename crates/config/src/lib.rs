//! Configuration management for the storymap application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults).
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`polling`]: Wireframe poll timing
//! - [`board`]: Board layout and interaction tuning
//! - [`auth`]: Session token resolution
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following
//! priority (highest to lowest):
//!
//! 1. Environment variables (`STORYMAP_*`)
//! 2. Local config (`./storymap.json5` or `./storymap.json`)
//! 3. User config (`~/.config/storymap/config.json5` or `.json`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use storymap_config::Config;
//!
//! # async fn example() -> storymap_config::Result<()> {
//! let config = Config::load().await?;
//!
//! if let Some(url) = &config.api.base_url {
//!     println!("Backend: {url}");
//! } else {
//!     println!("No backend configured; using the sample project");
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod board;
pub mod config;
pub mod error;
pub mod persistence;
pub mod polling;

// Re-export primary types at crate root for convenience
pub use board::BoardConfig;
pub use config::{ApiConfig, Config};
pub use error::{ConfigError, Result};
pub use polling::WireframePolling;
