//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → HandlerConfig (validated, immutable)
//!     → consumed once at cold start by main.rs
//! ```
//!
//! # Design Decisions
//! - Config is read once per execution environment; no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{FetchConfig, HandlerConfig, LogFormat, ObservabilityConfig};
