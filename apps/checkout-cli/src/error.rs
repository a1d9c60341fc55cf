//! # CLI Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CLI Error Categories                              │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │     Pricing     │  │     Input / Output      │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  ConfigParse    │  │  Core           │  │  Io                     │ │
//! │  │  ConfigNotFound │  │  (CoreError)    │  │  Json                   │ │
//! │  │                 │  │                 │  │  Usage                  │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use checkout_core::CoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Price list isn't valid TOML or doesn't match the expected shape.
    #[error("Failed to parse price list: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A price list path was given explicitly but doesn't exist.
    #[error("Price list not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    // =========================================================================
    // Pricing Errors
    // =========================================================================
    /// Catalog or rules rejected by checkout-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    // =========================================================================
    // Input / Output Errors
    // =========================================================================
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode receipt: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),
}
