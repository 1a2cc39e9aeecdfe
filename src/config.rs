//! Configuration for the `tile-gateway` command.
//!
//! The command is an operator tool for checking how Virtual Earth requests
//! resolve, without going through the HTTP dispatch layer.
//!
//! # Example
//!
//! ```text
//! tile-gateway decode 0313
//! tile-gateway decode 0313 --flip-y
//! tile-gateway resolve 'layers=roads&quadkey=0313&format=image/jpeg' --json
//! ```
//!
//! # Environment Variables
//!
//! - `TILE_GATEWAY_LAYER` - Layer name used when the query has none (default: default)
//! - `TILE_GATEWAY_DEFAULT_FORMAT` - Layer default format (default: image/png)

use clap::{Args, Parser, Subcommand};

use crate::format::MimeType;

// =============================================================================
// Default Values
// =============================================================================

/// Default layer name.
pub const DEFAULT_LAYER: &str = "default";

/// Default format served by the layer.
pub const DEFAULT_FORMAT: &str = "image/png";

// =============================================================================
// CLI Arguments
// =============================================================================

/// Tile Gateway - Virtual Earth quad-key service tools.
#[derive(Parser, Debug, Clone)]
#[command(name = "tile-gateway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Decode a quad key into x, y and zoom.
    Decode(DecodeConfig),

    /// Resolve a raw query string into a tile request.
    Resolve(ResolveConfig),
}

/// Arguments for `decode`.
#[derive(Args, Debug, Clone)]
pub struct DecodeConfig {
    /// Quad key to decode (characters 0-3).
    #[arg(allow_hyphen_values = true)]
    pub quad_key: String,

    /// Mirror the row index (y' = 2^zoom - 1 - y).
    #[arg(long, default_value_t = false)]
    pub flip_y: bool,
}

/// Arguments for `resolve`.
#[derive(Args, Debug, Clone)]
pub struct ResolveConfig {
    /// Query string as sent by the client (e.g. "layers=roads&quadkey=0313").
    pub query: String,

    /// Layer to resolve against when the query has no `layers` parameter.
    #[arg(long, default_value = DEFAULT_LAYER, env = "TILE_GATEWAY_LAYER")]
    pub layer: String,

    /// Format the layer serves when the query has no `format` parameter.
    #[arg(long, default_value = DEFAULT_FORMAT, env = "TILE_GATEWAY_DEFAULT_FORMAT")]
    pub default_format: String,

    /// Print the result as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl ResolveConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.layer.trim().is_empty() {
            return Err("Layer name must not be empty. Set --layer or TILE_GATEWAY_LAYER".to_string());
        }

        self.default_mime_type()?;

        Ok(())
    }

    /// The layer's default MIME type.
    pub fn default_mime_type(&self) -> Result<MimeType, String> {
        MimeType::from_format(&self.default_format).map_err(|e| {
            format!(
                "Invalid default format: {}. Supported formats: {}",
                e,
                supported_formats()
            )
        })
    }
}

fn supported_formats() -> String {
    MimeType::ALL
        .iter()
        .map(|mime| mime.format())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Tests
// =============================================================================
