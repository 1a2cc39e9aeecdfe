//! # Tile Gateway
//!
//! The Virtual Earth service of a tile-caching gateway.
//!
//! Virtual Earth (Bing Maps) clients address tiles with quad keys, strings
//! over `0`-`3` that pick one quadrant per zoom level. This crate decodes
//! those keys into the gateway's internal `(x, y, zoom)` tile coordinates and
//! turns a client's raw request parameters into a fully resolved tile request
//! (coordinate, output MIME type, spatial reference).
//!
//! ## Architecture
//!
//! - [`tile`] - Quad-key decoder, tile coordinates and tile requests
//! - [`service`] - Service handshake, parameter sources and the `ve` service
//! - [`mod@format`] - MIME types and format negotiation
//! - [`layer`] - Tile layer handles
//! - [`srs`] - Spatial reference systems
//! - [`config`] - CLI configuration for the `tile-gateway` binary
//!
//! ## Example
//!
//! ```rust
//! use tile_gateway::{MimeType, QueryParams, StaticTileLayer, VeService};
//!
//! let service = VeService::new();
//! let layer = StaticTileLayer::new("roads", MimeType::Png);
//!
//! let params = QueryParams::parse("layers=roads&quadkey=0313");
//! let request = service.build_tile_request(&layer, &params).unwrap();
//!
//! assert_eq!(request.grid_location(), [7, 10, 4]);
//! assert_eq!(request.mime_type, MimeType::Png);
//! assert_eq!(request.srs.to_string(), "EPSG:900913");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod layer;
pub mod service;
pub mod srs;
pub mod tile;

// Re-export commonly used types
pub use config::{Cli, Command, DecodeConfig, ResolveConfig};
pub use error::{MimeError, QuadKeyError, ServiceError};
pub use format::{FormatResolver, MimeType, StandardFormats};
pub use layer::{StaticTileLayer, TileLayer};
pub use service::{
    ErrorResponse, ParameterSource, QueryParams, Service, ServiceRequest, VeService,
    FORMAT_PARAM, LAYERS_PARAM, QUAD_KEY_PARAM, SERVICE_VE,
};
pub use srs::Srs;
pub use tile::{decode, TileCoordinate, TileRequest, MAX_ZOOM_LEVEL};
