//! Tile addressing.
//!
//! This module holds the gateway's internal tile representation and the
//! decoder that maps Virtual Earth quad keys onto it.
//!
//! # Components
//!
//! - [`decode`]: Quad key → [`TileCoordinate`], the only decoding entry point
//! - [`TileCoordinate`]: `(x, y, zoom)` position, always inside the grid
//! - [`TileRequest`]: Coordinate plus MIME type and spatial reference
//!
//! # Example
//!
//! ```
//! use tile_gateway::format::MimeType;
//! use tile_gateway::srs::Srs;
//! use tile_gateway::tile::{decode, TileRequest};
//!
//! let coordinate = decode("0313").unwrap();
//! let request = TileRequest::new(coordinate, MimeType::Png, Srs::web_mercator());
//!
//! assert_eq!(request.grid_location(), [7, 10, 4]);
//! ```

mod quadkey;
mod request;

pub use quadkey::{decode, TileCoordinate, MAX_ZOOM_LEVEL};
pub use request::TileRequest;
