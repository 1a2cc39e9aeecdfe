//! Internal tile request assembled from a client request.

use crate::format::MimeType;
use crate::srs::Srs;

use super::quadkey::TileCoordinate;

/// A resolved request for a single tile.
///
/// Built once per inbound request by a service adapter and handed to the
/// layer for lookup. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRequest {
    /// Tile position in the pyramid
    pub coordinate: TileCoordinate,

    /// MIME type the tile should be served as
    pub mime_type: MimeType,

    /// Spatial reference of the tile grid
    pub srs: Srs,
}

impl TileRequest {
    /// Create a new tile request.
    pub fn new(coordinate: TileCoordinate, mime_type: MimeType, srs: Srs) -> Self {
        Self {
            coordinate,
            mime_type,
            srs,
        }
    }

    /// Tile coordinate as an `[x, y, zoom]` grid location.
    pub fn grid_location(&self) -> [u32; 3] {
        [
            self.coordinate.x(),
            self.coordinate.y(),
            u32::from(self.coordinate.zoom()),
        ]
    }
}
