//! Virtual Earth quad-key decoding.
//!
//! A quad key addresses a tile by recursively splitting the map into four
//! quadrants, one character per zoom level, most significant first:
//!
//! ```text
//! ┌───┬───┐
//! │ 0 │ 1 │
//! ├───┼───┤
//! │ 2 │ 3 │
//! └───┴───┘
//! ```
//!
//! Decoding accumulates the corner of the addressed tile's bounding box. The
//! resulting `y` runs in the opposite direction from Bing's own tile rows: key
//! `"0"` lands on `y = 1` and key `"2"` on `y = 0`. The coordinate is returned
//! exactly as derived; callers that index their grid from the other edge use
//! [`TileCoordinate::flip_y`].

use std::fmt;

use crate::error::QuadKeyError;

/// Deepest zoom level whose tile indices fit in a `u32`.
pub const MAX_ZOOM_LEVEL: u8 = 32;

// =============================================================================
// Tile Coordinate
// =============================================================================

/// Position of a tile in the tile pyramid.
///
/// Always satisfies `x < 2^zoom` and `y < 2^zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoordinate {
    x: u32,
    y: u32,
    zoom: u8,
}

impl TileCoordinate {
    /// Create a coordinate, returning `None` if it lies outside the grid at
    /// `zoom` or `zoom` exceeds [`MAX_ZOOM_LEVEL`].
    pub fn new(x: u32, y: u32, zoom: u8) -> Option<Self> {
        if zoom > MAX_ZOOM_LEVEL {
            return None;
        }
        let tiles = tiles_per_axis(zoom);
        if u64::from(x) >= tiles || u64::from(y) >= tiles {
            return None;
        }
        Some(Self { x, y, zoom })
    }

    /// Tile column.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Tile row, in the axis direction produced by [`decode`].
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Zoom level (number of quad-key characters).
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Number of tiles along each axis at this zoom level.
    pub fn tiles_per_axis(&self) -> u64 {
        tiles_per_axis(self.zoom)
    }

    /// Mirror the row index across the horizontal center line.
    ///
    /// Maps `y` to `2^zoom - 1 - y`. Applying it twice yields the original
    /// coordinate.
    pub fn flip_y(&self) -> Self {
        let max_row = self.tiles_per_axis() - 1;
        Self {
            x: self.x,
            y: (max_row - u64::from(self.y)) as u32,
            zoom: self.zoom,
        }
    }

    /// The tile one level up that contains this one, or `None` at zoom 0.
    pub fn parent(&self) -> Option<Self> {
        if self.zoom == 0 {
            return None;
        }
        Some(Self {
            x: self.x >> 1,
            y: self.y >> 1,
            zoom: self.zoom - 1,
        })
    }
}

impl fmt::Display for TileCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.zoom)
    }
}

fn tiles_per_axis(zoom: u8) -> u64 {
    1u64 << zoom
}

// =============================================================================
// Decoder
// =============================================================================

/// Decode a quad key into the tile coordinate it addresses.
///
/// The zoom level is the key length. Each character halves the remaining
/// extent and moves the accumulated corner into the chosen quadrant. The empty
/// key addresses the single tile at zoom 0.
///
/// # Errors
///
/// Returns [`QuadKeyError::InvalidCharacter`] for the first character outside
/// `0`-`3`, and [`QuadKeyError::ZoomTooDeep`] for keys longer than
/// [`MAX_ZOOM_LEVEL`]. No coordinate is produced in either case.
///
/// # Example
///
/// ```
/// use tile_gateway::tile::decode;
///
/// let coord = decode("12").unwrap();
/// assert_eq!((coord.x(), coord.y(), coord.zoom()), (2, 2, 2));
///
/// assert!(decode("0X").is_err());
/// ```
pub fn decode(quad_key: &str) -> Result<TileCoordinate, QuadKeyError> {
    let zoom = quad_key.chars().count();
    if zoom > usize::from(MAX_ZOOM_LEVEL) {
        return Err(QuadKeyError::ZoomTooDeep {
            zoom,
            max: MAX_ZOOM_LEVEL,
        });
    }

    let mut extent = 1u64 << zoom;
    let mut x = 0u64;
    let mut y = 0u64;

    for (position, character) in quad_key.chars().enumerate() {
        extent /= 2;

        match character {
            '0' => y += extent,
            '1' => {
                x += extent;
                y += extent;
            }
            '2' => {}
            '3' => x += extent,
            _ => {
                return Err(QuadKeyError::InvalidCharacter {
                    character,
                    position,
                })
            }
        }
    }

    // Bounded by 2^zoom - 1 <= u32::MAX
    Ok(TileCoordinate {
        x: x as u32,
        y: y as u32,
        zoom: zoom as u8,
    })
}

// =============================================================================
// Tests
// =============================================================================
