//! Spatial reference systems.

use std::fmt;

/// Spatial reference system identified by its EPSG code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srs {
    epsg: u32,
}

impl Srs {
    /// Legacy unofficial code for spherical Web Mercator.
    pub const EPSG_900913: u32 = 900913;

    /// Official code for spherical Web Mercator.
    pub const EPSG_3857: u32 = 3857;

    /// WGS 84 geographic coordinates.
    pub const EPSG_4326: u32 = 4326;

    /// Create a spatial reference from an EPSG code.
    pub const fn new(epsg: u32) -> Self {
        Self { epsg }
    }

    /// Web Mercator, under the code the gateway's tile grids use (900913).
    pub const fn web_mercator() -> Self {
        Self::new(Self::EPSG_900913)
    }

    /// The EPSG code.
    pub const fn code(&self) -> u32 {
        self.epsg
    }

    /// True for both Web Mercator codes, 900913 and 3857.
    pub const fn is_web_mercator(&self) -> bool {
        matches!(self.epsg, Self::EPSG_900913 | Self::EPSG_3857)
    }
}

impl fmt::Display for Srs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg)
    }
}
