//! Tile layer handles as seen by the service adapters.

use crate::format::MimeType;

/// A named tile layer.
///
/// Layer lookup and tile storage live in the dispatch layer. Services only
/// need the layer's identity and its fallback output format.
pub trait TileLayer: Send + Sync {
    /// Layer name.
    fn name(&self) -> &str;

    /// Format served when the request does not name one.
    fn default_mime_type(&self) -> MimeType;
}

/// A layer described by plain configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticTileLayer {
    name: String,
    default_mime_type: MimeType,
}

impl StaticTileLayer {
    /// Create a layer serving `default_mime_type` unless asked otherwise.
    pub fn new(name: impl Into<String>, default_mime_type: MimeType) -> Self {
        Self {
            name: name.into(),
            default_mime_type,
        }
    }
}

impl TileLayer for StaticTileLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn default_mime_type(&self) -> MimeType {
        self.default_mime_type
    }
}
