//! MIME types served by the gateway.
//!
//! Clients request an output format with a format string (e.g. `image/png8`).
//! Each format maps to the MIME type used in the `Content-Type` header, which
//! is not always identical: 8-bit PNG is requested as `image/png8` but served
//! as `image/png`.

use std::fmt;

use crate::error::MimeError;

// =============================================================================
// MimeType
// =============================================================================

/// An output format supported by tile layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeType {
    /// 24/32-bit PNG
    Png,

    /// 8-bit paletted PNG
    Png8,

    /// JPEG
    Jpeg,

    /// GIF
    Gif,

    /// TIFF
    Tiff,

    /// Google Earth KML document
    Kml,

    /// Zipped KML document
    Kmz,
}

impl MimeType {
    /// Every supported MIME type.
    pub const ALL: [MimeType; 7] = [
        MimeType::Png,
        MimeType::Png8,
        MimeType::Jpeg,
        MimeType::Gif,
        MimeType::Tiff,
        MimeType::Kml,
        MimeType::Kmz,
    ];

    /// Format string clients use to request this type.
    pub const fn format(&self) -> &'static str {
        match self {
            MimeType::Png => "image/png",
            MimeType::Png8 => "image/png8",
            MimeType::Jpeg => "image/jpeg",
            MimeType::Gif => "image/gif",
            MimeType::Tiff => "image/tiff",
            MimeType::Kml => "application/vnd.google-earth.kml+xml",
            MimeType::Kmz => "application/vnd.google-earth.kmz",
        }
    }

    /// MIME type sent in the `Content-Type` header.
    pub const fn mime_type(&self) -> &'static str {
        match self {
            MimeType::Png8 => "image/png",
            other => other.format(),
        }
    }

    /// File extension used when storing tiles of this type.
    pub const fn file_extension(&self) -> &'static str {
        match self {
            MimeType::Png => "png",
            MimeType::Png8 => "png8",
            MimeType::Jpeg => "jpeg",
            MimeType::Gif => "gif",
            MimeType::Tiff => "tiff",
            MimeType::Kml => "kml",
            MimeType::Kmz => "kmz",
        }
    }

    /// Whether this type is a raster image.
    pub const fn is_image(&self) -> bool {
        !matches!(self, MimeType::Kml | MimeType::Kmz)
    }

    /// Look up a MIME type by its request format string.
    ///
    /// Surrounding whitespace is ignored and the comparison is ASCII
    /// case-insensitive.
    pub fn from_format(format: &str) -> Result<Self, MimeError> {
        let wanted = format.trim();
        Self::ALL
            .into_iter()
            .find(|mime| mime.format().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MimeError::UnknownFormat(format.to_string()))
    }

    /// Look up a MIME type by file extension, with or without a leading dot.
    pub fn from_extension(extension: &str) -> Result<Self, MimeError> {
        let wanted = extension.trim().trim_start_matches('.');
        if wanted.eq_ignore_ascii_case("jpg") {
            return Ok(MimeType::Jpeg);
        }
        Self::ALL
            .into_iter()
            .find(|mime| mime.file_extension().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MimeError::UnknownExtension(extension.to_string()))
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format())
    }
}

// =============================================================================
// Tests
// =============================================================================
