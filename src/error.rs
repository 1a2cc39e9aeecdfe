use thiserror::Error;

/// Errors produced while decoding a Virtual Earth quad key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadKeyError {
    /// Character outside the quadrant alphabet `0`-`3`
    #[error("Invalid quad key character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Key is longer than tile indices can represent
    #[error("Quad key addresses zoom level {zoom}, maximum supported is {max}")]
    ZoomTooDeep { zoom: usize, max: u8 },
}

/// Errors related to MIME type and format negotiation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MimeError {
    /// Format string does not name a served MIME type
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// File extension does not map to a served MIME type
    #[error("Unknown file extension: {0}")]
    UnknownExtension(String),
}

/// Errors raised while turning an inbound request into a tile request.
///
/// Every variant is a client input error (HTTP 400). None of them are
/// retryable and none should be recovered from with a default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// A required request parameter is absent
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: &'static str },

    /// The `quadkey` parameter could not be decoded
    #[error("Unable to interpret quad key {quad_key:?}: {source}")]
    MalformedQuadKey {
        quad_key: String,
        #[source]
        source: QuadKeyError,
    },

    /// The `format` parameter names no known MIME type
    #[error("Unable to determine requested format, {format}")]
    UnresolvableFormat {
        format: String,
        #[source]
        source: MimeError,
    },
}

impl ServiceError {
    /// Stable identifier used in error responses and log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            ServiceError::MissingParameter { .. } => "missing_parameter",
            ServiceError::MalformedQuadKey { .. } => "malformed_quad_key",
            ServiceError::UnresolvableFormat { .. } => "unresolvable_format",
        }
    }

    /// Whether the error was caused by client input.
    pub fn is_client_error(&self) -> bool {
        match self {
            ServiceError::MissingParameter { .. }
            | ServiceError::MalformedQuadKey { .. }
            | ServiceError::UnresolvableFormat { .. } => true,
        }
    }
}
