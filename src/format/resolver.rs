//! Format negotiation.

use crate::error::MimeError;

use super::mime::MimeType;

/// Resolves a client-supplied format string to a MIME type.
///
/// Services take a resolver rather than calling [`MimeType::from_format`]
/// directly so deployments can restrict or extend the accepted formats.
pub trait FormatResolver: Send + Sync {
    /// Resolve `format`, or fail if it names no known type.
    fn resolve_format(&self, format: &str) -> Result<MimeType, MimeError>;
}

/// Resolver accepting every [`MimeType`] format string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFormats;

impl FormatResolver for StandardFormats {
    fn resolve_format(&self, format: &str) -> Result<MimeType, MimeError> {
        MimeType::from_format(format)
    }
}

impl<R: FormatResolver + ?Sized> FormatResolver for &R {
    fn resolve_format(&self, format: &str) -> Result<MimeType, MimeError> {
        (**self).resolve_format(format)
    }
}
