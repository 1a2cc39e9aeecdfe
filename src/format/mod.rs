//! Output formats and format negotiation.
//!
//! - [`MimeType`]: The formats tile layers can serve
//! - [`FormatResolver`]: Maps a request's `format` parameter to a [`MimeType`]
//! - [`StandardFormats`]: Resolver accepting every known format string

pub mod mime;
pub mod resolver;

pub use mime::MimeType;
pub use resolver::{FormatResolver, StandardFormats};
