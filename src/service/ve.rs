//! Virtual Earth (Bing Maps) tile service.
//!
//! Virtual Earth clients address tiles with a quad key:
//!
//! ```text
//! GET /service/ve?layers=roads&quadkey=0313&format=image/png
//! ```
//!
//! # Request Handshake
//!
//! ```text
//! ┌──────────────┐   quadkey    ┌──────────────┐
//! │  parameters  │ ───────────▶ │    decode    │ ──▶ (x, y, zoom)
//! │              │   format     ┌──────────────┐
//! │              │ ───────────▶ │   resolver   │ ──▶ MimeType
//! └──────────────┘              └──────────────┘     (or layer default)
//!                                                    + EPSG:900913
//!                                                    = TileRequest
//! ```
//!
//! Every failure is a client error. A malformed quad key is never replaced by
//! a default coordinate and an unknown format never falls back to the layer's
//! default type.

use tracing::debug;

use crate::error::ServiceError;
use crate::format::{FormatResolver, StandardFormats};
use crate::layer::TileLayer;
use crate::srs::Srs;
use crate::tile::{decode, TileRequest};

use super::params::ParameterSource;
use super::{Service, ServiceRequest};

/// Service name used in request dispatch.
pub const SERVICE_VE: &str = "ve";

/// Parameter carrying the quad key.
pub const QUAD_KEY_PARAM: &str = "quadkey";

/// Parameter carrying the requested output format.
pub const FORMAT_PARAM: &str = "format";

/// Converts Virtual Earth requests into internal tile requests.
///
/// Stateless apart from its format resolver; a single instance can serve
/// concurrent requests.
///
/// # Example
///
/// ```
/// use tile_gateway::format::MimeType;
/// use tile_gateway::layer::StaticTileLayer;
/// use tile_gateway::service::{QueryParams, VeService};
///
/// let service = VeService::new();
/// let layer = StaticTileLayer::new("roads", MimeType::Png);
/// let params = QueryParams::parse("quadkey=12&format=image/jpeg");
///
/// let request = service.build_tile_request(&layer, &params).unwrap();
/// assert_eq!(request.grid_location(), [2, 2, 2]);
/// assert_eq!(request.mime_type, MimeType::Jpeg);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VeService<R = StandardFormats> {
    resolver: R,
}

impl VeService {
    /// Create a service accepting every standard format.
    pub fn new() -> Self {
        Self {
            resolver: StandardFormats,
        }
    }
}

impl<R: FormatResolver> VeService<R> {
    /// Create a service negotiating formats through `resolver`.
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// The format resolver in use.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Build the tile request for `layer` from raw request parameters.
    ///
    /// 1. Reads `quadkey` (required) and `format` (optional)
    /// 2. Decodes the quad key into a tile coordinate
    /// 3. Resolves `format`, or takes the layer's default MIME type
    /// 4. Assigns the Web Mercator spatial reference
    ///
    /// # Errors
    ///
    /// - [`ServiceError::MissingParameter`] if `quadkey` is absent; nothing
    ///   is decoded
    /// - [`ServiceError::MalformedQuadKey`] if the quad key does not decode
    /// - [`ServiceError::UnresolvableFormat`] if `format` is unknown
    pub fn build_tile_request<L, P>(
        &self,
        layer: &L,
        params: &P,
    ) -> Result<TileRequest, ServiceError>
    where
        L: TileLayer + ?Sized,
        P: ParameterSource + ?Sized,
    {
        let result = self.assemble(layer, params);

        match &result {
            Ok(request) => debug!(
                service = SERVICE_VE,
                layer = layer.name(),
                x = request.coordinate.x(),
                y = request.coordinate.y(),
                zoom = request.coordinate.zoom(),
                mime = request.mime_type.format(),
                "Resolved tile request"
            ),
            Err(err) => debug!(
                service = SERVICE_VE,
                layer = layer.name(),
                error_type = err.error_type(),
                "Rejected tile request: {}",
                err
            ),
        }

        result
    }

    fn assemble<L, P>(&self, layer: &L, params: &P) -> Result<TileRequest, ServiceError>
    where
        L: TileLayer + ?Sized,
        P: ParameterSource + ?Sized,
    {
        let quad_key = params
            .parameter(QUAD_KEY_PARAM)
            .ok_or(ServiceError::MissingParameter {
                name: QUAD_KEY_PARAM,
            })?;
        let format = params.parameter(FORMAT_PARAM);

        let coordinate = decode(quad_key).map_err(|source| ServiceError::MalformedQuadKey {
            quad_key: quad_key.to_string(),
            source,
        })?;

        let mime_type = match format {
            Some(format) => self.resolver.resolve_format(format).map_err(|source| {
                ServiceError::UnresolvableFormat {
                    format: format.to_string(),
                    source,
                }
            })?,
            None => layer.default_mime_type(),
        };

        Ok(TileRequest::new(coordinate, mime_type, Srs::web_mercator()))
    }
}

impl<R: FormatResolver> Service for VeService<R> {
    fn name(&self) -> &'static str {
        SERVICE_VE
    }

    fn tile_request(
        &self,
        layer: &dyn TileLayer,
        _request: &ServiceRequest,
        params: &dyn ParameterSource,
    ) -> Result<TileRequest, ServiceError> {
        self.build_tile_request(layer, params)
    }
}

// =============================================================================
// Tests
// =============================================================================
