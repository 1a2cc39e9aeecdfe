//! Service adapters.
//!
//! Each tiling protocol the gateway speaks is a [`Service`]. The dispatch
//! layer calls a service twice per inbound request:
//!
//! ```text
//! ┌──────────────────┐  service_request()  ┌──────────────────┐
//! │     dispatch     │ ──────────────────▶ │  ServiceRequest  │ (layer name)
//! │                  │                     └──────────────────┘
//! │  (layer lookup)  │  tile_request()     ┌──────────────────┐
//! │                  │ ──────────────────▶ │   TileRequest    │ (x, y, zoom,
//! └──────────────────┘                     └──────────────────┘  mime, srs)
//! ```
//!
//! - [`VeService`]: Virtual Earth quad-key requests
//! - [`ParameterSource`]: Raw parameter access, implemented for maps and
//!   [`QueryParams`]
//! - [`ErrorResponse`]: JSON body returned for rejected requests

pub mod params;
pub mod response;
pub mod ve;

pub use params::{ParameterSource, QueryParams};
pub use response::ErrorResponse;
pub use ve::{VeService, FORMAT_PARAM, QUAD_KEY_PARAM, SERVICE_VE};

use crate::error::ServiceError;
use crate::layer::TileLayer;
use crate::tile::TileRequest;

/// Parameter naming the requested layer.
pub const LAYERS_PARAM: &str = "layers";

// =============================================================================
// Service Request
// =============================================================================

/// First stage of a request: which layer the client asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    layer: String,
}

impl ServiceRequest {
    /// Create a service request for `layer`.
    pub fn new(layer: impl Into<String>) -> Self {
        Self {
            layer: layer.into(),
        }
    }

    /// Requested layer name.
    pub fn layer(&self) -> &str {
        &self.layer
    }
}

// =============================================================================
// Service
// =============================================================================

/// A tiling protocol adapter.
pub trait Service: Send + Sync {
    /// Name the service is dispatched under.
    fn name(&self) -> &'static str;

    /// Extract the layer the request addresses.
    ///
    /// The default reads the `layers` parameter.
    fn service_request(
        &self,
        params: &dyn ParameterSource,
    ) -> Result<ServiceRequest, ServiceError> {
        params
            .parameter(LAYERS_PARAM)
            .map(ServiceRequest::new)
            .ok_or(ServiceError::MissingParameter { name: LAYERS_PARAM })
    }

    /// Translate the request into an internal tile request for `layer`.
    fn tile_request(
        &self,
        layer: &dyn TileLayer,
        request: &ServiceRequest,
        params: &dyn ParameterSource,
    ) -> Result<TileRequest, ServiceError>;
}
