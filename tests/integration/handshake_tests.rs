//! Service handshake integration tests.
//!
//! Tests verify:
//! - Quad keys decode into the expected tile requests
//! - Format negotiation uses the resolver or the layer default, never both
//! - Missing, malformed and unresolvable parameters are rejected
//! - A shared service handles concurrent requests

use std::sync::Arc;
use std::thread;

use tile_gateway::error::{MimeError, QuadKeyError, ServiceError};
use tile_gateway::format::MimeType;
use tile_gateway::layer::StaticTileLayer;
use tile_gateway::service::{QueryParams, Service, VeService};
use tile_gateway::srs::Srs;
use tile_gateway::tile::TileCoordinate;

use super::test_utils::{CountingLayer, RecordingParams, RecordingResolver};

// =============================================================================
// Successful Requests
// =============================================================================

#[test]
fn test_documented_quad_keys() {
    let service = VeService::new();
    let layer = StaticTileLayer::new("roads", MimeType::Png);

    let cases = [
        ("", [0, 0, 0]),
        ("0", [0, 1, 1]),
        ("3", [1, 0, 1]),
        ("12", [2, 2, 2]),
    ];

    for (quad_key, expected) in cases {
        let params = QueryParams::parse(&format!("quadkey={}", quad_key));
        let request = service.build_tile_request(&layer, &params).unwrap();
        assert_eq!(request.grid_location(), expected, "quad key {:?}", quad_key);
        assert_eq!(request.srs, Srs::web_mercator());
    }
}

#[test]
fn test_full_dispatch_sequence() {
    let service: Arc<dyn Service> = Arc::new(VeService::new());
    let params =
        QueryParams::parse("LAYERS=topp%3Astates&QUADKEY=0313&FORMAT=image%2Fjpeg&SERVICE=ve");

    let service_request = service.service_request(&params).unwrap();
    assert_eq!(service_request.layer(), "topp:states");

    let layer = StaticTileLayer::new(service_request.layer(), MimeType::Png);
    let request = service
        .tile_request(&layer, &service_request, &params)
        .unwrap();

    assert_eq!(request.coordinate, TileCoordinate::new(7, 10, 4).unwrap());
    assert_eq!(request.mime_type, MimeType::Jpeg);
    assert_eq!(request.mime_type.mime_type(), "image/jpeg");
    assert_eq!(request.srs.code(), 900913);
}

#[test]
fn test_format_uses_resolver_not_layer_default() {
    let resolver = RecordingResolver::new().with_format("jpeg", MimeType::Jpeg);
    let service = VeService::with_resolver(resolver);
    let layer = CountingLayer::new("roads", MimeType::Png);
    let params = RecordingParams::new(&[("quadkey", "12"), ("format", "jpeg")]);

    let request = service.build_tile_request(&layer, &params).unwrap();

    assert_eq!(request.mime_type, MimeType::Jpeg);
    assert_eq!(service.resolver().calls(), vec!["jpeg".to_string()]);
    assert_eq!(layer.default_lookups(), 0);
}

#[test]
fn test_no_format_uses_layer_default() {
    let service = VeService::with_resolver(RecordingResolver::new());
    let layer = CountingLayer::new("roads", MimeType::Gif);
    let params = RecordingParams::new(&[("quadkey", "3")]);

    let request = service.build_tile_request(&layer, &params).unwrap();

    assert_eq!(request.mime_type, MimeType::Gif);
    assert!(service.resolver().calls().is_empty());
    assert_eq!(layer.default_lookups(), 1);
}

// =============================================================================
// Rejected Requests
// =============================================================================

#[test]
fn test_missing_quad_key_stops_before_negotiation() {
    let service = VeService::with_resolver(RecordingResolver::new());
    let layer = CountingLayer::new("roads", MimeType::Png);
    let params = RecordingParams::new(&[("format", "image/png")]);

    let err = service.build_tile_request(&layer, &params).unwrap_err();

    assert_eq!(err, ServiceError::MissingParameter { name: "quadkey" });
    assert_eq!(params.reads(), vec!["quadkey".to_string()]);
    assert!(service.resolver().calls().is_empty());
    assert_eq!(layer.default_lookups(), 0);
}

#[test]
fn test_malformed_quad_key_stops_before_negotiation() {
    let service = VeService::with_resolver(RecordingResolver::new());
    let layer = CountingLayer::new("roads", MimeType::Png);
    let params = RecordingParams::new(&[("quadkey", "0X")]);

    let err = service.build_tile_request(&layer, &params).unwrap_err();

    match err {
        ServiceError::MalformedQuadKey { quad_key, source } => {
            assert_eq!(quad_key, "0X");
            assert_eq!(
                source,
                QuadKeyError::InvalidCharacter {
                    character: 'X',
                    position: 1,
                }
            );
        }
        other => panic!("expected MalformedQuadKey, got {:?}", other),
    }
    assert!(service.resolver().calls().is_empty());
    assert_eq!(layer.default_lookups(), 0);
}

#[test]
fn test_unresolvable_format_never_falls_back() {
    let service = VeService::with_resolver(RecordingResolver::new());
    let layer = CountingLayer::new("roads", MimeType::Png);
    let params = RecordingParams::new(&[("quadkey", "12"), ("format", "image/webp")]);

    let err = service.build_tile_request(&layer, &params).unwrap_err();

    assert_eq!(
        err,
        ServiceError::UnresolvableFormat {
            format: "image/webp".to_string(),
            source: MimeError::UnknownFormat("image/webp".to_string()),
        }
    );
    assert_eq!(service.resolver().calls(), vec!["image/webp".to_string()]);
    assert_eq!(layer.default_lookups(), 0);
}

#[test]
fn test_missing_layers_parameter() {
    let service = VeService::new();
    let params = QueryParams::parse("quadkey=12");

    let err = service.service_request(&params).unwrap_err();
    assert_eq!(err, ServiceError::MissingParameter { name: "layers" });
}

#[test]
fn test_overlong_quad_key_is_malformed() {
    let service = VeService::new();
    let layer = StaticTileLayer::new("roads", MimeType::Png);
    let params = QueryParams::parse(&format!("quadkey={}", "0".repeat(40)));

    let err = service.build_tile_request(&layer, &params).unwrap_err();
    assert_eq!(err.error_type(), "malformed_quad_key");
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_shared_service_across_threads() {
    let service = Arc::new(VeService::new());
    let layer = Arc::new(StaticTileLayer::new("roads", MimeType::Png));

    let handles: Vec<_> = ["0", "1", "2", "3"]
        .into_iter()
        .map(|quad_key| {
            let service = Arc::clone(&service);
            let layer = Arc::clone(&layer);
            thread::spawn(move || {
                let params = QueryParams::parse(&format!("quadkey={}{}", quad_key, quad_key));
                service
                    .build_tile_request(layer.as_ref(), &params)
                    .map(|request| request.grid_location())
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    assert_eq!(
        results,
        vec![[0, 3, 2], [3, 3, 2], [0, 0, 2], [3, 0, 2]]
    );
}
