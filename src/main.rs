//! Tile Gateway - Virtual Earth quad-key service tools.
//!
//! This binary decodes quad keys and resolves raw client queries the same
//! way the gateway's `ve` service does.

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tile_gateway::{
    config::{Cli, Command, DecodeConfig, ResolveConfig},
    layer::StaticTileLayer,
    service::{QueryParams, Service, ServiceRequest, VeService},
    tile::decode,
    ServiceError, TileRequest,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Command::Decode(config) => run_decode(config),
        Command::Resolve(config) => run_resolve(config),
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "tile_gateway=debug"
    } else {
        "tile_gateway=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// =============================================================================
// Decode Command
// =============================================================================

fn run_decode(config: DecodeConfig) -> ExitCode {
    let coordinate = match decode(&config.quad_key) {
        Ok(coordinate) => coordinate,
        Err(e) => {
            error!("Unable to interpret quad key {:?}: {}", config.quad_key, e);
            return ExitCode::FAILURE;
        }
    };

    let coordinate = if config.flip_y {
        coordinate.flip_y()
    } else {
        coordinate
    };

    println!(
        "{} {} {}",
        coordinate.x(),
        coordinate.y(),
        coordinate.zoom()
    );

    ExitCode::SUCCESS
}

// =============================================================================
// Resolve Command
// =============================================================================

fn run_resolve(config: ResolveConfig) -> ExitCode {
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let default_mime_type = match config.default_mime_type() {
        Ok(mime) => mime,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let params = QueryParams::parse(&config.query);
    let service = VeService::new();

    let service_request = service.service_request(&params).unwrap_or_else(|_| {
        debug!(layer = config.layer.as_str(), "No layers parameter, using configured layer");
        ServiceRequest::new(config.layer.as_str())
    });
    let layer = StaticTileLayer::new(service_request.layer(), default_mime_type);

    match service.tile_request(&layer, &service_request, &params) {
        Ok(request) => {
            print_request(&request, config.json);
            ExitCode::SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

fn print_request(request: &TileRequest, json: bool) {
    if json {
        let value = serde_json::json!({
            "x": request.coordinate.x(),
            "y": request.coordinate.y(),
            "zoom": request.coordinate.zoom(),
            "format": request.mime_type.format(),
            "mime_type": request.mime_type.mime_type(),
            "srs": request.srs.to_string(),
        });
        match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{}", text),
            Err(e) => error!("Failed to serialize tile request: {}", e),
        }
    } else {
        println!("tile:   {}", request.coordinate);
        println!("format: {}", request.mime_type);
        println!("srs:    {}", request.srs);
    }
}

fn report_error(err: &ServiceError) -> ExitCode {
    let body = err.to_error_response();
    match serde_json::to_string_pretty(&body) {
        Ok(text) => println!("{}", text),
        Err(e) => error!("Failed to serialize error: {}", e),
    }
    ExitCode::FAILURE
}
