//! Test utilities for integration tests.
//!
//! This module provides recording implementations of the service
//! collaborators so tests can verify which of them a request touched.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tile_gateway::error::MimeError;
use tile_gateway::format::{FormatResolver, MimeType};
use tile_gateway::layer::TileLayer;
use tile_gateway::service::ParameterSource;

// =============================================================================
// Recording Format Resolver
// =============================================================================

/// A format resolver that records every format string it is asked about.
///
/// Only the formats registered with [`RecordingResolver::with_format`] resolve.
#[derive(Default)]
pub struct RecordingResolver {
    formats: HashMap<String, MimeType>,
    calls: Mutex<Vec<String>>,
}

impl RecordingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: impl Into<String>, mime: MimeType) -> Self {
        self.formats.insert(format.into(), mime);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl FormatResolver for RecordingResolver {
    fn resolve_format(&self, format: &str) -> Result<MimeType, MimeError> {
        self.calls.lock().unwrap().push(format.to_string());
        self.formats
            .get(format)
            .copied()
            .ok_or_else(|| MimeError::UnknownFormat(format.to_string()))
    }
}

// =============================================================================
// Counting Tile Layer
// =============================================================================

/// A tile layer that counts lookups of its default MIME type.
pub struct CountingLayer {
    name: String,
    default_mime_type: MimeType,
    default_lookups: AtomicUsize,
}

impl CountingLayer {
    pub fn new(name: impl Into<String>, default_mime_type: MimeType) -> Self {
        Self {
            name: name.into(),
            default_mime_type,
            default_lookups: AtomicUsize::new(0),
        }
    }

    pub fn default_lookups(&self) -> usize {
        self.default_lookups.load(Ordering::SeqCst)
    }
}

impl TileLayer for CountingLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn default_mime_type(&self) -> MimeType {
        self.default_lookups.fetch_add(1, Ordering::SeqCst);
        self.default_mime_type
    }
}

// =============================================================================
// Recording Parameter Source
// =============================================================================

/// A parameter source that records which parameter names were read.
pub struct RecordingParams {
    values: HashMap<String, String>,
    reads: Mutex<Vec<String>>,
}

impl RecordingParams {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            reads: Mutex::new(Vec::new()),
        }
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

impl ParameterSource for RecordingParams {
    fn parameter(&self, name: &str) -> Option<&str> {
        self.reads.lock().unwrap().push(name.to_string());
        self.values.get(name).map(String::as_str)
    }
}
