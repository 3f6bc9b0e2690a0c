//! Codec entry points and configuration

use crate::decode::decode_document;
use crate::encode::encode_document;
use crate::errors::{CodecError, CodecResult};
use crate::wire::WireDocument;
use process_migration_types::MigrationDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration for the JSON codec
///
/// Deserializable so hosts can embed it in their own configuration files.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonCodecConfig {
    /// Indent encoded documents for humans
    pub pretty: bool,
}

/// Encodes and decodes migration documents
#[derive(Clone, Debug, Default)]
pub struct JsonCodec {
    config: JsonCodecConfig,
}

impl JsonCodec {
    pub fn new(config: JsonCodecConfig) -> Self {
        Self { config }
    }

    pub fn pretty() -> Self {
        Self::new(JsonCodecConfig { pretty: true })
    }

    pub fn config(&self) -> &JsonCodecConfig {
        &self.config
    }

    /// Serialize a document to JSON text
    pub fn encode(&self, document: &MigrationDocument) -> CodecResult<String> {
        let wire = encode_document(document);
        let json = if self.config.pretty {
            serde_json::to_string_pretty(&wire)
        } else {
            serde_json::to_string(&wire)
        }
        .map_err(|e| CodecError::Serialization(e.to_string()))?;

        tracing::debug!(
            mappings = document.activity_mappings().len(),
            bytes = json.len(),
            "Migration document encoded"
        );
        Ok(json)
    }

    /// Parse and validate a document from JSON text
    pub fn decode(&self, json: &str) -> CodecResult<MigrationDocument> {
        let wire: WireDocument = serde_json::from_str(json)?;
        Self::decode_wire(wire)
    }

    /// Parse and validate a document from JSON bytes
    pub fn decode_slice(&self, json: &[u8]) -> CodecResult<MigrationDocument> {
        let wire: WireDocument = serde_json::from_slice(json)?;
        Self::decode_wire(wire)
    }

    fn decode_wire(wire: WireDocument) -> CodecResult<MigrationDocument> {
        let mappings = wire.activity_mappings.len();
        match decode_document(wire) {
            Ok(document) => {
                tracing::debug!(mappings, "Migration document decoded");
                Ok(document)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Rejected migration document");
                Err(err)
            }
        }
    }
}

/// Serialize a document to compact JSON text
pub fn to_json_string(document: &MigrationDocument) -> CodecResult<String> {
    JsonCodec::default().encode(document)
}

/// Serialize a document to indented JSON text
pub fn to_json_string_pretty(document: &MigrationDocument) -> CodecResult<String> {
    JsonCodec::pretty().encode(document)
}

/// Serialize a document to a JSON value
pub fn to_json_value(document: &MigrationDocument) -> CodecResult<Value> {
    serde_json::to_value(encode_document(document))
        .map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Parse and validate a document from JSON text
pub fn from_json_str(json: &str) -> CodecResult<MigrationDocument> {
    JsonCodec::default().decode(json)
}

/// Parse and validate a document from JSON bytes
pub fn from_json_slice(json: &[u8]) -> CodecResult<MigrationDocument> {
    JsonCodec::default().decode_slice(json)
}

/// Parse and validate a document from a JSON value
pub fn from_json_value(json: Value) -> CodecResult<MigrationDocument> {
    let wire: WireDocument = serde_json::from_value(json)?;
    JsonCodec::decode_wire(wire)
}

/// JSON helpers directly on the document
pub trait MigrationDocumentJsonExt: Sized {
    /// Compact JSON text of this document
    fn as_json_string(&self) -> CodecResult<String>;

    /// Parse and validate a document from JSON text
    fn from_json(json: &str) -> CodecResult<Self>;
}

impl MigrationDocumentJsonExt for MigrationDocument {
    fn as_json_string(&self) -> CodecResult<String> {
        to_json_string(self)
    }

    fn from_json(json: &str) -> CodecResult<Self> {
        from_json_str(json)
    }
}
