use super::form::FormSchema;
use crate::error::SchemaStoreError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;

/// Persistence helpers for handing a schema to a storage collaborator verbatim.
impl FormSchema {
    /// Encodes the schema into the compact bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SchemaStoreError> {
        encode_to_vec(self, standard())
            .map_err(|e| SchemaStoreError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Deserializes a schema from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchemaStoreError> {
        decode_from_slice(bytes, standard())
            .map(|(schema, _)| schema) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| SchemaStoreError::Generic(format!("Deserialization failed: {}", e)))
    }

    /// Saves the schema to a file using the bincode format, replacing any existing file.
    pub fn save(&self, path: &str) -> Result<(), SchemaStoreError> {
        fs::write(path, self.to_bytes()?).map_err(|e| {
            SchemaStoreError::Generic(format!("Could not write schema file '{}': {}", path, e))
        })
    }

    /// Loads a schema previously written with [`FormSchema::save`].
    pub fn from_file(path: &str) -> Result<Self, SchemaStoreError> {
        let bytes = fs::read(path).map_err(|e| {
            SchemaStoreError::Generic(format!("Could not read schema file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Serializes the schema as the JSON document stored by persistence layers.
    pub fn to_json(&self) -> Result<String, SchemaStoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SchemaStoreError::Generic(format!("Serialization failed: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaStoreError> {
        serde_json::from_str(json)
            .map_err(|e| SchemaStoreError::Generic(format!("Deserialization failed: {}", e)))
    }
}
