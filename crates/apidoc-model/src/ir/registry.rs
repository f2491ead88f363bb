//! Type registry
//!
//! The registry maps fully-qualified names to their [`ApiObject`] records.
//! It is filled once by the annotation parser and then shared read-only
//! with every generator for the length of a run.

use crate::ir::ApiObject;
use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while building a registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two records share the same fully-qualified name
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// Serialized registry could not be decoded
    #[error("invalid registry data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Name-indexed collection of documented types, in insertion order
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, ApiObject>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of records
    pub fn from_objects(objects: impl IntoIterator<Item = ApiObject>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for object in objects {
            registry.insert(object)?;
        }
        Ok(registry)
    }

    /// Decode a JSON document holding one record or an array of records
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let objects = match serde_json::from_str::<Value>(json)? {
            value @ Value::Array(_) => serde_json::from_value::<Vec<ApiObject>>(value)?,
            value => vec![serde_json::from_value::<ApiObject>(value)?],
        };
        Self::from_objects(objects)
    }

    /// Register a record
    pub fn insert(&mut self, object: ApiObject) -> Result<(), RegistryError> {
        if self.types.contains_key(&object.name) {
            return Err(RegistryError::DuplicateType(object.name));
        }
        self.types.insert(object.name.clone(), object);
        Ok(())
    }

    /// Merge all records of another registry into this one
    pub fn extend(&mut self, other: TypeRegistry) -> Result<(), RegistryError> {
        for (_, object) in other.types {
            self.insert(object)?;
        }
        Ok(())
    }

    /// Look up a record by fully-qualified name
    pub fn get(&self, name: &str) -> Option<&ApiObject> {
        self.types.get(name)
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ApiObject> {
        self.types.values()
    }

    /// Iterate over registered names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Number of registered records
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
