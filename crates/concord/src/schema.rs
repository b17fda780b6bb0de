// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TOML schema of runtime-declared value types.
//!
//! A schema lists value types the same way the derives do: a name, a
//! configuration and an ordered component list. Loading validates every
//! entry eagerly, so a bad schema fails before any [`Record`] exists.
//!
//! # Format
//!
//! ```toml
//! [[types]]
//! name = "Point"
//! configuration = "composition"   # composition | concord | concord_public
//! components = ["x", "y"]
//!
//! [[types]]
//! name = "Account"
//! configuration = "concord"
//! components = ["id", "owner", "balance"]
//! public = ["id"]                  # optional republish pass
//! ```
//!
//! # Example
//!
//! ```
//! use concord::schema::{Registry, Schema};
//!
//! let schema = Schema::from_toml_str(r#"
//!     [[types]]
//!     name = "Point"
//!     configuration = "composition"
//!     components = ["x", "y"]
//! "#)?;
//! let registry = Registry::from_schema(&schema)?;
//!
//! let p = registry.construct("Point", vec![1, 2])?;
//! assert_eq!(p.get("y"), Some(&2));
//! # Ok::<(), concord::schema::SchemaError>(())
//! ```

use crate::configuration::Configuration;
use crate::descriptor::Descriptor;
use crate::error::Error;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Schema loading errors.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// An entry's component list does not fit its configuration.
    #[error("invalid value type `{name}`: {source}")]
    Invalid {
        name: String,
        #[source]
        source: Error,
    },

    #[error("value type `{0}` is declared more than once")]
    DuplicateType(String),

    #[error("unknown value type `{0}`")]
    UnknownType(String),

    /// Construction of a record failed.
    #[error(transparent)]
    Derivation(#[from] Error),
}

/// One declared value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub name: String,
    pub configuration: Configuration,
    pub components: Vec<String>,

    /// Accessors republished as public after derivation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub public: Vec<String>,
}

impl TypeEntry {
    /// Builds and validates this entry's descriptor.
    pub fn descriptor(&self) -> Result<Descriptor, SchemaError> {
        Descriptor::new(
            self.name.clone(),
            self.configuration,
            self.components.iter().cloned(),
        )
        .and_then(|descriptor| descriptor.publish(self.public.as_slice()))
        .map_err(|source| SchemaError::Invalid {
            name: self.name.clone(),
            source,
        })
    }
}

/// A set of value type declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

impl Schema {
    /// Parses and validates a schema from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SchemaError> {
        let schema: Self = toml::from_str(content)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Loads and validates a schema from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks every entry: unique type names, component lists within their ceiling.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (i, entry) in self.types.iter().enumerate() {
            if self.types[..i].iter().any(|other| other.name == entry.name) {
                return Err(SchemaError::DuplicateType(entry.name.clone()));
            }
            entry.descriptor()?;
        }
        Ok(())
    }
}

/// Descriptors of a loaded schema, looked up by type name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    descriptors: HashMap<String, Arc<Descriptor>>,
}

impl Registry {
    /// Builds every descriptor declared in `schema`.
    pub fn from_schema(schema: &Schema) -> Result<Self, SchemaError> {
        let mut descriptors = HashMap::with_capacity(schema.types.len());
        for entry in &schema.types {
            let descriptor = entry.descriptor()?;
            if descriptors
                .insert(entry.name.clone(), Arc::new(descriptor))
                .is_some()
            {
                return Err(SchemaError::DuplicateType(entry.name.clone()));
            }
        }

        log::debug!("[schema] registry loaded with {} type(s)", descriptors.len());
        Ok(Self { descriptors })
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Descriptor>> {
        self.descriptors.get(name)
    }

    /// Builds a record of type `name` from `args`.
    pub fn construct<V>(&self, name: &str, args: Vec<V>) -> Result<Record<V>, SchemaError> {
        let descriptor = self
            .get(name)
            .ok_or_else(|| SchemaError::UnknownType(name.to_string()))?;
        Ok(Record::new(Arc::clone(descriptor), args)?)
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.descriptors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Visibility;
    use crate::error::ConfigurationError;
    use std::io::Write;

    const SCHEMA: &str = r#"
        [[types]]
        name = "Point"
        configuration = "composition"
        components = ["x", "y"]

        [[types]]
        name = "Account"
        configuration = "concord"
        components = ["id", "owner", "balance"]
        public = ["id"]

        [[types]]
        name = "Pair"
        configuration = "concord_public"
        components = ["p", "q"]
    "#;

    #[test]
    fn parses_all_configurations() {
        let schema = Schema::from_toml_str(SCHEMA).expect("valid schema");
        let registry = Registry::from_schema(&schema).expect("valid registry");
        assert_eq!(registry.names(), ["Account", "Pair", "Point"]);

        let account = registry.get("Account").expect("declared");
        assert_eq!(account.configuration(), Configuration::Concord);
        assert_eq!(account.visibility_of("id"), Some(Visibility::Public));
        assert_eq!(account.visibility_of("owner"), Some(Visibility::Protected));

        let pair = registry.get("Pair").expect("declared");
        assert_eq!(pair.visibility_of("q"), Some(Visibility::Public));
    }

    #[test]
    fn rejects_component_overflow_with_type_name() {
        let err = Schema::from_toml_str(
            r#"
            [[types]]
            name = "Quad"
            configuration = "concord"
            components = ["a", "b", "c", "d"]
            "#,
        )
        .expect_err("four components exceed the concord ceiling");

        match err {
            SchemaError::Invalid { name, source } => {
                assert_eq!(name, "Quad");
                assert_eq!(
                    source,
                    Error::Configuration(ConfigurationError::TooManyComponents {
                        ceiling: 3,
                        count: 4
                    })
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_public_list_outside_concord() {
        let err = Schema::from_toml_str(
            r#"
            [[types]]
            name = "Point"
            configuration = "composition"
            components = ["x", "y"]
            public = ["x"]
            "#,
        )
        .expect_err("composition accessors are already public");

        match err {
            SchemaError::Invalid { name, source } => {
                assert_eq!(name, "Point");
                assert_eq!(
                    source,
                    Error::Configuration(ConfigurationError::AlreadyPublic(
                        Configuration::Composition
                    ))
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_duplicate_type_names() {
        let err = Schema::from_toml_str(
            r#"
            [[types]]
            name = "Point"
            configuration = "composition"
            components = ["x", "y"]

            [[types]]
            name = "Point"
            configuration = "concord"
            components = ["x"]
            "#,
        )
        .expect_err("Point is declared twice");
        assert!(matches!(err, SchemaError::DuplicateType(name) if name == "Point"));
    }

    #[test]
    fn rejects_unknown_configuration() {
        let err = Schema::from_toml_str(
            r#"
            [[types]]
            name = "Point"
            configuration = "tuple"
            components = ["x", "y"]
            "#,
        )
        .expect_err("`tuple` is not a configuration");
        assert!(matches!(err, SchemaError::Toml(_)));
    }

    #[test]
    fn construct_checks_type_and_arity() {
        let schema = Schema::from_toml_str(SCHEMA).expect("valid schema");
        let registry = Registry::from_schema(&schema).expect("valid registry");

        let p = registry
            .construct("Point", vec![1_i64, 2])
            .expect("arity matches");
        assert_eq!(p.get("x"), Some(&1));

        assert!(matches!(
            registry.construct("Point", vec![1_i64, 2, 3]),
            Err(SchemaError::Derivation(Error::Arity {
                actual: 3,
                expected: 2
            }))
        ));
        assert!(matches!(
            registry.construct::<i64>("Line", vec![]),
            Err(SchemaError::UnknownType(name)) if name == "Line"
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SCHEMA.as_bytes()).expect("write schema");

        let schema = Schema::from_file(file.path()).expect("valid schema file");
        assert_eq!(schema.types.len(), 3);
        assert!(schema.types[0].public.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Schema::from_file("/nonexistent/concord/schema.toml")
            .expect_err("file does not exist");
        assert!(matches!(err, SchemaError::Io(_)));
    }

    #[test]
    fn empty_schema_is_valid() {
        let schema = Schema::from_toml_str("").expect("empty schema");
        let registry = Registry::from_schema(&schema).expect("empty registry");
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn round_trips_through_toml() {
        let schema = Schema::from_toml_str(SCHEMA).expect("valid schema");
        let text = toml::to_string(&schema).expect("serializable");
        assert_eq!(Schema::from_toml_str(&text).expect("reparse"), schema);
    }
}
