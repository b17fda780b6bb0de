// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for value object derivation.
//!
//! Only two kinds exist: a component list that does not fit its
//! configuration, and a constructor called with the wrong number of
//! arguments. Both are programming mistakes and are never retried.

use crate::configuration::Configuration;
use thiserror::Error;

/// Result type alias for derivation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by descriptor construction or dynamic instantiation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The component list does not fit the chosen configuration.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A constructor received a different number of arguments than declared.
    #[error("wrong number of arguments ({actual} for {expected})")]
    Arity {
        /// Number of arguments supplied.
        actual: usize,
        /// Number of declared components.
        expected: usize,
    },
}

/// Why a component list was rejected at derivation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// More components than the configuration's ceiling.
    #[error("composition of more than {ceiling} objects is not allowed")]
    TooManyComponents {
        /// Maximum allowed by the configuration.
        ceiling: usize,
        /// Number of components declared.
        count: usize,
    },

    /// A value object needs at least one component.
    #[error("a value object needs at least one component")]
    NoComponents,

    /// Component names must be non-empty.
    #[error("component names must not be empty")]
    EmptyName,

    /// The same name was declared twice.
    #[error("component `{0}` is declared more than once")]
    DuplicateComponent(String),

    /// A republish pass named a component that was never declared.
    #[error("`{0}` is not a component")]
    UnknownComponent(String),

    /// Selective republishing only applies to `Concord`.
    #[error("republishing only applies to Concord, {0} accessors are already public")]
    AlreadyPublic(Configuration),
}

impl Error {
    /// Returns `true` for errors raised while building a descriptor.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}
