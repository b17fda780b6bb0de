// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Configuration registry: the three ready-made parameterizations of the
//! derivation.
//!
//! | Configuration | Ceiling | Accessors |
//! |---------------|---------|-----------|
//! | [`Configuration::Composition`] | 2 | public |
//! | [`Configuration::Concord`] | 3 | protected |
//! | [`Configuration::ConcordPublic`] | 3 | protected, then republished public |
//!
//! These constants must agree with the ones `concord-codegen` checks at
//! expansion time.

use std::fmt;

/// Maximum number of components of a [`Configuration::Composition`] type.
pub const COMPOSITION_CEILING: usize = 2;

/// Maximum number of components of a [`Configuration::Concord`] type.
pub const CONCORD_CEILING: usize = 3;

/// Who may call a generated accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", serde(rename_all = "snake_case"))]
pub enum Visibility {
    /// Callable by anyone holding the value.
    Public,
    /// Callable only from the module defining the type.
    Protected,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
        }
    }
}

/// A parameterization of the derivation: ceiling plus visibility policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", serde(rename_all = "snake_case"))]
pub enum Configuration {
    /// Up to 2 components, public accessors.
    Composition,
    /// Up to 3 components, protected accessors.
    Concord,
    /// `Concord` with every accessor republished as public.
    ConcordPublic,
}

impl Configuration {
    /// Maximum number of components.
    pub const fn ceiling(self) -> usize {
        match self {
            Configuration::Composition => COMPOSITION_CEILING,
            Configuration::Concord | Configuration::ConcordPublic => CONCORD_CEILING,
        }
    }

    /// Accessor visibility before any republish pass.
    pub const fn base_visibility(self) -> Visibility {
        match self {
            Configuration::Composition => Visibility::Public,
            Configuration::Concord | Configuration::ConcordPublic => Visibility::Protected,
        }
    }

    /// Whether every accessor is republished as public after derivation.
    pub const fn republishes(self) -> bool {
        matches!(self, Configuration::ConcordPublic)
    }

    /// Name of the matching derive macro.
    pub const fn as_str(self) -> &'static str {
        match self {
            Configuration::Composition => "Composition",
            Configuration::Concord => "Concord",
            Configuration::ConcordPublic => "ConcordPublic",
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
