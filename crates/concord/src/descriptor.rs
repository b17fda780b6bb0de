// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Derivation descriptor: ordered component names, ceiling and visibility.
//!
//! A descriptor is validated once, when it is built, and is immutable
//! afterwards. Derived types expose theirs through
//! [`ValueObject::descriptor`](crate::ValueObject::descriptor); the dynamic
//! path builds one explicitly and hands it to [`Record`](crate::Record).
//!
//! # Example
//!
//! ```
//! use concord::{Configuration, Descriptor, Visibility};
//!
//! let point = Descriptor::new("Point", Configuration::Composition, ["x", "y"])?;
//! assert_eq!(point.arity(), 2);
//! assert_eq!(point.visibility_of("x"), Some(Visibility::Public));
//!
//! let too_big = Descriptor::new("Quad", Configuration::Concord, ["a", "b", "c", "d"]);
//! assert!(too_big.is_err());
//! # Ok::<(), concord::Error>(())
//! ```

use crate::configuration::{Configuration, Visibility};
use crate::error::{ConfigurationError, Error, Result};
use std::borrow::Cow;

/// One declared component and the visibility of its accessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    name: Cow<'static, str>,
    visibility: Visibility,
}

impl Component {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Validated, immutable description of one value type.
///
/// Two descriptors are equal when they name the same type with the same
/// configuration, components and visibilities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Descriptor {
    type_name: Cow<'static, str>,
    configuration: Configuration,
    components: Vec<Component>,
}

impl Descriptor {
    /// Builds a descriptor, checking the names against `configuration`.
    ///
    /// Fails with [`ConfigurationError::TooManyComponents`] when there are
    /// more names than the ceiling allows. Empty lists, empty names and
    /// duplicates are rejected as configuration errors too.
    pub fn new<I, N>(
        type_name: impl Into<Cow<'static, str>>,
        configuration: Configuration,
        names: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<Cow<'static, str>>,
    {
        let type_name = type_name.into();
        let names: Vec<Cow<'static, str>> = names.into_iter().map(Into::into).collect();

        let ceiling = configuration.ceiling();
        if names.len() > ceiling {
            return Err(ConfigurationError::TooManyComponents {
                ceiling,
                count: names.len(),
            }
            .into());
        }
        if names.is_empty() {
            return Err(ConfigurationError::NoComponents.into());
        }
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(ConfigurationError::EmptyName.into());
            }
            if names[..i].contains(name) {
                return Err(ConfigurationError::DuplicateComponent(name.to_string()).into());
            }
        }

        let visibility = configuration.base_visibility();
        let mut descriptor = Self {
            type_name,
            configuration,
            components: names
                .into_iter()
                .map(|name| Component { name, visibility })
                .collect(),
        };

        if configuration.republishes() {
            for component in &mut descriptor.components {
                component.visibility = Visibility::Public;
            }
        }

        log::debug!(
            "[descriptor] {} `{}` ({})",
            configuration,
            descriptor.type_name,
            descriptor.names_joined()
        );

        Ok(descriptor)
    }

    /// Republishes the named accessors as public.
    ///
    /// This is a second pass over an already built descriptor; the component
    /// list and its order are untouched. Naming an undeclared component fails
    /// with [`ConfigurationError::UnknownComponent`]. Only `Concord`
    /// descriptors accept a non-empty list; the others fail with
    /// [`ConfigurationError::AlreadyPublic`].
    pub fn publish<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self> {
        if !names.is_empty() && self.configuration != Configuration::Concord {
            return Err(ConfigurationError::AlreadyPublic(self.configuration).into());
        }

        for name in names {
            let name = name.as_ref();
            let component = self
                .components
                .iter_mut()
                .find(|c| c.name == name)
                .ok_or_else(|| ConfigurationError::UnknownComponent(name.to_string()))?;
            component.visibility = Visibility::Public;
        }

        if !names.is_empty() {
            log::debug!(
                "[descriptor] `{}` republished {} accessor(s)",
                self.type_name,
                names.len()
            );
        }

        Ok(self)
    }

    /// Builds the descriptor of a derived type.
    ///
    /// Only called from code generated by the derive macros, which already
    /// validated the component list at compile time.
    #[doc(hidden)]
    pub fn derived(
        type_name: &'static str,
        configuration: Configuration,
        components: &[(&'static str, Visibility)],
    ) -> Self {
        Self {
            type_name: Cow::Borrowed(type_name),
            configuration,
            components: components
                .iter()
                .map(|&(name, visibility)| Component {
                    name: Cow::Borrowed(name),
                    visibility,
                })
                .collect(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    /// Maximum number of components of this descriptor's configuration.
    pub fn ceiling(&self) -> usize {
        self.configuration.ceiling()
    }

    /// Number of constructor arguments.
    pub fn arity(&self) -> usize {
        self.components.len()
    }

    /// Components in declared order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.components.iter().map(Component::name)
    }

    /// Position of `name` in the declared order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.components.iter().position(|c| c.name == name)
    }

    pub fn visibility_of(&self, name: &str) -> Option<Visibility> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .map(Component::visibility)
    }

    /// Runtime arity check for variable-argument construction.
    pub fn check_arity(&self, actual: usize) -> Result<()> {
        let expected = self.arity();
        if actual != expected {
            return Err(Error::Arity { actual, expected });
        }
        Ok(())
    }

    fn names_joined(&self) -> String {
        self.component_names().collect::<Vec<_>>().join(", ")
    }
}
