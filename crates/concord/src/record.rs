// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamically derived value objects.
//!
//! A [`Record`] is the runtime counterpart of a derived type: its component
//! list comes from a [`Descriptor`] built at runtime (for instance from a
//! [schema](crate::schema) file), and its constructor takes a variable
//! number of arguments checked against the declared arity.
//!
//! ```
//! use concord::{Configuration, Descriptor, Error, Record};
//! use std::sync::Arc;
//!
//! let point = Arc::new(Descriptor::new("Point", Configuration::Composition, ["x", "y"])?);
//!
//! let p = Record::new(Arc::clone(&point), vec![1, 2])?;
//! assert_eq!(p.get("x"), Some(&1));
//! assert_eq!(p, Record::new(Arc::clone(&point), vec![1, 2])?);
//!
//! let err = Record::new(point, vec![1, 2, 3]).unwrap_err();
//! assert_eq!(err, Error::Arity { actual: 3, expected: 2 });
//! # Ok::<(), concord::Error>(())
//! ```

use crate::descriptor::Descriptor;
use crate::error::Result;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Immutable value whose components are described at runtime.
///
/// Protected components are not returned by [`get`](Record::get) but still
/// take part in equality, hashing and `Debug`.
#[derive(Clone)]
pub struct Record<V> {
    descriptor: Arc<Descriptor>,
    values: Box<[V]>,
}

impl<V> Record<V> {
    /// Binds `args` to the descriptor's components in declared order.
    ///
    /// Fails with [`Error::Arity`](crate::Error::Arity) when the argument
    /// count differs from the number of components.
    pub fn new(descriptor: Arc<Descriptor>, args: Vec<V>) -> Result<Self> {
        descriptor.check_arity(args.len())?;
        log::trace!(
            "[record] new `{}` with {} component(s)",
            descriptor.type_name(),
            args.len()
        );
        Ok(Self {
            descriptor,
            values: args.into_boxed_slice(),
        })
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Returns a public component by name.
    ///
    /// `None` for unknown names and for protected components.
    pub fn get(&self, name: &str) -> Option<&V> {
        let index = self.descriptor.position(name)?;
        if !self.descriptor.components()[index].is_public() {
            return None;
        }
        self.values.get(index)
    }

    /// Public components with their names, in declared order.
    pub fn public_components(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.descriptor
            .components()
            .iter()
            .zip(self.values.iter())
            .filter(|(component, _)| component.is_public())
            .map(|(component, value)| (component.name(), value))
    }

    /// Moves every component out, in declared order.
    pub fn into_values(self) -> Vec<V> {
        self.values.into_vec()
    }

    fn same_shape(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.descriptor, &other.descriptor) || self.descriptor == other.descriptor
    }
}

impl<V: PartialEq> PartialEq for Record<V> {
    fn eq(&self, other: &Self) -> bool {
        self.same_shape(other) && self.values == other.values
    }
}

impl<V: Eq> Eq for Record<V> {}

impl<V: Hash> Hash for Record<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.descriptor.type_name().hash(state);
        for value in self.values.iter() {
            value.hash(state);
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Record<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(self.descriptor.type_name());
        for (name, value) in self.descriptor.component_names().zip(self.values.iter()) {
            out.field(name, value);
        }
        out.finish()
    }
}
