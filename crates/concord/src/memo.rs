// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Write-once cache for computed properties of value objects.

use std::fmt;
use std::sync::OnceLock;

/// Caches a property derived from a value object's components.
///
/// Declare it as a `#[concord(memo)]` field: the generated constructor
/// initializes it empty, and equality, hashing and `Debug` ignore it. The
/// first [`get_or_init`](Memo::get_or_init) computes the value; every later
/// call returns the same stored value. Concurrent first calls store exactly
/// one result.
///
/// ```
/// use concord::{Composition, Memo};
///
/// #[derive(Composition)]
/// struct Rect {
///     width: u32,
///     height: u32,
///     #[concord(memo)]
///     area: Memo<u64>,
/// }
///
/// impl Rect {
///     fn area(&self) -> u64 {
///         *self
///             .area
///             .get_or_init(|| u64::from(self.width) * u64::from(self.height))
///     }
/// }
///
/// let r = Rect::new(3, 4);
/// assert_eq!(r.area(), 12);
/// assert_eq!(r, Rect::new(3, 4));
/// ```
pub struct Memo<T> {
    cell: OnceLock<T>,
}

impl<T> Memo<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the cached value, computing it with `f` on first access.
    pub fn get_or_init<F: FnOnce() -> T>(&self, f: F) -> &T {
        self.cell.get_or_init(f)
    }

    /// Returns the cached value without computing it.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Memo").field(value).finish(),
            None => f.write_str("Memo(<pending>)"),
        }
    }
}
