// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The trait every derived value type implements.

use crate::descriptor::Descriptor;
use std::hash::Hash;

/// A finished value type: fixed components, structural equality, immutable.
///
/// Implemented by `#[derive(Composition)]`, `#[derive(Concord)]` and
/// `#[derive(ConcordPublic)]`. Use it as a bound when code needs to reason
/// about value types generically.
///
/// ```
/// use concord::{Composition, ValueObject};
///
/// #[derive(Composition)]
/// struct Money {
///     amount: i64,
///     currency: &'static str,
/// }
///
/// fn describe<T: ValueObject>() -> String {
///     T::descriptor().component_names().collect::<Vec<_>>().join(",")
/// }
///
/// assert_eq!(describe::<Money>(), "amount,currency");
/// assert_eq!(Money::ARITY, 2);
/// ```
pub trait ValueObject: Eq + Hash + Sized {
    /// The components as a tuple, in declared order.
    type Components;

    /// Number of components, which is also the constructor's arity.
    const ARITY: usize;

    /// Descriptor of this type, built once and shared.
    fn descriptor() -> &'static Descriptor;

    /// Builds a value from its components tuple.
    fn from_components(components: Self::Components) -> Self;
}
