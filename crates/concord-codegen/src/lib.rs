// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Derive macros for Concord value objects.
//!
//! Use through the `concord` crate, which re-exports them next to the
//! runtime types the generated code refers to.

extern crate proc_macro;

mod descriptor;
mod expand;

use descriptor::Configuration;
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// `#[derive(Composition)]`: value object of at most 2 components, public accessors.
///
/// Generates `new`, one accessor per field, `PartialEq`/`Eq`/`Hash` over the
/// fields in declared order, `Debug`, `From<(..)>` and `concord::ValueObject`.
///
/// Example:
/// ```ignore
/// use concord::Composition;
///
/// #[derive(Composition)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let p = Point::new(1, 2);
/// assert_eq!(*p.x(), 1);
/// ```
#[proc_macro_derive(Composition, attributes(concord))]
pub fn derive_composition(input: TokenStream) -> TokenStream {
    derive(input, Configuration::Composition)
}

/// `#[derive(Concord)]`: value object of at most 3 components, accessors
/// private to the defining module.
///
/// `#[concord(public(a, b))]` republishes the named accessors as `pub`.
#[proc_macro_derive(Concord, attributes(concord))]
pub fn derive_concord(input: TokenStream) -> TokenStream {
    derive(input, Configuration::Concord)
}

/// `#[derive(ConcordPublic)]`: `Concord` with every accessor republished as `pub`.
#[proc_macro_derive(ConcordPublic, attributes(concord))]
pub fn derive_concord_public(input: TokenStream) -> TokenStream {
    derive(input, Configuration::ConcordPublic)
}

fn derive(input: TokenStream, configuration: Configuration) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::expand(&input, configuration)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
