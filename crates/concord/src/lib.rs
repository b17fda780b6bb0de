// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # Concord - value objects from an ordered component list
//!
//! Small types that are "just a tuple of named fields with identity by value"
//! get their constructor, accessors, structural equality/hash and
//! immutability derived instead of hand-written.
//!
//! ## Quick Start
//!
//! ```rust
//! use concord::Composition;
//!
//! #[derive(Composition)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let p = Point::new(1, 2);
//! assert_eq!(*p.x(), 1);
//! assert_eq!(*p.y(), 2);
//! assert_eq!(p, Point::new(1, 2));
//! assert_ne!(p, Point::new(2, 1));
//! ```
//!
//! ## Configurations
//!
//! | Derive | Ceiling | Accessors |
//! |--------|---------|-----------|
//! | [`Composition`] | 2 | `pub` |
//! | [`Concord`] | 3 | private to the defining module |
//! | [`ConcordPublic`] | 3 | `Concord`, then republished `pub` |
//!
//! Every derive generates, in this order:
//!
//! 1. `new(..)` taking exactly one argument per component, in declared order,
//!    plus `From<(..)>`
//! 2. one `&self` accessor per component, no setters
//! 3. accessor visibility from the configuration (and `#[concord(public(..))]`)
//! 4. `PartialEq`, `Eq` and `Hash` over exactly the components
//! 5. [`ValueObject`], with the type's [`Descriptor`]
//!
//! A `Debug` impl listing the components is also generated unless
//! `#[concord(debug = false)]` is given. Fields must be private; cached
//! computed properties go in `#[concord(memo)]` fields of type [`Memo`].
//!
//! ## Protected accessors
//!
//! ```rust
//! mod ledger {
//!     use concord::Concord;
//!
//!     #[derive(Concord)]
//!     pub struct Entry {
//!         account: u32,
//!         amount: i64,
//!         memo: String,
//!     }
//!
//!     impl Entry {
//!         pub fn is_credit(&self) -> bool {
//!             *self.amount() > 0
//!         }
//!     }
//! }
//!
//! let a = ledger::Entry::new(7, 100, "rent".to_string());
//! let b = ledger::Entry::new(7, 100, "rent".to_string());
//! assert!(a.is_credit());
//! assert_eq!(a, b);
//! ```
//!
//! Calling a protected accessor from outside the defining module does not
//! compile:
//!
//! ```compile_fail
//! mod ledger {
//!     #[derive(concord::Concord)]
//!     pub struct Entry {
//!         account: u32,
//!         amount: i64,
//!         memo: String,
//!     }
//! }
//!
//! let a = ledger::Entry::new(7, 100, "rent".to_string());
//! let _ = a.amount();
//! ```
//!
//! `#[concord(public(..))]` republishes selected accessors, and
//! [`ConcordPublic`] republishes all of them:
//!
//! ```rust
//! mod shapes {
//!     #[derive(concord::Concord)]
//!     #[concord(public(radius))]
//!     pub struct Circle {
//!         cx: i32,
//!         cy: i32,
//!         radius: u32,
//!     }
//!
//!     #[derive(concord::ConcordPublic)]
//!     pub struct Pair {
//!         p: &'static str,
//!         q: &'static str,
//!     }
//! }
//!
//! let c = shapes::Circle::new(0, 0, 5);
//! assert_eq!(*c.radius(), 5);
//!
//! let pair = shapes::Pair::new("left", "right");
//! assert_eq!((*pair.p(), *pair.q()), ("left", "right"));
//! ```
//!
//! ## Rejected at compile time
//!
//! Wrong constructor arity:
//!
//! ```compile_fail
//! #[derive(concord::Composition)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let _ = Point::new(1, 2, 3);
//! ```
//!
//! More components than the ceiling ("composition of more than 3 objects is
//! not allowed"):
//!
//! ```compile_fail
//! #[derive(concord::Concord)]
//! struct Quad {
//!     a: u8,
//!     b: u8,
//!     c: u8,
//!     d: u8,
//! }
//! ```
//!
//! Public fields, which would allow mutation after construction:
//!
//! ```compile_fail
//! #[derive(concord::Composition)]
//! struct Point {
//!     pub x: i32,
//!     y: i32,
//! }
//! ```
//!
//! Assignment through a value from another module:
//!
//! ```compile_fail
//! mod geo {
//!     #[derive(concord::Composition)]
//!     pub struct Point {
//!         x: i32,
//!         y: i32,
//!     }
//! }
//!
//! let mut p = geo::Point::new(1, 2);
//! p.x = 3;
//! ```
//!
//! ## Runtime-declared value types
//!
//! [`Descriptor`] and [`Record`] provide the same derivation for component
//! lists only known at runtime, with the arity checked per construction.
//! The [`schema`] module loads such declarations from TOML.

// Allow the derive macros to refer to `::concord` inside this crate's tests
extern crate self as concord;

/// Ceilings, visibility policy and the configuration registry.
pub mod configuration;
/// Validated component lists of value types.
pub mod descriptor;
/// Derivation and arity errors.
pub mod error;
/// Write-once cache cells for computed properties.
pub mod memo;
/// Value objects described at runtime.
pub mod record;
/// TOML declarations of runtime value types.
#[cfg(feature = "schema")]
pub mod schema;
mod value;

pub use configuration::{Configuration, Visibility, COMPOSITION_CEILING, CONCORD_CEILING};
pub use descriptor::{Component, Descriptor};
pub use error::{ConfigurationError, Error, Result};
pub use memo::Memo;
pub use record::Record;
pub use value::ValueObject;

// Derive macros (for #[derive(concord::Composition)] etc.)
pub use concord_codegen::{Composition, Concord, ConcordPublic};
