// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Derivation Integration Tests
//!
//! Exercise the derived surface the way downstream crates see it:
//! - Composition: public accessors, fixed arity, structural equality
//! - Concord: accessors hidden outside the defining module
//! - ConcordPublic / #[concord(public(..))]: republished accessors
//! - Memo fields: computed once, ignored by equality
//! - Types implementing Drop adopt like any other

use concord::{Composition, Concord, ConcordPublic, Memo, ValueObject, Visibility};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[derive(Composition)]
struct Point {
    x: i32,
    y: i32,
}

mod bank {
    use concord::Concord;

    #[derive(Concord)]
    pub struct Transfer {
        from: u32,
        to: u32,
        cents: u64,
    }

    impl Transfer {
        /// Same accounts, regardless of amount.
        pub fn same_route(&self, other: &Transfer) -> bool {
            self.from() == other.from() && self.to() == other.to()
        }

        pub fn reversed(&self) -> Transfer {
            Transfer::new(*self.to(), *self.from(), *self.cents())
        }
    }
}

#[derive(ConcordPublic)]
struct Interval {
    p: u32,
    q: u32,
}

#[derive(Concord)]
#[concord(public(name))]
struct Tagged {
    id: u64,
    name: String,
}

#[derive(Composition)]
struct Wrapper<T> {
    inner: T,
}

static AREA_CALLS: AtomicUsize = AtomicUsize::new(0);

#[derive(Composition)]
struct Rect {
    width: u32,
    height: u32,
    #[concord(memo)]
    area: Memo<u64>,
}

impl Rect {
    fn area(&self) -> u64 {
        *self.area.get_or_init(|| {
            AREA_CALLS.fetch_add(1, Ordering::SeqCst);
            u64::from(self.width) * u64::from(self.height)
        })
    }
}

#[derive(Composition)]
struct Keyword {
    r#type: u8,
}

static HANDLES_DROPPED: AtomicUsize = AtomicUsize::new(0);

#[derive(Composition)]
struct Handle {
    id: u32,
    label: String,
}

impl Drop for Handle {
    fn drop(&mut self) {
        HANDLES_DROPPED.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Composition)]
#[concord(debug = false)]
struct ApiKey {
    secret: String,
}

#[test]
fn composition_point_scenario() {
    let p = Point::new(1, 2);
    assert_eq!(*p.x(), 1);
    assert_eq!(*p.y(), 2);
    assert_eq!(p, Point::new(1, 2));
    assert_eq!(hash_of(&p), hash_of(&Point::new(1, 2)));
    assert_eq!(Point::descriptor().visibility_of("x"), Some(Visibility::Public));
}

#[test]
fn components_compare_in_declared_order() {
    assert_ne!(Point::new(1, 2), Point::new(2, 1));
    assert_ne!(Point::new(1, 2), Point::new(1, 3));
}

#[test]
fn accessors_return_the_same_stored_value() {
    let p = Point::new(7, 8);
    assert!(std::ptr::eq(p.x(), p.x()));
    assert_eq!(p.x(), p.x());
}

#[test]
fn concord_compares_through_protected_accessors() {
    let a = bank::Transfer::new(1, 2, 500);
    let b = bank::Transfer::new(1, 2, 500);
    let c = bank::Transfer::new(1, 2, 900);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);
    assert!(a.same_route(&c));
    assert_eq!(a.reversed().reversed(), a);
    assert_eq!(
        bank::Transfer::descriptor().visibility_of("cents"),
        Some(Visibility::Protected)
    );
}

#[test]
fn concord_public_scenario() {
    let i = Interval::new(3, 9);
    assert_eq!((*i.p(), *i.q()), (3, 9));
    let descriptor = Interval::descriptor();
    assert!(descriptor.components().iter().all(|c| c.is_public()));
    assert_eq!(descriptor.ceiling(), 3);
}

#[test]
fn selected_accessors_are_republished() {
    let t = Tagged::new(1, "one".to_string());
    assert_eq!(t.name(), "one");
    let descriptor = Tagged::descriptor();
    assert_eq!(descriptor.visibility_of("id"), Some(Visibility::Protected));
    assert_eq!(descriptor.visibility_of("name"), Some(Visibility::Public));
}

#[test]
fn generic_value_types() {
    let a = Wrapper::new(vec![1, 2, 3]);
    assert_eq!(a.inner(), &vec![1, 2, 3]);
    assert_eq!(a, Wrapper::new(vec![1, 2, 3]));
    assert_eq!(format!("{a:?}"), "Wrapper { inner: [1, 2, 3] }");
    assert_eq!(Wrapper::<String>::ARITY, 1);
}

#[test]
fn memo_is_computed_once_and_ignored_by_equality() {
    let r = Rect::new(3, 4);
    let before = AREA_CALLS.load(Ordering::SeqCst);
    assert_eq!(r.area(), 12);
    assert_eq!(r.area(), 12);
    assert_eq!(AREA_CALLS.load(Ordering::SeqCst), before + 1);

    let fresh = Rect::new(3, 4);
    assert_eq!(r, fresh);
    assert_eq!(hash_of(&r), hash_of(&fresh));
    assert_eq!(format!("{fresh:?}"), "Rect { width: 3, height: 4 }");
    assert_eq!(Rect::ARITY, 2);
}

#[test]
fn debug_lists_components_in_order() {
    assert_eq!(format!("{:?}", Point::new(-1, 5)), "Point { x: -1, y: 5 }");
}

#[test]
fn debug_can_be_replaced() {
    impl std::fmt::Debug for ApiKey {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("ApiKey(***)")
        }
    }

    let key = ApiKey::new("hunter2".to_string());
    assert_eq!(format!("{key:?}"), "ApiKey(***)");
    assert_eq!(key.secret(), "hunter2");
}

#[test]
fn tuple_conversions() {
    let p: Point = (5, 6).into();
    assert_eq!((*p.x(), *p.y()), (5, 6));

    let w = Wrapper::from(("solo",));
    assert_eq!(*w.inner(), "solo");
}

#[test]
fn value_objects_as_map_keys() {
    let mut totals: HashMap<bank::Transfer, u32> = HashMap::new();
    *totals.entry(bank::Transfer::new(1, 2, 10)).or_default() += 1;
    *totals.entry(bank::Transfer::new(1, 2, 10)).or_default() += 1;
    *totals.entry(bank::Transfer::new(2, 1, 10)).or_default() += 1;
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[&bank::Transfer::new(1, 2, 10)], 2);
}

#[test]
fn instances_are_shareable_across_threads() {
    let p = std::sync::Arc::new(Point::new(1, 2));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = std::sync::Arc::clone(&p);
            std::thread::spawn(move || *p.x() + *p.y())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), 3);
    }
}

#[test]
fn types_with_drop_can_adopt() {
    {
        let a = Handle::new(1, "primary".to_string());
        let b = Handle::from((1, "primary".to_string()));
        assert_eq!(a, b);
        assert_eq!(*a.id(), 1);
        assert_eq!(a.label(), "primary");
        assert_eq!(format!("{a:?}"), r#"Handle { id: 1, label: "primary" }"#);
    }
    assert_eq!(HANDLES_DROPPED.load(Ordering::SeqCst), 2);
}

#[test]
fn raw_identifier_components_drop_the_prefix() {
    let k = Keyword::new(1);
    assert_eq!(*k.r#type(), 1);
    assert_eq!(format!("{k:?}"), "Keyword { type: 1 }");
    assert_eq!(Keyword::descriptor().component_names().collect::<Vec<_>>(), ["type"]);
}
