// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Derived and runtime-declared value types side by side.
//!
//! Run with `RUST_LOG=debug` to see descriptor and registry logging.

use concord::schema::{Registry, Schema, SchemaError};
use concord::{Composition, ConcordPublic, ValueObject};

#[derive(Composition)]
struct Money {
    cents: i64,
    currency: &'static str,
}

#[derive(ConcordPublic)]
struct Address {
    street: String,
    city: String,
    zip: String,
}

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
"#;

fn main() -> Result<(), SchemaError> {
    env_logger::init();

    let price = Money::new(1999, "EUR");
    println!("{price:?} == {:?}: {}", Money::new(1999, "EUR"), price == Money::new(1999, "EUR"));
    println!("{} {}", price.cents(), price.currency());

    let home = Address::new("1 Main St".into(), "Springfield".into(), "12345".into());
    println!("{} ({} components)", home.city(), Address::ARITY);
    println!("{:?}", Address::descriptor());

    let registry = Registry::from_schema(&Schema::from_toml_str(SCHEMA)?)?;
    let account = registry.construct("Account", vec!["42", "alice", "100"])?;
    println!("{account:?}: id = {:?}, owner = {:?}", account.get("id"), account.get("owner"));

    match registry.construct("Point", vec![1, 2, 3]) {
        Ok(point) => println!("unexpected {point:?}"),
        Err(err) => println!("rejected: {err}"),
    }

    Ok(())
}
