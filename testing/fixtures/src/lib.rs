//! Mapping-model fixtures shared by the ormshift test suites.
//!
//! Each module mirrors one legacy sample: what a dialect front end would hand
//! to the core for that sample. Entity lists are deliberately not in name
//! order so ordering guarantees get exercised.

pub mod docs;
pub mod keys;
pub mod northwind;
pub mod procedures;
pub mod school;

use ormshift_schema::node::Model;

/// Every fixture batch merged into one model.
#[must_use]
pub fn combined_model() -> Model {
    let mut model = northwind::model();
    model.extend(school::model());
    model.extend(keys::model());
    model.extend(docs::model());
    model.extend(procedures::model());

    model
}
