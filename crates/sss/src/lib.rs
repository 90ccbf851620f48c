#![crate_name = "sss"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]
#![doc = include_str!("../README.md")]

mod combine;
mod errors;
mod field;
mod integers;
mod ops;
mod parameters;
mod poly;
mod share;

pub mod proto;

pub use combine::combine;
pub use errors::{Error, ParametersError, Result};
pub use field::{share_finite_field, share_finite_field_with_rng};
pub use integers::{coefficient_bound, share_integers, share_integers_with_rng};
pub use ops::{add, add_sharings, multiply, multiply_sharings};
pub use parameters::{
    FieldSharing, IntegerSharing, SharingParametersBuilder, DEFAULT_STATISTICAL_SECURITY,
};
pub use share::{Domain, Share};

// Test the source code included in the README.
#[macro_use]
extern crate doc_comment;
doctest!("../README.md");
