//! Test support utilities shared across the workspace
//!
//! This crate provides fixture data generators (seeded random values,
//! timestamp ranges, ULID-suffixed unique strings), unified test logging
//! initialization, and an in-memory database bootstrap.

pub mod db;
pub mod error;
pub mod logging;
pub mod random;
pub mod unique;

pub use error::FixtureError;
pub use random::{
    fixture_rng, random_datetime_range, random_int_values, seeded_rng, Stamp, StampFormat,
    FIXTURE_SEED,
};
pub use unique::{unique_email, unique_slug, unique_str};
