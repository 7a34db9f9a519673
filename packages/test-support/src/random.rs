//! Seeded random fixture data.
//!
//! Every helper takes its generator explicitly. [`fixture_rng`] returns a new
//! generator on the shared fixture seed, so each call site gets the same
//! reproducible sequence no matter what else runs in the process.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime};

use crate::error::FixtureError;

pub const FIXTURE_SEED: u64 = 1;

/// `YYYY-MM-DD HH-MM-SS`
pub const DEFAULT_PATTERN: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]-[minute]-[second]");

pub fn fixture_rng() -> ChaCha8Rng {
    seeded_rng(FIXTURE_SEED)
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `count` independent uniform integers in `[min, max]`.
pub fn random_int_values<R: Rng>(
    rng: &mut R,
    count: usize,
    min: i64,
    max: i64,
) -> Result<Vec<i64>, FixtureError> {
    if min > max {
        return Err(FixtureError::EmptyRange { min, max });
    }
    Ok((0..count).map(|_| rng.random_range(min..=max)).collect())
}

/// How [`random_datetime_range`] renders each timestamp.
#[derive(Clone, Copy, Debug)]
pub enum StampFormat<'a> {
    EpochMillis,
    Pattern(&'a [BorrowedFormatItem<'a>]),
}

impl Default for StampFormat<'static> {
    fn default() -> Self {
        Self::Pattern(DEFAULT_PATTERN)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stamp {
    Formatted(String),
    EpochMillis(i64),
}

impl Stamp {
    pub fn as_millis(&self) -> Option<i64> {
        match self {
            Self::EpochMillis(ms) => Some(*ms),
            Self::Formatted(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Formatted(s) => Some(s),
            Self::EpochMillis(_) => None,
        }
    }
}

/// Timestamps from `start` (inclusive) to `end` (exclusive), `step` apart.
pub fn random_datetime_range(
    start: OffsetDateTime,
    end: OffsetDateTime,
    step: Duration,
    format: StampFormat<'_>,
) -> Result<Vec<Stamp>, FixtureError> {
    if !step.is_positive() {
        return Err(FixtureError::NonPositiveStep);
    }

    let mut stamps = Vec::new();
    let mut current = start;
    while current < end {
        let stamp = match format {
            StampFormat::Pattern(items) => Stamp::Formatted(
                current
                    .format(items)
                    .map_err(|e| FixtureError::Format(e.to_string()))?,
            ),
            StampFormat::EpochMillis => Stamp::EpochMillis(epoch_millis(current)),
        };
        stamps.push(stamp);

        current = match current.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(stamps)
}

/// Whole seconds since the epoch, in milliseconds; the sub-second part is dropped.
fn epoch_millis(at: OffsetDateTime) -> i64 {
    at.unix_timestamp() * 1000
}
