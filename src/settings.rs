//! src/settings.rs
//!
//! User-tunable poll interval and window size: validation, restore at
//! startup and persistence on save.

pub mod form;
pub mod store;

use std::ops::RangeInclusive;
use std::time::Duration;

use log::warn;
use thiserror::Error;

pub use form::{Field, SettingsForm};
pub use store::{FileStore, SettingsStore, StorageError};

pub const INTERVAL_KEY: &str = "updateInterval";
pub const POINTS_KEY: &str = "chartPoints";

pub const DEFAULT_INTERVAL_MS: u64 = 500;
pub const DEFAULT_POINTS: usize = crate::graph::buffer::DEFAULT_CAPACITY;

pub const INTERVAL_RANGE_MS: RangeInclusive<u64> = 100..=5_000;
pub const POINTS_RANGE: RangeInclusive<usize> = 10..=200;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(
        "enter a valid update interval ({}-{} ms)",
        INTERVAL_RANGE_MS.start(),
        INTERVAL_RANGE_MS.end()
    )]
    Interval,

    #[error(
        "enter a valid chart point count ({}-{})",
        POINTS_RANGE.start(),
        POINTS_RANGE.end()
    )]
    Points,

    #[error("settings applied but not saved: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub poll_interval_ms: u64,
    pub buffer_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_INTERVAL_MS,
            buffer_capacity: DEFAULT_POINTS,
        }
    }
}

/// Integer in `range`, or `None`. Surrounding whitespace is ignored.
fn parse_in_range<T>(input: &str, range: &RangeInclusive<T>) -> Option<T>
where
    T: TryFrom<i64> + PartialOrd,
{
    let n: i64 = input.trim().parse().ok()?;
    let v = T::try_from(n).ok()?;
    range.contains(&v).then_some(v)
}

impl Settings {
    /// Validate raw user input. Nothing is applied or stored here.
    pub fn parse(interval_input: &str, points_input: &str) -> Result<Self, SettingsError> {
        let poll_interval_ms =
            parse_in_range(interval_input, &INTERVAL_RANGE_MS).ok_or(SettingsError::Interval)?;
        let buffer_capacity =
            parse_in_range(points_input, &POINTS_RANGE).ok_or(SettingsError::Points)?;
        Ok(Self {
            poll_interval_ms,
            buffer_capacity,
        })
    }

    /// Stored values over defaults. Unusable stored values are logged and skipped.
    pub fn load(store: &dyn SettingsStore) -> Self {
        let mut settings = Self::default();
        if let Some(raw) = store.get(INTERVAL_KEY) {
            match parse_in_range(&raw, &INTERVAL_RANGE_MS) {
                Some(v) => settings.poll_interval_ms = v,
                None => warn!("ignoring stored {INTERVAL_KEY}={raw:?}"),
            }
        }
        if let Some(raw) = store.get(POINTS_KEY) {
            match parse_in_range(&raw, &POINTS_RANGE) {
                Some(v) => settings.buffer_capacity = v,
                None => warn!("ignoring stored {POINTS_KEY}={raw:?}"),
            }
        }
        settings
    }

    pub fn persist(&self, store: &mut dyn SettingsStore) -> Result<(), StorageError> {
        store.set(INTERVAL_KEY, self.poll_interval_ms.to_string());
        store.set(POINTS_KEY, self.buffer_capacity.to_string());
        store.flush()
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
