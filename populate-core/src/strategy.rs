//! Population strategies, one per container shape.
//!
//! Set and map strategies enforce uniqueness by drawing until a new key
//! lands, discarding collisions. Nothing bounds that loop except the
//! feasibility check run before the first draw, so the check must never be
//! skipped for a finite key range.

use crate::data::{Config, Count, RandomSource};
use crate::error::{PopulateError, Result};
use crate::gen::{KeyGenerator, ValueGenerator};
use crate::shape::{FixedContainer, MapContainer, SequentialContainer, SetContainer};

/// Fail with [`PopulateError::RangeExhausted`] unless `keys` can produce
/// `size` distinct values.
pub(crate) fn ensure_feasible<G>(size: Count, keys: &G) -> Result<()>
where
    G: KeyGenerator + ?Sized,
{
    let range = keys.range();
    if range.admits(size) {
        Ok(())
    } else {
        tracing::debug!(size, %range, "key range too small for requested size");
        Err(PopulateError::RangeExhausted {
            requested: size,
            range: range.count(),
        })
    }
}

/// Counts discarded draws against an optional limit.
struct Collisions {
    limit: Option<usize>,
    requested: Count,
    count: usize,
}

impl Collisions {
    fn new(config: &Config, requested: Count) -> Self {
        Collisions {
            limit: config.retry_limit,
            requested,
            count: 0,
        }
    }

    fn record(&mut self, produced: Count) -> Result<()> {
        self.count += 1;
        match self.limit {
            Some(limit) if self.count > limit => Err(PopulateError::RetryLimitExceeded {
                requested: self.requested,
                produced,
                attempts: self.count,
            }),
            _ => Ok(()),
        }
    }
}

fn capacity(config: &Config, size: Count) -> usize {
    if config.reserve {
        size
    } else {
        0
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(size = size))]
pub(crate) fn populate_sequential<C, G>(
    source: &mut RandomSource,
    config: &Config,
    size: Count,
    values: &G,
) -> C
where
    C: SequentialContainer,
    G: ValueGenerator<Value = C::Item> + ?Sized,
{
    let mut container = C::with_capacity(capacity(config, size));
    for _ in 0..size {
        container.append_item(values.draw(source));
    }
    container
}

#[tracing::instrument(level = "trace", skip_all, fields(capacity = C::CAPACITY))]
pub(crate) fn populate_fixed<C, G>(source: &mut RandomSource, values: &G) -> C
where
    C: FixedContainer,
    G: ValueGenerator<Value = C::Item> + ?Sized,
{
    C::fill_with(|| values.draw(source))
}

#[tracing::instrument(level = "trace", skip_all, fields(size = size))]
pub(crate) fn populate_set<C, G>(
    source: &mut RandomSource,
    config: &Config,
    size: Count,
    keys: &G,
) -> Result<C>
where
    C: SetContainer,
    G: KeyGenerator<Value = C::Key> + ?Sized,
{
    ensure_feasible(size, keys)?;

    let mut container = C::with_capacity(capacity(config, size));
    let mut collisions = Collisions::new(config, size);
    while container.len() < size {
        if !container.insert_key(keys.draw(source)) {
            collisions.record(container.len())?;
        }
    }

    tracing::trace!(collisions = collisions.count, "set populated");
    Ok(container)
}

#[tracing::instrument(level = "trace", skip_all, fields(size = size))]
pub(crate) fn populate_map<C, K, V>(
    source: &mut RandomSource,
    config: &Config,
    size: Count,
    keys: &K,
    values: &V,
) -> Result<C>
where
    C: MapContainer,
    K: KeyGenerator<Value = C::Key> + ?Sized,
    V: ValueGenerator<Value = C::Value> + ?Sized,
{
    ensure_feasible(size, keys)?;

    let mut container = C::with_capacity(capacity(config, size));
    let mut collisions = Collisions::new(config, size);
    while container.len() < size {
        let key = keys.draw(source);
        let value = values.draw(source);
        if !container.insert_entry(key, value) {
            collisions.record(container.len())?;
        }
    }

    tracing::trace!(collisions = collisions.count, "map populated");
    Ok(container)
}
