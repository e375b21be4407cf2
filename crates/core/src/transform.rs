//! Order-preserving batch transform from records to color objects.
//!
//! Two failure policies are offered:
//! - [`transform_all`] (and [`par_transform_all`]) abort on the first
//!   malformed record and report its index and id.
//! - [`transform_each`] keeps going and returns one result per record.
//!
//! Neither reorders its input.

use crate::error::ColorError;
use crate::record::{ColorObject, ColorRecord};

fn transform_one(index: usize, record: &ColorRecord) -> Result<ColorObject, ColorError> {
    ColorObject::from_record(record).map_err(|source| ColorError::InvalidRecord {
        index,
        id: record.id.clone(),
        source,
    })
}

/// Transforms every record, failing the whole batch on the first malformed one.
pub fn transform_all(records: &[ColorRecord]) -> Result<Vec<ColorObject>, ColorError> {
    let result: Result<Vec<_>, _> = records
        .iter()
        .enumerate()
        .map(|(i, r)| transform_one(i, r))
        .collect();
    if let Err(e) = &result {
        log::debug!("batch of {} records rejected: {e}", records.len());
    }
    result
}

/// Transforms every record independently, one result per input position.
pub fn transform_each(records: &[ColorRecord]) -> Vec<Result<ColorObject, ColorError>> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| transform_one(i, r))
        .collect()
}

/// Parallel [`transform_all`]: records are mapped across rayon workers and
/// collected back in input order.
///
/// On failure the reported record is the lowest-index malformed one, the same
/// error [`transform_all`] would return.
#[cfg(feature = "parallel")]
pub fn par_transform_all(records: &[ColorRecord]) -> Result<Vec<ColorObject>, ColorError> {
    use rayon::prelude::*;

    let results: Vec<Result<ColorObject, ColorError>> = records
        .par_iter()
        .enumerate()
        .map(|(i, r)| transform_one(i, r))
        .collect();
    results.into_iter().collect()
}
