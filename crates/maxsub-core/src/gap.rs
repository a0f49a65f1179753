//! # Largest Gap
//!
//! `max(values) - min(values)`, the largest `|a[i] - a[j]|` over all index
//! pairs. Any pair's difference is bounded by the spread of the extremes, and
//! the extremes themselves attain it.

use crate::{Element, MaxSubError, Sum};

/// Smallest and largest element in one pass, or `None` for an empty slice.
#[must_use]
pub fn extremes(values: &[Element]) -> Option<(Element, Element)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// The largest gap, widened to [`Sum`] so `i64::MAX - i64::MIN` fits.
///
/// Returns `MaxSubError::InvalidInput` for an empty slice.
pub fn largest_gap(values: &[Element]) -> Result<Sum, MaxSubError> {
    let (lo, hi) = extremes(values).ok_or_else(|| MaxSubError::empty_input("largest_gap"))?;
    Ok(Sum::from(hi) - Sum::from(lo))
}
