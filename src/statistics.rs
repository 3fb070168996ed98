//! Robust outlier detection for derivative values
//!
//! Derivatives extracted from pixel data are noisy: a single stray pixel
//! can produce a slope orders of magnitude off the curve. This module
//! flags such points with the modified z-score of Iglewicz and Hoaglin,
//! which scores each value by its deviation from the median, scaled by the
//! median absolute deviation (MAD):
//!
//! ```math
//! score_i = 0.6745 * |v_i - median(v)| / MAD
//! MAD     = median( |v_i - median(v)| )
//! ```
//!
//! A value is an outlier when its score exceeds [`OUTLIER_THRESHOLD`].
//!
//! # Degenerate inputs
//!
//! When MAD is zero (at least half the values identical), the division is
//! *not* guarded: nonzero deviations score ∞ and are always outliers,
//! while zero deviations score NaN and are never outliers. In particular
//! an all-identical input yields an all-`false` mask. This is documented
//! behavior, pinned down by the tests below.
//!
//! # References
//! Boris Iglewicz and David Hoaglin (1993), "Volume 16: How to Detect and
//! Handle Outliers", The ASQC Basic References in Quality Control.

use crate::value::Value;

/// Modified z-score above which a point is classified as an outlier.
pub const OUTLIER_THRESHOLD: f64 = 3.5;

/// Scale factor relating the MAD to the standard deviation of a normal
/// distribution (the Iglewicz-Hoaglin constant).
const MAD_SCALE: f64 = 0.6745;

/// Computes the interpolated median of a set of values.
///
/// Averages the two middle elements for even-length input, matching the
/// usual statistical definition. Returns `None` for empty input.
#[must_use]
pub fn median<T: Value>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / T::two())
    } else {
        Some(sorted[mid])
    }
}

/// Computes the median absolute deviation of a set of values.
///
/// ```math
/// MAD = median( |v_i - median(v)| )
/// ```
///
/// Returns `None` for empty input. A MAD of zero means at least half the
/// values are identical; see the module docs for how the z-score behaves
/// in that case.
#[must_use]
pub fn median_absolute_deviation<T: Value>(values: &[T]) -> Option<T> {
    let center = median(values)?;
    let deviations: Vec<T> = values.iter().map(|&v| Value::abs(v - center)).collect();
    median(&deviations)
}

/// Computes the modified z-score of each value.
///
/// Empty input produces an empty result. Scores may be ∞ or NaN when the
/// MAD is zero; they are compared against the threshold as-is.
#[must_use]
pub fn modified_z_scores<T: Value>(values: &[T]) -> Vec<T> {
    let Some(center) = median(values) else {
        return Vec::new();
    };
    let deviations: Vec<T> = values.iter().map(|&v| Value::abs(v - center)).collect();

    // deviations is non-empty whenever values is
    let mad = median(&deviations).unwrap_or_else(T::zero);
    let scale = T::try_cast(MAD_SCALE).unwrap_or_else(|_| T::one());

    deviations.into_iter().map(|d| scale * d / mad).collect()
}

/// Returns a boolean mask, `true` where a value's modified z-score exceeds
/// the threshold.
///
/// The mask is aligned with the input; the caller filters both coordinate
/// sequences with the inverted mask.
#[must_use]
pub fn outlier_mask<T: Value>(values: &[T], threshold: T) -> Vec<bool> {
    modified_z_scores(values)
        .into_iter()
        .map(|score| score > threshold)
        .collect()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn median_odd_length() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn median_even_length_interpolates() {
        // sorted: [1, 2, 3, 4] -> (2 + 3) / 2
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn median_of_empty_is_none() {
        assert_eq!(median::<f64>(&[]), None);
    }

    #[test]
    fn mad_known_value() {
        // median = 3, deviations = [2, 1, 0, 1, 2], MAD = 1
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(median_absolute_deviation(&values), Some(1.0));
    }

    #[test]
    fn spike_is_flagged() {
        let mut values = vec![1.0, 1.1, 0.9, 1.05, 0.95, 1.0, 1.02];
        values.push(50.0);
        let mask = outlier_mask(&values, OUTLIER_THRESHOLD);
        assert_eq!(mask.iter().filter(|&&m| m).count(), 1);
        assert!(mask[values.len() - 1]);
    }

    #[test]
    fn tight_cluster_has_no_outliers() {
        let values = [1.0, 1.1, 0.9, 1.05, 0.95, 1.0];
        let mask = outlier_mask(&values, OUTLIER_THRESHOLD);
        assert!(mask.iter().all(|&m| !m));
    }

    #[test]
    fn all_identical_values_score_nan_and_pass() {
        // MAD = 0 and every deviation = 0: scores are 0/0 = NaN, and
        // NaN > threshold is false, so nothing is flagged.
        let values = [2.0f64; 8];
        let scores = modified_z_scores(&values);
        assert!(scores.iter().all(|s| s.is_nan()));

        let mask = outlier_mask(&values, OUTLIER_THRESHOLD);
        assert!(mask.iter().all(|&m| !m));
    }

    #[test]
    fn zero_mad_makes_any_deviation_infinite() {
        // Majority identical: MAD = 0, so the lone nonzero deviation
        // scores ∞ and is always an outlier, however small it is.
        let values = [2.0f64, 2.0, 2.0, 2.0, 2.0, 2.000001];
        let scores = modified_z_scores(&values);
        assert!(scores[5].is_infinite());

        let mask = outlier_mask(&values, OUTLIER_THRESHOLD);
        assert_eq!(mask, vec![false, false, false, false, false, true]);
    }

    #[test]
    fn empty_input_yields_empty_mask() {
        assert!(outlier_mask::<f64>(&[], OUTLIER_THRESHOLD).is_empty());
    }
}
