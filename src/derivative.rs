//! Numerical differentiation of an extracted curve.
//!
//! Two interchangeable algorithms are provided:
//!
//! - [`Algorithm::Vectorized`] (the default) computes forward differences
//!   over consecutive points, yielding n−1 slopes located at the midpoints
//!   of consecutive x pairs.
//! - [`Algorithm::Manual`] is a deliberately unoptimized reference
//!   implementation: a centered difference over each interior point, with
//!   linear de-duplication on the emitted x values.
//!
//! Neither algorithm guards against coincident x values. The vectorized
//! path lets the division produce ±∞ or NaN; the manual path emits a NaN
//! sentinel for an undefined slope instead of raising. Renderers treat
//! non-finite y values as line gaps.
//!
//! On a straight line the two algorithms agree exactly. Elsewhere they are
//! only approximately equal: with uniform spacing `h`, the manual centered
//! slope at `x[i]` equals the average of the two vectorized slopes on
//! either side of it, since `(y[i+1]−y[i−1])/2h` is that average by
//! construction.

use crate::value::Value;

/// Differentiation algorithm selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Consecutive forward differences at midpoint x values. n−1 points.
    #[default]
    Vectorized,

    /// Centered differences at interior x values with de-duplication on x.
    /// At most n−2 points. Not optimized for large curves.
    Manual,
}

/// Differentiates a curve with the selected algorithm.
#[must_use]
pub fn differentiate<T: Value>(curve: &[(T, T)], algorithm: Algorithm) -> Vec<(T, T)> {
    match algorithm {
        Algorithm::Vectorized => vectorized(curve),
        Algorithm::Manual => manual(curve),
    }
}

/// Forward-difference derivative of a curve.
///
/// For each consecutive pair of points, the slope `(y₁−y₀)/(x₁−x₀)` is
/// emitted at the midpoint `(x₀+x₁)/2`, producing exactly n−1 derivative
/// points for an n-point curve. Curves with fewer than 2 points produce an
/// empty result.
///
/// Equal consecutive x values are not guarded: the division yields ±∞
/// (or NaN when the y values also coincide).
#[must_use]
pub fn vectorized<T: Value>(curve: &[(T, T)]) -> Vec<(T, T)> {
    curve
        .windows(2)
        .map(|pair| {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            let slope = (y1 - y0) / (x1 - x0);
            let midpoint = (x0 + x1) / T::two();
            (midpoint, slope)
        })
        .collect()
}

/// Centered-difference derivative of a curve.
///
/// For each interior index `i`, the slope `(y[i+1]−y[i−1])/(x[i+1]−x[i−1])`
/// is emitted at `x[i]`, skipping any x value that was already emitted.
/// A zero denominator emits a NaN sentinel (undefined slope) instead of
/// raising. Curves with fewer than 3 points produce an empty result.
///
/// The de-duplication is a linear membership scan per element, so the
/// whole pass is O(n²) — acceptable for the small curves a single image
/// produces, not suitable for large inputs.
#[must_use]
pub fn manual<T: Value>(curve: &[(T, T)]) -> Vec<(T, T)> {
    let mut points: Vec<(T, T)> = Vec::new();
    if curve.len() < 3 {
        return points;
    }

    for i in 1..curve.len() - 1 {
        let x = curve[i].0;
        if points.iter().any(|&(seen, _)| seen == x) {
            continue;
        }

        let dy = curve[i + 1].1 - curve[i - 1].1;
        let dx = curve[i + 1].0 - curve[i - 1].0;
        let slope = if dx == T::zero() {
            <T as num_traits::float::FloatCore>::nan()
        } else {
            dy / dx
        };
        points.push((x, slope));
    }
    points
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn line(n: usize, slope: f64, intercept: f64) -> Vec<(f64, f64)> {
        (0..n)
            .map(|i| {
                let x = i as f64;
                (x, slope * x + intercept)
            })
            .collect()
    }

    #[test]
    fn vectorized_yields_n_minus_one_points() {
        for n in 2..6 {
            let curve = line(n, 2.0, 1.0);
            assert_eq!(vectorized(&curve).len(), n - 1);
        }
    }

    #[test]
    fn vectorized_on_line_is_constant_slope() {
        let curve = line(10, 3.0, -2.0);
        for (x, slope) in vectorized(&curve) {
            assert_eq!(slope, 3.0);
            // Midpoints fall halfway between integer samples
            assert_eq!(x.fract(), 0.5);
        }
    }

    #[test]
    fn vectorized_handles_degenerate_curves() {
        assert!(vectorized::<f64>(&[]).is_empty());
        assert!(vectorized(&[(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn vectorized_coincident_x_produces_infinity() {
        let curve: Vec<(f64, f64)> = vec![(0.0, 0.0), (0.0, 1.0), (1.0, 2.0)];
        let derivative = vectorized(&curve);
        assert!(derivative[0].1.is_infinite());
        assert!(derivative[1].1.is_finite());
    }

    #[test]
    fn manual_yields_at_most_n_minus_two_points() {
        for n in 3..6 {
            let curve = line(n, 1.0, 0.0);
            assert_eq!(manual(&curve).len(), n - 2);
        }
        assert!(manual(&line(2, 1.0, 0.0)).is_empty());
        assert!(manual::<f64>(&[]).is_empty());
    }

    #[test]
    fn manual_skips_duplicate_x_values() {
        // x = 1.0 appears twice as an interior point; only the first is kept
        let curve = vec![(0.0, 0.0), (1.0, 1.0), (1.0, 1.5), (2.0, 2.0), (3.0, 3.0)];
        let derivative = manual(&curve);
        let xs: Vec<f64> = derivative.iter().map(|&(x, _)| x).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }

    #[test]
    fn manual_zero_span_emits_nan_sentinel() {
        // x[0] == x[2], so the centered difference at i=1 has a zero denominator
        let curve: Vec<(f64, f64)> = vec![(2.0, 0.0), (1.0, 1.0), (2.0, 4.0)];
        let derivative = manual(&curve);
        assert_eq!(derivative.len(), 1);
        assert!(derivative[0].1.is_nan());
    }

    #[test]
    fn modes_agree_on_a_line() {
        // Both differences are exact for a straight line
        let curve = line(8, -1.5, 4.0);
        for (_, slope) in vectorized(&curve) {
            assert_eq!(slope, -1.5);
        }
        for (_, slope) in manual(&curve) {
            assert_eq!(slope, -1.5);
        }
    }

    #[test]
    fn manual_slope_is_average_of_adjacent_vectorized_slopes() {
        // On a uniform grid, (y[i+1]-y[i-1])/2h averages the two forward
        // differences around x[i]. Check on a parabola.
        let curve: Vec<(f64, f64)> = (0..7).map(|i| (i as f64, (i * i) as f64)).collect();
        let forward = vectorized(&curve);
        let centered = manual(&curve);

        for (i, &(_, slope)) in centered.iter().enumerate() {
            let expected = (forward[i].1 + forward[i + 1].1) / 2.0;
            assert!((slope - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn differentiate_dispatches() {
        let curve = line(5, 2.0, 0.0);
        assert_eq!(differentiate(&curve, Algorithm::Vectorized).len(), 4);
        assert_eq!(differentiate(&curve, Algorithm::Manual).len(), 3);
    }
}
