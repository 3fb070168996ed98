//! Numeric types and coordinate utilities for extracted curves.
//!
//! This module defines the [`Value`] trait, which abstracts the numeric
//! types that can be used for curve coordinates and derivatives, ensuring
//! compatibility with nalgebra, floating-point operations, and formatting.
//!
//! It also provides [`CoordExt`], an extension trait for collections of
//! `(x, y)` points: accessors for the individual coordinate sequences,
//! axis ranges, `f64` conversion for plotting, and the x-sort used before
//! rendering.
//!
//! # Example
//!
//! ```rust
//! use graph_derivative::value::CoordExt;
//!
//! let data = vec![(2.0, 4.0), (0.0, 1.0), (1.0, 3.0)];
//! let sorted = data.sorted_by_x();
//! assert_eq!(sorted, vec![(0.0, 1.0), (1.0, 3.0), (2.0, 4.0)]);
//! ```
use std::ops::Range;

use crate::error::Error;

/// Numeric type for curve coordinates
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
{
    /// Returns the value 2.0
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Get the absolute value for a numeric type
    #[must_use]
    fn abs(self) -> Self {
        nalgebra::ComplexField::abs(self)
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
{
}

/// Extension trait for collections of 2D points.
///
/// This trait is intended for any type that conceptually represents a
/// sequence of `(x, y)` coordinate pairs. It provides accessors for the
/// parallel coordinate sequences and the explicit x-sort that rendering
/// requires.
///
/// # Examples
///
/// ```
/// # use graph_derivative::value::CoordExt;
/// let data = vec![(1.5, -2.0), (2.0, 3.0), (0.0, 1.0)];
/// println!("{:?}", data.y());
/// ```
pub trait CoordExt<T: Value> {
    /// Returns an iterator over the x-coordinates of this value.
    fn x_iter(&self) -> impl Iterator<Item = T>;

    /// Returns an iterator over the y-coordinates of this value.
    fn y_iter(&self) -> impl Iterator<Item = T>;

    /// Returns the x-coordinates of this value.
    fn x(&self) -> Vec<T> {
        self.x_iter().collect()
    }

    /// Returns the y-coordinates of this value.
    fn y(&self) -> Vec<T> {
        self.y_iter().collect()
    }

    /// Returns the range of x-coordinates of this value.
    fn x_range(&self) -> Option<Range<T>> {
        let x_min = self.x_iter().fold(None, |acc: Option<(T, T)>, x| {
            Some(match acc {
                Some((min, max)) => (
                    nalgebra::RealField::min(min, x),
                    nalgebra::RealField::max(max, x),
                ),
                None => (x, x),
            })
        });
        x_min.map(|(start, end)| start..end)
    }

    /// Returns the range of y-coordinates of this value.
    fn y_range(&self) -> Option<Range<T>> {
        let y_min = self.y_iter().fold(None, |acc: Option<(T, T)>, y| {
            Some(match acc {
                Some((min, max)) => (
                    nalgebra::RealField::min(min, y),
                    nalgebra::RealField::max(max, y),
                ),
                None => (y, y),
            })
        });
        y_min.map(|(start, end)| start..end)
    }

    /// Returns the points sorted ascending by x, preserving each pair.
    ///
    /// Rendering expects monotonic x order to draw a coherent line; the
    /// rotation step leaves point order unspecified, so the pipeline calls
    /// this explicitly before plotting. NaN x values compare as equal and
    /// keep their relative position.
    fn sorted_by_x(&self) -> Vec<(T, T)> {
        let mut points: Vec<(T, T)> = self.x_iter().zip(self.y_iter()).collect();
        points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        points
    }

    /// Converts the coordinates of this value to `f64`.
    ///
    /// # Errors
    /// Returns an error if any of the coordinates cannot be converted to `f64`.
    fn as_f64(&self) -> crate::error::Result<Vec<(f64, f64)>> {
        self.x_iter()
            .zip(self.y_iter())
            .map(|(x, y)| {
                let x_f64 = f64::try_cast(x)?;
                let y_f64 = f64::try_cast(y)?;
                Ok((x_f64, y_f64))
            })
            .collect()
    }
}
impl<T: Value> CoordExt<T> for Vec<(T, T)> {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}
impl<T: Value> CoordExt<T> for &[(T, T)] {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn sorted_by_x_orders_pairs() {
        let data = vec![(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)];
        let sorted = data.sorted_by_x();
        assert_eq!(sorted, vec![(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]);
    }

    #[test]
    fn sorted_by_x_preserves_correspondence() {
        // Each y is 10x its x; the pairing must survive the sort
        let data = vec![(5.0, 50.0), (-1.0, -10.0), (0.5, 5.0), (2.0, 20.0)];
        let sorted = data.sorted_by_x();
        for window in sorted.windows(2) {
            assert!(window[0].0 <= window[1].0);
        }
        for (x, y) in sorted {
            assert_eq!(y, x * 10.0);
        }
    }

    #[test]
    fn ranges() {
        let data = vec![(1.0, -2.0), (4.0, 7.0), (2.0, 0.0)];
        assert_eq!(data.x_range(), Some(1.0..4.0));
        assert_eq!(data.y_range(), Some(-2.0..7.0));

        let empty: Vec<(f64, f64)> = vec![];
        assert_eq!(empty.x_range(), None);
    }

    #[test]
    fn coordinate_accessors() {
        let data = vec![(1.0, 10.0), (2.0, 20.0)];
        assert_eq!(data.x(), vec![1.0, 2.0]);
        assert_eq!(data.y(), vec![10.0, 20.0]);
    }
}
