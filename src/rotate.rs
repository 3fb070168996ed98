//! Affine rotation of extracted pixel coordinates.
//!
//! Image indices follow the raster convention: rows increase downward.
//! Rotating the (row, col) pairs by −90° maps them into the mathematical
//! convention (x right, y up) used by the rest of the pipeline.
//!
//! Coordinate rotation may coalesce coincident points, and point order is
//! unspecified after this step. Consumers that need monotonic x must sort
//! explicitly (see [`crate::value::CoordExt::sorted_by_x`]).

use nalgebra::{Point2, Rotation2};

use crate::error::{Error, Result};
use crate::value::Value;

/// Rotates two equal-length coordinate lists by the given angle in degrees.
///
/// Each `(xs[i], ys[i])` pair is treated as a 2D point and rotated about
/// the origin. Exactly coincident points in the rotated output are
/// coalesced into a single point; truly distinct samples that happen to
/// land on the same coordinates collapse too, which is an intentional
/// artifact of the extraction step, not a lossless transform.
///
/// An empty input produces an empty output.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if the two lists differ in length.
pub fn rotate_coords<T: Value>(xs: &[T], ys: &[T], angle_degrees: T) -> Result<Vec<(T, T)>> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }

    let radians = num_traits::float::FloatCore::to_radians(angle_degrees);
    let rotation = Rotation2::new(radians);

    let mut points: Vec<(T, T)> = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| {
            let p = rotation * Point2::new(x, y);
            (p.x, p.y)
        })
        .collect();

    // Coalesce coincident points. Bitwise-identical pairs only; the sort
    // doubles as a stand-in for set semantics, so output order carries no
    // guarantee.
    points.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    points.dedup();

    log::debug!("rotated {} coords into {} points", xs.len(), points.len());
    Ok(points)
}
