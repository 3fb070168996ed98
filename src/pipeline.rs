//! The end-to-end extraction pipeline.
//!
//! [`GraphDerivative`] wires the stages together: foreground pixel
//! extraction, coordinate rotation, numerical differentiation, outlier
//! stripping, and the x-sort the renderer requires. The whole pipeline is
//! single-threaded and synchronous; every stage treats an empty input as a
//! degenerate empty curve rather than an error.

use std::path::Path;

use crate::derivative::{differentiate, Algorithm};
use crate::error::Result;
use crate::raster::PixelMap;
use crate::rotate::rotate_coords;
use crate::statistics::{outlier_mask, OUTLIER_THRESHOLD};
use crate::value::{CoordExt, Value};

/// The rotation applied to (row, col) pixel indices to obtain (x, y)
/// points in the mathematical convention.
const ROTATION_DEGREES: f64 = -90.0;

/// Configuration for a [`GraphDerivative`] run.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Differentiation algorithm to use.
    pub algorithm: Algorithm,

    /// Whether to remove statistically anomalous derivative points.
    pub strip_outliers: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Vectorized,
            strip_outliers: true,
        }
    }
}

/// A function graph extracted from an image, together with its numerical
/// derivative.
///
/// The image must have a white background with the function drawn in any
/// other, roughly uniform color.
///
/// ```no_run
/// use graph_derivative::{GraphDerivative, Options};
///
/// # fn main() -> graph_derivative::error::Result<()> {
/// let graph = GraphDerivative::<f64>::from_image("function.png", Options::default())?;
/// println!("{} curve points, {} derivative points",
///     graph.curve().len(), graph.derivative().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GraphDerivative<T: Value> {
    curve: Vec<(T, T)>,
    derivative: Vec<(T, T)>,
    options: Options,
}

impl<T: Value> GraphDerivative<T> {
    /// Loads an image and extracts the graphed function and its derivative.
    ///
    /// # Errors
    /// Returns an error if the image cannot be decoded or a pixel index
    /// cannot be represented in `T`.
    pub fn from_image(path: impl AsRef<Path>, options: Options) -> Result<Self> {
        let map = PixelMap::load(path)?;
        Self::from_pixels(&map, options)
    }

    /// Extracts the graphed function and its derivative from an already
    /// decoded pixel map.
    ///
    /// # Errors
    /// Returns an error if a pixel index cannot be represented in `T`.
    pub fn from_pixels(map: &PixelMap, options: Options) -> Result<Self> {
        let (rows, cols) = map.foreground();
        let rows: Vec<T> = rows.into_iter().map(T::try_cast).collect::<Result<_>>()?;
        let cols: Vec<T> = cols.into_iter().map(T::try_cast).collect::<Result<_>>()?;

        let angle = T::try_cast(ROTATION_DEGREES)?;
        let curve = rotate_coords(&rows, &cols, angle)?;

        let mut derivative = differentiate(&curve, options.algorithm);
        if options.strip_outliers && !derivative.is_empty() {
            let threshold = T::try_cast(OUTLIER_THRESHOLD)?;
            let mask = outlier_mask(&derivative.y(), threshold);
            let before = derivative.len();
            derivative = derivative
                .into_iter()
                .zip(mask)
                .filter_map(|(point, is_outlier)| (!is_outlier).then_some(point))
                .collect();
            log::debug!("stripped {} outliers", before - derivative.len());
        }

        // The renderer needs monotonic x to draw a coherent line
        let derivative = derivative.sorted_by_x();

        Ok(Self {
            curve,
            derivative,
            options,
        })
    }

    /// The extracted function curve, in (x, y) convention.
    ///
    /// Point order is unspecified; see [`crate::rotate`].
    #[must_use]
    pub fn curve(&self) -> &[(T, T)] {
        &self.curve
    }

    /// The derivative curve, sorted ascending by x.
    #[must_use]
    pub fn derivative(&self) -> &[(T, T)] {
        &self.derivative
    }

    /// The options this graph was built with.
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }
}

#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
impl<T: Value> GraphDerivative<T> {
    /// Builds the two-panel figure: the original function as a red scatter
    /// plot above, the derivative as a blue line plot below.
    ///
    /// # Errors
    /// Returns an error if the coordinates cannot be converted to `f64`.
    pub fn figure(&self) -> Result<crate::plotting::Figure> {
        use crate::plotting::plotters::prelude::{BLUE, RED};

        let mut figure = crate::plotting::Figure::default();
        figure.scatter("Initial Function", self.curve.as_f64()?, RED);
        figure.line("Derivative Function", self.derivative.as_f64()?, BLUE);
        Ok(figure)
    }

    /// Renders the figure and writes it to `path` as a PNG.
    ///
    /// # Errors
    /// Returns an error if the coordinates cannot be converted to `f64` or
    /// the figure cannot be rendered.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.figure()?.save(path)?;
        Ok(())
    }

    /// Renders the figure to a temporary file and opens it in the platform
    /// image viewer, blocking until the viewer exits.
    ///
    /// # Errors
    /// Returns an error if rendering fails or the viewer cannot be
    /// launched.
    pub fn show(&self) -> Result<()> {
        self.figure()?.show()?;
        Ok(())
    }
}
