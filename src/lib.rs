//! # graph-derivative
//! ## Point a camera at a graph, get its derivative back
//!
//! Given an image of a plotted function — white background, the curve in any
//! other color — this crate extracts the curve's pixels, rotates them into the
//! usual mathematical orientation, differentiates the result numerically, strips
//! statistically anomalous slopes, and renders the original and derivative
//! curves as two stacked plots.
//!
//! The pipeline is deliberately small and entirely synchronous:
//!
//! ```text
//! pixel extraction → coordinate rotation → differentiation → outlier filter → sorted plot
//! ```
//!
//! ```no_run
//! use graph_derivative::{GraphDerivative, Options};
//!
//! # fn main() -> graph_derivative::error::Result<()> {
//! let graph = GraphDerivative::<f64>::from_image("function.png", Options::default())?;
//! graph.save("derivative.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Core Concepts
//! - A **curve** is a sequence of `(x, y)` points. Extraction produces one from
//!   every non-white pixel; order is unspecified until explicitly sorted
//!   (see [`value::CoordExt::sorted_by_x`]).
//! - The [`derivative::Algorithm`] selects between a vectorized
//!   forward-difference pass (the default) and a deliberately unoptimized
//!   manual centered-difference reference implementation.
//! - Outliers are flagged by the MAD-based modified z-score in [`statistics`];
//!   the degenerate zero-MAD case is documented there rather than guarded.
//! - With the `plotting` feature (default), [`plotting::Figure`] is an owned
//!   render context — no ambient global plotting state.
//!
//! # Sharp edges
//!
//! Degenerate geometry (coincident x values) and degenerate dispersion
//! (zero MAD) produce NaN/infinite values instead of errors, mirroring the
//! underlying arithmetic. Renderers draw non-finite values as gaps. See
//! [`derivative`] and [`statistics`] for the specifics.
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)] // I don't care about this one
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod derivative;
pub mod error;
pub mod raster;
pub mod rotate;
pub mod statistics;
pub mod value;

#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub mod plotting;

mod pipeline;

pub use derivative::Algorithm;
pub use pipeline::{GraphDerivative, Options};

pub use nalgebra;
