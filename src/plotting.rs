//! Rendering of extracted curves with the `plotters` bitmap backend
//!
//! [`Figure`] is an owned render context holding a vertical stack of
//! panels, each either a scatter or a line plot. Nothing is drawn until
//! [`Figure::save`] or [`Figure::show`] is called; the panels are plain
//! data until then, so a figure can be built up incrementally and rendered
//! more than once.
//!
//! Tick labels are suppressed and each panel carries only its title,
//! matching the presentation of the extracted curves: the pixel-derived
//! coordinates have no meaningful units.
//!
//! I also expose [`plotters`] directly for callers that want to draw
//! something custom from the same data.

pub use plotters;

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

/// Error occurring during rendering
#[derive(Debug, thiserror::Error)]
pub enum PlottingError {
    /// Error drawing the figure
    #[error("Error drawing figure: {0}")]
    Draw(
        #[from]
        DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>,
    ),

    /// Error writing or opening the rendered file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A figure with no panels cannot be rendered
    #[error("Figure has no panels to render")]
    Empty,
}

/// How a panel draws its points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelStyle {
    /// Unconnected points
    Scatter,
    /// A connected line, split at non-finite values
    Line,
}

/// One subplot: a titled data series with a draw style and color.
#[derive(Debug, Clone)]
struct Panel {
    title: String,
    style: PanelStyle,
    color: RGBColor,
    data: Vec<(f64, f64)>,
}

/// An owned render context: vertically stacked subplot panels at a fixed
/// pixel size.
///
/// ```no_run
/// use graph_derivative::plotting::{plotters::prelude::*, Figure};
///
/// let mut figure = Figure::default();
/// figure.scatter("Samples", vec![(0.0, 0.0), (1.0, 1.0)], RED);
/// figure.line("Fit", vec![(0.0, 0.1), (1.0, 0.9)], BLUE);
/// figure.save("out.png").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Figure {
    panels: Vec<Panel>,
    size: (u32, u32),
}

impl Default for Figure {
    /// A figure sized for two stacked panels.
    fn default() -> Self {
        Self::new((640, 960))
    }
}

impl Figure {
    /// Creates an empty figure with the given pixel size.
    #[must_use]
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            panels: Vec::new(),
            size,
        }
    }

    /// Appends a scatter panel drawing unconnected points.
    ///
    /// An empty title omits the caption.
    pub fn scatter(&mut self, title: &str, data: Vec<(f64, f64)>, color: RGBColor) {
        self.panels.push(Panel {
            title: title.to_string(),
            style: PanelStyle::Scatter,
            color,
            data,
        });
    }

    /// Appends a line panel drawing connected points.
    ///
    /// Non-finite y values split the line into gaps rather than faulting.
    pub fn line(&mut self, title: &str, data: Vec<(f64, f64)>, color: RGBColor) {
        self.panels.push(Panel {
            title: title.to_string(),
            style: PanelStyle::Line,
            color,
            data,
        });
    }

    /// Number of panels added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the figure has no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Renders the figure to a PNG file at `path`.
    ///
    /// # Errors
    /// Returns an error if the figure has no panels or the backend fails
    /// to draw or write the file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlottingError> {
        if self.panels.is_empty() {
            return Err(PlottingError::Empty);
        }

        let backend = BitMapBackend::new(path.as_ref(), self.size);
        let root = IntoDrawingArea::into_drawing_area(backend);
        root.fill(&WHITE)?;

        let areas = root.split_evenly((self.panels.len(), 1));
        for (panel, area) in self.panels.iter().zip(&areas) {
            draw_panel(panel, area)?;
        }

        root.present()?;
        Ok(())
    }

    /// Renders the figure to a temporary PNG and opens it in the platform
    /// image viewer, blocking until the viewer process exits.
    ///
    /// Some desktop environments hand the file off to an already-running
    /// viewer and return immediately; blocking is best-effort.
    ///
    /// # Errors
    /// Returns an error if rendering fails or the viewer cannot be
    /// launched.
    pub fn show(&self) -> Result<(), PlottingError> {
        let path = std::env::temp_dir().join(format!(
            "graph-derivative-{}.png",
            std::process::id()
        ));
        self.save(&path)?;

        viewer_command(&path).status()?;
        Ok(())
    }
}

/// The platform command that opens a file in the default image viewer.
fn viewer_command(path: &Path) -> std::process::Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = std::process::Command::new("open");
        cmd.arg("-W").arg(path);
        cmd
    }
    #[cfg(target_os = "windows")]
    {
        let mut cmd = std::process::Command::new("cmd");
        cmd.arg("/C").arg("start").arg("/WAIT").arg("").arg(path);
        cmd
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = std::process::Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Axis range over the finite values of one coordinate, padded so plotters
/// never sees a zero-width range. Empty or all-NaN data gets a unit range.
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let bounds = values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| {
            Some(match acc {
                Some((min, max)) => (min.min(v), max.max(v)),
                None => (v, v),
            })
        });

    match bounds {
        Some((min, max)) if max > min => min..max,
        Some((v, _)) => (v - 0.5)..(v + 0.5),
        None => 0.0..1.0,
    }
}

fn draw_panel<'a>(
    panel: &Panel,
    area: &DrawingArea<BitMapBackend<'a>, Shift>,
) -> Result<(), DrawingAreaErrorKind<<BitMapBackend<'a> as DrawingBackend>::ErrorType>> {
    let x_range = axis_range(panel.data.iter().map(|&(x, _)| x));
    let y_range = axis_range(panel.data.iter().map(|&(_, y)| y));

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(10)
        .x_label_area_size(10)
        .y_label_area_size(10);
    // An empty title skips the caption entirely, which also avoids needing
    // a system font
    if !panel.title.is_empty() {
        builder.caption(&panel.title, ("sans-serif", 24).into_font());
    }
    let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

    // Bare axes, no tick labels
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(0)
        .y_labels(0)
        .draw()?;

    match panel.style {
        PanelStyle::Scatter => {
            chart.draw_series(
                panel
                    .data
                    .iter()
                    .filter(|(x, y)| x.is_finite() && y.is_finite())
                    .map(|&(x, y)| Circle::new((x, y), 2, panel.color.filled())),
            )?;
        }
        PanelStyle::Line => {
            // Each run of finite points becomes its own segment, leaving
            // gaps where the data is undefined
            for run in panel
                .data
                .split(|&(x, y)| !x.is_finite() || !y.is_finite())
            {
                chart.draw_series(LineSeries::new(run.iter().copied(), &panel.color))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_path(name: &str) -> std::path::PathBuf {
        let dir = std::path::Path::new("target").join("plot_output");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn axis_range_pads_degenerate_input() {
        assert_eq!(axis_range(std::iter::empty()), 0.0..1.0);
        assert_eq!(axis_range([2.0].into_iter()), 1.5..2.5);
        assert_eq!(axis_range([f64::NAN].into_iter()), 0.0..1.0);
        assert_eq!(axis_range([1.0, 3.0, f64::INFINITY].into_iter()), 1.0..3.0);
    }

    #[test]
    fn empty_figure_cannot_render() {
        let figure = Figure::default();
        let result = figure.save(output_path("empty.png"));
        assert!(matches!(result, Err(PlottingError::Empty)));
    }

    #[test]
    fn save_writes_two_panel_png() {
        let path = output_path("two_panels.png");

        // Untitled panels keep the smoke test independent of system fonts
        let mut figure = Figure::default();
        figure.scatter("", vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)], RED);
        figure.line("", vec![(0.5, 1.0), (1.5, 3.0)], BLUE);
        assert_eq!(figure.len(), 2);

        figure.save(&path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn non_finite_values_do_not_fault() {
        let path = output_path("gaps.png");

        let mut figure = Figure::new((320, 240));
        figure.line(
            "",
            vec![(0.0, 1.0), (1.0, f64::NAN), (2.0, 1.0), (3.0, f64::INFINITY)],
            BLUE,
        );
        figure.save(&path).unwrap();
        assert!(path.exists());
    }
}
