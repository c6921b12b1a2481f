//! Cobweb diagram window.
//!
//! See [`show`] and [`ShowConfig`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use cobweb_core::Model;

use crate::{Cobweb, curve};

/// Number of samples used for the reference curves unless configured.
const DEFAULT_CURVE_POINTS: usize = 800;

/// Configuration for rendering a cobweb diagram.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// show(&f, &cobweb, ShowConfig::new().title("cos(x)").legend().x_range(0.0, 1.0))?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    x_range: Option<[f64; 2]>,
    curve_points: usize,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, a range
    /// fitted to the cobweb, and 800 curve samples.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            x_range: None,
            curve_points: DEFAULT_CURVE_POINTS,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling `y = f(x)`, `y = x`, and the cobweb path.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Sets the range shown on both axes and sampled for the curves.
    #[must_use]
    pub fn x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = Some([min, max]);
        self
    }

    /// Sets the number of samples used to draw `y = f(x)` and `y = x`.
    #[must_use]
    pub fn curve_points(mut self, count: usize) -> Self {
        self.curve_points = count;
        self
    }

    /// Resolves the plotted range, fitting the cobweb when none was set.
    fn range(&self, cobweb: &Cobweb) -> [f64; 2] {
        if let Some(range) = self.x_range {
            return range;
        }
        match cobweb.bounds() {
            Some([min, max]) => {
                let pad = if max > min { 0.1 * (max - min) } else { 1.0 };
                [min - pad, max + pad]
            }
            None => [0.0, 1.0],
        }
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens a blocking egui window with the cobweb diagram for `f`.
///
/// The window overlays `y = f(x)`, `y = x`, and the stair-step path of the
/// cobweb, with both axes limited to the configured range. Blocks until the
/// window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show<M>(f: &M, cobweb: &Cobweb, config: ShowConfig) -> Result<(), eframe::Error>
where
    M: Model<Input = f64, Output = f64>,
{
    let range = config.range(cobweb);
    let app = CobwebApp {
        curve: curve::sample(f, range, config.curve_points),
        identity: curve::identity(range, config.curve_points),
        path: cobweb.path(),
        range,
        legend: config.legend,
    };
    let title = config.title.unwrap_or_else(|| "Cobweb diagram".to_owned());

    eframe::run_native(
        &title,
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}

/// The egui [`eframe::App`] that renders a cobweb diagram.
struct CobwebApp {
    curve: Vec<[f64; 2]>,
    identity: Vec<[f64; 2]>,
    path: Vec<[f64; 2]>,
    range: [f64; 2],
    legend: bool,
}

impl eframe::App for CobwebApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let [min, max] = self.range;
            let mut plot = Plot::new("cobweb")
                .data_aspect(1.0)
                .include_x(min)
                .include_x(max)
                .include_y(min)
                .include_y(max)
                .x_axis_label("x")
                .y_axis_label("y");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                let traces = [
                    ("y = f(x)", &self.curve),
                    ("y = x", &self.identity),
                    ("cobweb", &self.path),
                ];
                for (name, points) in traces {
                    let points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use cobweb_core::ScalarFn;

    #[test]
    fn explicit_range_wins() {
        let cobweb = Cobweb::trace(&ScalarFn(f64::cos), 0.5, 5).unwrap();
        let config = ShowConfig::new().x_range(0.0, 1.0);
        assert_eq!(config.range(&cobweb), [0.0, 1.0]);
    }

    #[test]
    fn range_fits_cobweb_with_padding() {
        let cobweb = Cobweb::trace(&ScalarFn(|x: f64| 3.0 - x), 1.0, 2).unwrap();
        let [min, max] = ShowConfig::new().range(&cobweb);
        assert!(min < 1.0 && (1.0 - min - 0.1).abs() < 1e-12);
        assert!(max > 2.0 && (max - 2.0 - 0.1).abs() < 1e-12);
    }

    #[test]
    fn empty_cobweb_uses_unit_range() {
        assert_eq!(ShowConfig::new().range(&Cobweb::new()), [0.0, 1.0]);
    }

    #[test]
    fn defaults() {
        let config = ShowConfig::default();
        assert!(config.title.is_none());
        assert!(!config.legend);
        assert_eq!(config.curve_points, DEFAULT_CURVE_POINTS);
    }
}
