//! Interactive viewer for a [`MoodyChart`].

use eframe::egui::{self, Align2, Color32};
use egui_plot::{
    GridInput, GridMark, Line, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text,
};

use crate::{Marker, MoodyChart, ticks};

/// Window title used when none is set.
pub const DEFAULT_TITLE: &str = "Moody Chart";

/// Configuration for rendering a [`MoodyChart`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// chart.show(ShowConfig::new().title("Pipe sizing"))?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    labels: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: standard title, roughness labels on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            labels: true,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Hides the roughness value printed at the end of each curve.
    #[must_use]
    pub fn hide_labels(mut self) -> Self {
        self.labels = false;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodyChart {
    /// Opens a blocking egui window displaying the chart.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());
        let app = ChartApp::new(&self, title.clone(), config.labels);

        eframe::run_native(
            &title,
            options,
            Box::new(move |cc| {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
                Ok(Box::new(app))
            }),
        )
    }
}

/// A chart curve in log10 coordinates.
struct Trace {
    points: Vec<[f64; 2]>,
    dashed: bool,
    label: Option<String>,
}

/// The egui [`eframe::App`] that renders the chart.
struct ChartApp {
    title: String,
    traces: Vec<Trace>,
    marker: Option<([f64; 2], Marker)>,
    x_range: [f64; 2],
    y_range: [f64; 2],
}

impl ChartApp {
    fn new(chart: &MoodyChart, title: String, labels: bool) -> Self {
        let mut traces = vec![
            Trace {
                points: to_log(chart.laminar()),
                dashed: false,
                label: None,
            },
            Trace {
                points: to_log(chart.transition()),
                dashed: true,
                label: None,
            },
        ];
        traces.extend(chart.curves().iter().map(|curve| Trace {
            points: to_log(&curve.points),
            dashed: false,
            label: labels.then(|| curve.label()),
        }));

        let marker = chart.highlight().map(|h| {
            (
                [h.reynolds.value().log10(), h.factor.value().log10()],
                h.marker,
            )
        });

        let bounds = chart.bounds();
        Self {
            title,
            traces,
            marker,
            x_range: bounds.re().map(f64::log10),
            y_range: bounds.friction().map(f64::log10),
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading(&self.title));

            let plot = Plot::new("moody_chart")
                .x_axis_label("Reynolds number Re = Vd/ν")
                .y_axis_label("Friction factor f = h / ((L/d)·V²/2g)")
                .x_grid_spacer(decade_spacer)
                .x_axis_formatter(|mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
                    ticks::reynolds_label(mark.value)
                })
                .y_axis_formatter(|mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
                    ticks::friction_label(mark.value)
                })
                .include_x(self.x_range[0])
                .include_x(self.x_range[1])
                .include_y(self.y_range[0])
                .include_y(self.y_range[1]);

            plot.show(ui, |plot_ui| {
                for trace in &self.traces {
                    let mut line = Line::new(PlotPoints::new(trace.points.clone()))
                        .color(Color32::BLACK)
                        .width(1.0);
                    if trace.dashed {
                        line = line.style(LineStyle::dashed_loose());
                    }
                    plot_ui.line(line);

                    if let (Some(label), Some(&[x, y])) = (&trace.label, trace.points.last()) {
                        plot_ui.text(
                            Text::new(PlotPoint::new(x, y), label.as_str())
                                .anchor(Align2::LEFT_CENTER)
                                .color(Color32::BLACK),
                        );
                    }
                }

                plot_ui.text(
                    Text::new(
                        PlotPoint::new(self.x_range[1], self.y_range[0]),
                        "Relative roughness ε/d",
                    )
                    .anchor(Align2::RIGHT_BOTTOM),
                );

                if let Some((point, marker)) = self.marker {
                    let shape = match marker {
                        Marker::Circle => MarkerShape::Circle,
                        Marker::Triangle => MarkerShape::Up,
                    };
                    plot_ui.points(
                        Points::new(PlotPoints::new(vec![point]))
                            .shape(shape)
                            .radius(Marker::SIZE / 2.0)
                            .filled(false)
                            .color(Color32::RED)
                            .name(marker.to_string()),
                    );
                }
            });
        });
    }
}

/// Places grid marks on whole decades of a log10 axis.
fn decade_spacer(input: GridInput) -> Vec<GridMark> {
    let (lo, hi) = input.bounds;
    ticks::decades(10_f64.powf(lo), 10_f64.powf(hi))
        .into_iter()
        .map(|n| GridMark {
            value: f64::from(n),
            step_size: 1.0,
        })
        .collect()
}

/// Maps `[Re, f]` pairs to log10 coordinates, skipping non-positive values.
fn to_log(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    points
        .iter()
        .filter(|p| p[0] > 0.0 && p[1] > 0.0)
        .map(|p| [p[0].log10(), p[1].log10()])
        .collect()
}
