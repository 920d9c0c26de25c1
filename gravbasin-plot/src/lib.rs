use eframe::egui::{self, Stroke};
use egui_plot::{Legend, Line, Plot, PlotPoint, Polygon};

pub use eframe::egui::Color32;

/// A runnable egui application for plotting gravity profiles and basins.
///
/// The window holds one or more panels stacked top to bottom, each with its
/// own axes. Builder methods apply to the most recent panel; call
/// [`PlotApp::new_panel`] to start another.
///
/// Coordinates are plotted as given, so callers choose the units. Basin
/// outlines are supplied with depth positive downward and drawn below the
/// surface.
#[derive(Default)]
pub struct PlotApp {
    panels: Vec<Panel>,
}

#[derive(Default)]
struct Panel {
    series: Vec<Series>,
    outlines: Vec<(Series, OutlineStyle)>,
    x_label: Option<String>,
    y_label: Option<String>,
    y_bounds: Option<[f64; 2]>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl Series {
    fn new(name: &str, points: impl Iterator<Item = [f64; 2]>) -> Self {
        Self {
            name: name.to_string(),
            points: points.map(Into::into).collect(),
        }
    }
}

/// Fill and edge styling of a basin outline.
///
/// The default is an unfilled outline with a thin black edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineStyle {
    pub fill: Color32,
    pub edge: Color32,
    pub width: f32,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            fill: Color32::TRANSPARENT,
            edge: Color32::BLACK,
            width: 1.0,
        }
    }
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new panel below the current one.
    #[must_use]
    pub fn new_panel(mut self) -> Self {
        self.panels.push(Panel::default());
        self
    }

    /// Adds a line, such as a gravity profile.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.panel()
            .series
            .push(Series::new(name, points.iter().copied()));
        self
    }

    /// Adds a basin outline given as `[x, depth]` points, with default styling.
    #[must_use]
    pub fn add_outline(self, name: &str, points: &[[f64; 2]]) -> Self {
        self.add_styled_outline(name, points, OutlineStyle::default())
    }

    /// Adds a basin outline given as `[x, depth]` points.
    #[must_use]
    pub fn add_styled_outline(
        mut self,
        name: &str,
        points: &[[f64; 2]],
        style: OutlineStyle,
    ) -> Self {
        let series = Series::new(name, points.iter().map(|&[x, depth]| [x, -depth]));
        self.panel().outlines.push((series, style));
        self
    }

    #[must_use]
    pub fn axis_labels(mut self, x: &str, y: &str) -> Self {
        let panel = self.panel();
        panel.x_label = Some(x.to_string());
        panel.y_label = Some(y.to_string());
        self
    }

    /// Makes sure the y-axis spans at least `min..=max`, in plotted units.
    #[must_use]
    pub fn y_bounds(mut self, min: f64, max: f64) -> Self {
        self.panel().y_bounds = Some([min, max]);
        self
    }

    /// Shows depths from the surface down to `max_depth`, matching how
    /// outlines are drawn.
    #[must_use]
    pub fn depth_bounds(self, max_depth: f64) -> Self {
        self.y_bounds(-max_depth, 0.0)
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }

    fn panel(&mut self) -> &mut Panel {
        if self.panels.is_empty() {
            self.panels.push(Panel::default());
        }
        let last = self.panels.len() - 1;
        &mut self.panels[last]
    }
}

impl Panel {
    fn show(&self, ui: &mut egui::Ui, id: usize, height: f32) {
        let mut plot = Plot::new(("gravbasin-plot", id))
            .legend(Legend::default())
            .height(height);
        if let Some(label) = &self.x_label {
            plot = plot.x_axis_label(label.as_str());
        }
        if let Some(label) = &self.y_label {
            plot = plot.y_axis_label(label.as_str());
        }
        if let Some([min, max]) = self.y_bounds {
            plot = plot.include_y(min).include_y(max);
        }

        plot.show(ui, |plot_ui| {
            for (outline, style) in &self.outlines {
                let points = outline.points.as_slice();
                plot_ui.polygon(
                    Polygon::new(points)
                        .name(&outline.name)
                        .fill_color(style.fill)
                        .stroke(Stroke::new(style.width, style.edge)),
                );
            }
            for series in &self.series {
                let points = series.points.as_slice();
                plot_ui.line(Line::new(points).name(&series.name));
            }
        });
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            #[allow(clippy::cast_precision_loss)]
            let count = self.panels.len().max(1) as f32;
            let spacing = ui.spacing().item_spacing.y;
            let height = (ui.available_height() - spacing * (count - 1.0)) / count;

            for (id, panel) in self.panels.iter().enumerate() {
                panel.show(ui, id, height);
            }
        });
    }
}
