use crate::analysis::AnalysisResult;
use crate::base::{SlipCircle, SlopeGeometry, SoilProfile};
use crate::StrError;
use plotpy::{Canvas, Curve, Legend, Plot};
use std::ffi::OsStr;

/// Draws the cross-section of a slope with the critical slip circles
pub struct PlotSection<'a> {
    geometry: &'a SlopeGeometry,
    profile: &'a SoilProfile,
    with_slices: bool,
    x_min: f64,
    x_max: f64,
}

impl<'a> PlotSection<'a> {
    /// Allocates a new instance
    pub fn new(geometry: &'a SlopeGeometry, profile: &'a SoilProfile) -> Self {
        let h = geometry.height;
        PlotSection {
            geometry,
            profile,
            with_slices: true,
            x_min: geometry.toe_x - 1.5 * h,
            x_max: geometry.crest_end_x() + h,
        }
    }

    /// Enables the drawing of the slices
    pub fn set_slices(&mut self, flag: bool) -> &mut Self {
        self.with_slices = flag;
        self
    }

    /// Returns the horizontal extent of the figure
    pub fn x_range(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// Returns the vertices of the ground surface
    pub fn ground_surface(&self) -> (Vec<f64>, Vec<f64>) {
        let xx = vec![self.x_min, self.geometry.toe_x, self.geometry.crest_x(), self.x_max];
        let yy = xx.iter().map(|x| self.geometry.surface_elevation(*x)).collect();
        (xx, yy)
    }

    /// Returns the vertices of the interfaces between layers
    ///
    /// The bottom of the last layer is not included because it extends indefinitely.
    pub fn layer_interfaces(&self) -> Vec<(Vec<f64>, Vec<f64>)> {
        let (xx, yy) = self.ground_surface();
        let n_interfaces = self.profile.layers.len().saturating_sub(1);
        let mut depth = 0.0;
        let mut interfaces = Vec::with_capacity(n_interfaces);
        for layer in self.profile.layers.iter().take(n_interfaces) {
            depth += layer.thickness;
            interfaces.push((xx.clone(), yy.iter().map(|y| y - depth).collect()));
        }
        interfaces
    }

    /// Returns the closed outline of each slice of a result
    pub fn slice_outlines(&self, result: &AnalysisResult) -> Vec<(Vec<f64>, Vec<f64>)> {
        let circle = &result.circle;
        result
            .slices
            .iter()
            .map(|s| {
                let x_left = s.x_mid - s.width / 2.0;
                let x_right = s.x_mid + s.width / 2.0;
                let base_left = base_elevation(circle, x_left);
                let base_right = base_elevation(circle, x_right);
                let xx = vec![x_left, x_left, x_right, x_right, x_left];
                let yy = vec![
                    base_left,
                    self.geometry.surface_elevation(x_left),
                    self.geometry.surface_elevation(x_right),
                    base_right,
                    base_left,
                ];
                (xx, yy)
            })
            .collect()
    }

    /// Draws the cross-section and the slip circle of each result
    pub fn draw(&self, results: &[AnalysisResult]) -> Plot {
        let mut plot = Plot::new();

        let (xx, yy) = self.ground_surface();
        let mut ground = Curve::new();
        ground
            .set_label("ground surface")
            .set_line_color("#8b4513")
            .set_line_width(2.0)
            .draw(&xx, &yy);
        plot.add(&ground);

        let mut interfaces = Curve::new();
        interfaces.set_line_color("#a0a0a0").set_line_style(":");
        for (xx, yy) in self.layer_interfaces() {
            interfaces.draw(&xx, &yy);
        }
        plot.add(&interfaces);

        let mut gwl = Curve::new();
        gwl.set_label("GWL")
            .set_line_color("blue")
            .set_line_style("--")
            .draw(&[self.x_min, self.x_max], &[self.profile.gwl, self.profile.gwl]);
        plot.add(&gwl);

        let colors = ["red", "green", "orange", "purple"];
        for (i, result) in results.iter().enumerate() {
            let color = colors[i % colors.len()];
            let c = &result.circle;
            let mut circle = Canvas::new();
            circle.set_edge_color(color).set_face_color("None");
            circle.draw_circle(c.xc, c.yc, c.radius);
            plot.add(&circle);
            let mut center = Curve::new();
            center
                .set_label(&format!("{}: FS = {}", result.label, result.fs))
                .set_line_style("None")
                .set_marker_style("+")
                .set_marker_color(color)
                .draw(&[c.xc], &[c.yc]);
            plot.add(&center);
            if self.with_slices {
                let mut slices = Curve::new();
                slices.set_line_color(color).set_line_width(0.5);
                for (xx, yy) in self.slice_outlines(result) {
                    slices.draw(&xx, &yy);
                }
                plot.add(&slices);
            }
        }

        let mut legend = Legend::new();
        legend.draw();
        plot.add(&legend)
            .set_equal_axes(true)
            .grid_and_labels("x (m)", "elevation (m)");
        plot
    }

    /// Draws the cross-section and saves the figure
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path; the extension selects the format
    pub fn save<P>(&self, results: &[AnalysisResult], full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let mut plot = self.draw(results);
        plot.set_figure_size_points(800.0, 500.0).save(full_path)
    }
}

/// Returns the elevation of the lower arc or the center elevation beyond the circle
fn base_elevation(circle: &SlipCircle, x: f64) -> f64 {
    circle.lower_arc(x).unwrap_or(circle.yc)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
