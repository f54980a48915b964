use plotters::coord::Shift;
use plotters::prelude::*;

use kinematics::{ArmConfig, FrameState};

use crate::RenderError;

// matplotlib's tab:blue and tab:gray
const TRAJECTORY_COLOR: RGBColor = RGBColor(31, 119, 180);
const LINK_COLOR: RGBColor = RGBColor(127, 127, 127);
// Plot background, with white grid lines over it
const BACKGROUND: RGBColor = RGBColor(234, 234, 242);

/// How every frame is laid out. Sizes are in millimeters unless noted.
pub struct Figure {
    /// In pixels
    pub size: (u32, u32),
    /// Both axes span [-limit, limit]
    pub limit: f64,
    /// In pixels
    pub link_width: u32,
    pub marker_radius: f64,
    /// Caption, axis descriptions and the labelled grid. Drawing text needs system fonts.
    pub labels: bool,
}

impl Figure {
    /// Fits the fully stretched arm with a small border
    pub fn new(config: &ArmConfig) -> Self {
        Self {
            size: (600, 600),
            limit: config.reach() + 10.0,
            link_width: 3,
            marker_radius: 6.0,
            labels: true,
        }
    }

    fn marker_radius_px(&self, plot_width_px: u32) -> i32 {
        let px_per_mm = plot_width_px as f64 / (2.0 * self.limit);
        ((self.marker_radius * px_per_mm).round() as i32).max(1)
    }
}

/// Draws the arm, its trajectory so far and the end effector onto a blank area, captioned with
/// the frame's label.
pub fn draw_frame<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &Figure,
    state: &FrameState,
) -> Result<(), RenderError> {
    area.fill(&WHITE).map_err(RenderError::draw)?;

    let mut builder = ChartBuilder::on(area);
    builder.margin(10);
    if figure.labels {
        builder
            .caption(&state.label, ("sans-serif", 16))
            .x_label_area_size(40)
            .y_label_area_size(50);
    }
    let mut chart = builder
        .build_cartesian_2d(-figure.limit..figure.limit, -figure.limit..figure.limit)
        .map_err(RenderError::draw)?;

    chart
        .plotting_area()
        .fill(&BACKGROUND)
        .map_err(RenderError::draw)?;
    if figure.labels {
        chart
            .configure_mesh()
            .bold_line_style(&WHITE)
            .light_line_style(&WHITE.mix(0.4))
            .x_desc("x [mm]")
            .y_desc("y [mm]")
            .draw()
            .map_err(RenderError::draw)?;
    }

    chart
        .draw_series(LineSeries::new(
            state.trajectory().iter().map(|pt| (pt.x, pt.y)),
            &TRAJECTORY_COLOR,
        ))
        .map_err(RenderError::draw)?;

    for segment in state.segments() {
        chart
            .draw_series(LineSeries::new(
                vec![
                    (segment.from.x, segment.from.y),
                    (segment.to.x, segment.to.y),
                ],
                LINK_COLOR.stroke_width(figure.link_width),
            ))
            .map_err(RenderError::draw)?;
    }

    let (plot_width_px, _) = chart.plotting_area().dim_in_pixel();
    chart
        .draw_series(std::iter::once(Circle::new(
            (state.end_effector.x, state.end_effector.y),
            figure.marker_radius_px(plot_width_px),
            TRAJECTORY_COLOR.filled(),
        )))
        .map_err(RenderError::draw)?;

    Ok(())
}
