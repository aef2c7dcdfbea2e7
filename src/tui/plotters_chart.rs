//! Plotters-powered fit chart widget for Ratatui.
//!
//! Ratatui ships its own `Chart` widget, but Plotters gives us nicer axes and
//! keeps the door open for richer backends (PNG/SVG export) later. The
//! output is rendered into the Ratatui buffer via `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A render-only chart description: samples, the sampled fitted curve, and
/// the equation caption. All series and bounds are computed by the caller so
/// `render()` only draws.
pub struct FitChart<'a> {
    pub curve: &'a [(f64, f64)],
    pub points: &'a [(f64, f64)],
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Chart caption: the fitted equation.
    pub caption: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

impl<'a> Widget for FitChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters can fail to lay out a chart in a handful of cells; show a
        // hint instead of panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite())
            || x1 <= x0
            || y1 <= y0
        {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .caption(self.caption, ("sans-serif", 12).into_font().color(&WHITE))
                .set_label_area_size(LabelAreaPosition::Left, 7)
                .set_label_area_size(LabelAreaPosition::Bottom, 2)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Mesh lines are visual clutter at terminal resolution; axes and
            // a few tick labels are enough to read off a fit. The curve is
            // sampled at integer x, so integer x ticks line up with it.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(6)
                .y_labels(4)
                .x_label_formatter(&|v| format!("{v:.0}"))
                .y_label_formatter(&|v| format!("{v:.1}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .draw()?;

            chart.draw_series(LineSeries::new(
                self.curve.iter().copied(),
                &RGBColor(0, 255, 255), // cyan curve
            ))?;

            // Red sample dots over the curve. `Pixel` rather than `Circle`:
            // the ratatui backend maps circle radii into normalized canvas
            // units, which blows markers up to unusable sizes in a terminal.
            chart.draw_series(
                self.points
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), RGBColor(255, 80, 80))),
            )?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
