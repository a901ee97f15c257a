// Render sinks: hand a computed route to something that draws or stores it

use std::io::Write;
use std::ops::Range;
use std::path::PathBuf;

use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::models::RouteResult;

/// Consumer of a finished route
pub trait RenderSink {
    fn render(&mut self, result: &RouteResult) -> Result<()>;
}

/// Writes the route as JSON
pub struct JsonSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for JsonSink<W> {
    fn render(&mut self, result: &RouteResult) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, result)?;
        } else {
            serde_json::to_writer(&mut self.writer, result)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Logs markers and metrics at info level
#[derive(Debug, Default)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn render(&mut self, result: &RouteResult) -> Result<()> {
        for marker in result.markers() {
            log::info!(
                "marker {} {}{} [lat: {}, long: {}]",
                marker.label,
                marker.info,
                if marker.is_start { " (start)" } else { "" },
                marker.latitude,
                marker.longitude
            );
        }
        log::info!(
            "travelled distance: {} positions visited: {}",
            result.total_distance,
            result.visited_count
        );
        Ok(())
    }
}

/// Draws the route into an SVG file with plotters
#[derive(Debug, Clone)]
pub struct SvgSink {
    path: PathBuf,
    size: (u32, u32),
    labels: bool,
}

impl SvgSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: (1000, 800),
            labels: true,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Caption, axis mesh and visiting-order labels; these need a system font
    pub fn labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    fn draw(&self, result: &RouteResult) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let bounds = result
            .bounds()
            .ok_or("route has no points to draw")?;
        let x_range = padded(bounds.min().x, bounds.max().x);
        let y_range = padded(bounds.min().y, bounds.max().y);

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(10);
        if self.labels {
            builder
                .caption(
                    format!(
                        "Distance: {:.4}, positions visited: {}",
                        result.total_distance, result.visited_count
                    ),
                    ("sans-serif", 20).into_font(),
                )
                .x_label_area_size(30)
                .y_label_area_size(40);
        }
        let mut chart = builder.build_cartesian_2d(x_range, y_range)?;
        if self.labels {
            chart
                .configure_mesh()
                .x_desc("longitude")
                .y_desc("latitude")
                .draw()?;
        }

        let path: Vec<(f64, f64)> = result
            .route
            .points
            .iter()
            .map(|p| (p.longitude, p.latitude))
            .collect();
        chart.draw_series(LineSeries::new(path, &BLUE))?;

        for marker in result.markers() {
            let (size, style) = if marker.is_start {
                (8, ShapeStyle::from(&RED).filled())
            } else {
                (5, ShapeStyle::from(&RGBColor(0, 100, 0)).filled())
            };
            let coord = (marker.longitude, marker.latitude);
            chart.draw_series(std::iter::once(Circle::new(coord, size, style)))?;

            if self.labels {
                chart.draw_series(std::iter::once(Text::new(
                    marker.label.clone(),
                    coord,
                    ("sans-serif", 14).into_font().color(&BLACK),
                )))?;
            }
        }

        root.present()?;
        Ok(())
    }
}

impl RenderSink for SvgSink {
    fn render(&mut self, result: &RouteResult) -> Result<()> {
        self.draw(result)
            .map_err(|e| Error::render(format!("{}: {e}", self.path.display())))?;
        log::info!("route drawn to {}", self.path.display());
        Ok(())
    }
}

/// Axis range around `[min, max]` with a 5% margin; never zero-width
fn padded(min: f64, max: f64) -> Range<f64> {
    let span = (max - min).max(1e-6);
    let pad = span * 0.05;
    (min - pad)..(max + pad)
}
