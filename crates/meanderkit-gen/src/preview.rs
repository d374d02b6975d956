//! SVG preview rendering for emitted traces.
//!
//! Renders an [`EmittedTrace`] scaled to fit a fixed viewport, one path
//! element per primitive, with a distinct color per layer: edge cuts gray,
//! front copper red, back copper blue.

use crate::emit::EmittedTrace;
use meanderkit_core::{ArcDirection, BoardLayer, PathPrimitive, Point};
use std::f64::consts::PI;

/// Cap on the fit-to-view scale so tiny patterns do not blow up.
const MAX_SCALE: f64 = 50.0;

/// Fit-to-view SVG renderer with a fixed pixel viewport.
#[derive(Debug, Clone, Copy)]
pub struct SvgPreview {
    pub width: u32,
    pub height: u32,
    /// Margin kept clear around the pattern, pixels.
    pub margin: f64,
}

impl Default for SvgPreview {
    fn default() -> Self {
        Self {
            width: 500,
            height: 250,
            margin: 20.0,
        }
    }
}

impl SvgPreview {
    /// Creates a renderer for the given viewport size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: 20.0,
        }
    }

    /// Renders the trace as a standalone SVG document.
    pub fn render(&self, trace: &EmittedTrace) -> String {
        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        ));
        svg.push_str(&format!(
            "<rect width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>",
            self.width, self.height
        ));

        match self.fit(trace) {
            None => {
                svg.push_str("<text x=\"10\" y=\"20\" fill=\"#808080\">Preview unavailable</text>");
            }
            Some(fit) => {
                for tagged in &trace.primitives {
                    let color = layer_color(tagged.layer);
                    let stroke = (tagged.width * fit.scale).clamp(1.0, 5.0);
                    let d = match &tagged.primitive {
                        PathPrimitive::Line(line) => {
                            let from = fit.to_screen(line.from);
                            let to = fit.to_screen(line.to);
                            format!(
                                "M {:.3} {:.3} L {:.3} {:.3}",
                                from.x, from.y, to.x, to.y
                            )
                        }
                        PathPrimitive::Arc(arc) => {
                            let from = fit.to_screen(arc.start_point());
                            let to = fit.to_screen(arc.end_point());
                            let radius = arc.radius * fit.scale;
                            let large_arc = if arc.sweep_angle() > PI { 1 } else { 0 };
                            let sweep = match arc.direction {
                                ArcDirection::Ccw => 1,
                                ArcDirection::Cw => 0,
                            };
                            format!(
                                "M {:.3} {:.3} A {:.3} {:.3} 0 {} {} {:.3} {:.3}",
                                from.x, from.y, radius, radius, large_arc, sweep, to.x, to.y
                            )
                        }
                    };
                    svg.push_str(&format!(
                        "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.3}\" \
                         stroke-linecap=\"round\"/>",
                        d, color, stroke
                    ));
                }
            }
        }

        svg.push_str("</svg>");
        svg
    }

    /// Computes the fit-to-view transform, or `None` for an empty trace.
    fn fit(&self, trace: &EmittedTrace) -> Option<Fit> {
        let (min, max) = trace.bounding_box()?;
        let available_width = self.width as f64 - 2.0 * self.margin;
        let available_height = self.height as f64 - 2.0 * self.margin;

        let pattern_width = max.x - min.x;
        let pattern_height = max.y - min.y;
        let scale = if pattern_width > 0.0 && pattern_height > 0.0 {
            (available_width / pattern_width)
                .min(available_height / pattern_height)
                .min(MAX_SCALE)
        } else {
            1.0
        };

        let scaled_width = pattern_width * scale;
        let scaled_height = pattern_height * scale;
        Some(Fit {
            scale,
            offset_x: (self.width as f64 - scaled_width) / 2.0 - min.x * scale,
            offset_y: (self.height as f64 - scaled_height) / 2.0 - min.y * scale,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Fit {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Fit {
    fn to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.offset_x, p.y * self.scale + self.offset_y)
    }
}

fn layer_color(layer: BoardLayer) -> &'static str {
    match layer {
        BoardLayer::EdgeCuts => "#808080",
        BoardLayer::FrontCopper => "#ff0000",
        BoardLayer::BackCopper => "#0000ff",
    }
}
