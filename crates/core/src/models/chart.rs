use serde::{Deserialize, Serialize};

/// Drawing-surface descriptor the chart is mapped onto, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSurface {
    pub width: f64,
    pub height: f64,

    /// Blank margin kept on every side of the plot area
    pub padding: f64,
}

impl ChartSurface {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Y-coordinate of the zero line (bottom of the plot area).
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }
}

impl Default for ChartSurface {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            padding: 40.0,
        }
    }
}

/// A position on the drawing surface. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// A per-point marker: where to draw it, plus the data it stands for
/// so the host can attach hover behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMarker {
    pub position: PixelPoint,
    pub period: u32,
    pub value: f64,
}

/// Pixel-space geometry for one projection.
///
/// The core computes the coordinates, the host only draws them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    /// Closed fill region: every series point, then the two baseline corners
    pub area_outline: Vec<PixelPoint>,

    /// Open polyline through every series point
    pub line_path: Vec<PixelPoint>,

    /// One marker per series point
    pub markers: Vec<ChartMarker>,
}

impl ChartGeometry {
    /// SVG path data for the filled area (`M x y L x y ... Z`).
    #[must_use]
    pub fn area_svg_path(&self) -> String {
        let mut path = svg_polyline(&self.area_outline);
        if !path.is_empty() {
            path.push_str(" Z");
        }
        path
    }

    /// SVG path data for the line (`M x y L x y ...`).
    #[must_use]
    pub fn line_svg_path(&self) -> String {
        svg_polyline(&self.line_path)
    }
}

fn svg_polyline(points: &[PixelPoint]) -> String {
    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        path.push_str(&format!("{cmd} {} {}", p.x, p.y));
    }
    path
}
