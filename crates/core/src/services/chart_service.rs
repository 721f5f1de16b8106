use tracing::{debug, instrument, trace};

use crate::models::chart::{ChartGeometry, ChartMarker, ChartSurface, PixelPoint};
use crate::models::projection::ProjectionSeries;

/// Linear map from a data domain onto a pixel range.
///
/// A zero-width domain maps every input to the start of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}

/// Turns projection series into chart-ready pixel geometry.
///
/// The core computes all the coordinates, the host UI only draws them:
/// - a closed area outline against the baseline
/// - the connecting line
/// - one marker per period for hover tooltips
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Map a series onto `surface`.
    ///
    /// X spans `[padding, width - padding]` over periods `0..=last`, Y spans
    /// `[height - padding, padding]` over values `0..=max_value`. A single-point
    /// series sits at `x = padding`; a series whose maximum is not positive
    /// lies flat on the baseline.
    #[instrument(level = "debug", skip(self, series), fields(points = series.len()))]
    pub fn map_to_geometry(&self, series: &ProjectionSeries, surface: &ChartSurface) -> ChartGeometry {
        if series.is_empty() {
            debug!("Empty series, returning empty geometry");
            return ChartGeometry::default();
        }

        let baseline = surface.baseline();
        let x_scale = LinearScale::new(
            (0.0, f64::from(series.last_period())),
            (surface.padding, surface.width - surface.padding),
        );
        let y_scale = LinearScale::new(
            (0.0, series.max_value.max(0.0)),
            (baseline, surface.padding),
        );

        let line_path: Vec<PixelPoint> = series
            .points
            .iter()
            .map(|p| PixelPoint {
                x: x_scale.map(f64::from(p.period)),
                y: y_scale.map(p.value),
            })
            .collect();

        let markers: Vec<ChartMarker> = series
            .points
            .iter()
            .zip(&line_path)
            .map(|(p, &position)| ChartMarker {
                position,
                period: p.period,
                value: p.value,
            })
            .collect();

        // Close the polygon along the baseline: down from the last point, back to the first.
        let mut area_outline = Vec::with_capacity(line_path.len() + 2);
        area_outline.extend_from_slice(&line_path);
        area_outline.push(PixelPoint {
            x: x_scale.map(f64::from(series.last_period())),
            y: baseline,
        });
        area_outline.push(PixelPoint {
            x: x_scale.map(0.0),
            y: baseline,
        });

        trace!(?x_scale, ?y_scale, "Chart scales");
        debug!(
            line_points = line_path.len(),
            area_points = area_outline.len(),
            "Chart geometry mapped"
        );

        ChartGeometry {
            area_outline,
            line_path,
            markers,
        }
    }

    /// Find the marker horizontally closest to pointer position `x`.
    /// Ties go to the earlier period. `None` only for an empty geometry.
    #[must_use]
    pub fn nearest_marker<'a>(&self, geometry: &'a ChartGeometry, x: f64) -> Option<&'a ChartMarker> {
        if !x.is_finite() {
            return None;
        }
        let mut best: Option<(&ChartMarker, f64)> = None;
        for marker in &geometry.markers {
            let distance = (marker.position.x - x).abs();
            match best {
                Some((_, d)) if distance >= d => {}
                _ => best = Some((marker, distance)),
            }
        }
        best.map(|(marker, _)| marker)
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
