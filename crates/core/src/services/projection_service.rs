use tracing::{debug, instrument};

use crate::errors::CoreError;
use crate::models::projection::{ProjectionParameters, ProjectionPoint, ProjectionSeries};

/// Computes compound-growth projections.
///
/// Pure business logic: no I/O, no state.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Project `principal` forward over `periods` whole periods at `periodic_rate`.
    ///
    /// Returns `periods + 1` points. Fails with `InvalidArgument` for a negative
    /// principal, negative or oversized period count, or non-finite input.
    pub fn project(
        &self,
        principal: f64,
        periodic_rate: f64,
        periods: i64,
    ) -> Result<ProjectionSeries, CoreError> {
        let params = ProjectionParameters::new(principal, periodic_rate, periods)?;
        Ok(self.project_parameters(&params))
    }

    /// Project already validated parameters. Infallible.
    ///
    /// Each value is computed directly as `principal * (1 + rate)^i` rather
    /// than by multiplying the previous value, so rounding error does not
    /// build up across periods. A zero principal stays zero at every period,
    /// and values beyond the range of `f64` saturate at `±f64::MAX`.
    #[instrument(level = "debug", skip(self), fields(periods = params.periods()))]
    pub fn project_parameters(&self, params: &ProjectionParameters) -> ProjectionSeries {
        let growth = 1.0 + params.periodic_rate();
        let points: Vec<ProjectionPoint> = (0..=params.periods())
            .map(|period| ProjectionPoint {
                period,
                value: compound(params.principal(), growth, period),
            })
            .collect();

        let series = ProjectionSeries::from_points(points);
        debug!(
            points = series.len(),
            max_value = series.max_value,
            "Projection computed"
        );
        series
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}

fn compound(principal: f64, growth: f64, period: u32) -> f64 {
    if principal == 0.0 {
        return 0.0;
    }
    // period <= MAX_PERIODS, well inside i32
    let value = principal * growth.powi(period as i32);
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-f64::MAX, f64::MAX)
    }
}
