use tracing::debug;

use crate::models::analytics::ProjectionSummary;
use crate::models::projection::ProjectionSeries;

/// Months per compounding period; periods are years.
const MONTHS_PER_PERIOD: f64 = 12.0;

/// Computes summary statistics over a projection: final value, gain, growth
/// percentage and average gains.
///
/// Undefined ratios are reported as 0 so that nothing non-finite reaches the UI.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize a series.
    ///
    /// Computes:
    /// - Final value (last point) and total gain against the principal
    /// - Growth percent, 0 when the principal is 0
    /// - Average yearly and monthly gain, 0 when the horizon is 0 periods
    pub fn summarize(&self, series: &ProjectionSeries) -> ProjectionSummary {
        let principal = finite_or_zero(series.first().map_or(0.0, |p| p.value));
        let final_value = finite_or_zero(series.last().map_or(principal, |p| p.value));
        let periods = series.last_period();

        let total_gain = final_value - principal;
        let growth_pct = if principal > 0.0 {
            total_gain / principal * 100.0
        } else {
            0.0
        };
        let (avg_yearly_gain, avg_monthly_gain) = if periods > 0 {
            let years = f64::from(periods);
            (total_gain / years, total_gain / (years * MONTHS_PER_PERIOD))
        } else {
            (0.0, 0.0)
        };

        let summary = ProjectionSummary {
            principal,
            final_value,
            total_gain: finite_or_zero(total_gain),
            growth_pct: finite_or_zero(growth_pct),
            avg_monthly_gain: finite_or_zero(avg_monthly_gain),
            avg_yearly_gain: finite_or_zero(avg_yearly_gain),
            periods,
        };
        debug!(
            final_value = summary.final_value,
            growth_pct = summary.growth_pct,
            "Projection summarized"
        );
        summary
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
