use serde::{Deserialize, Serialize};

/// Summary statistics derived from a projection.
///
/// Figures that would be undefined (division by a zero principal or a zero
/// horizon) are reported as 0, never as NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Starting amount (value at period 0)
    pub principal: f64,

    /// Value at the last period
    pub final_value: f64,

    /// Absolute gain: final_value - principal (negative for depreciation)
    pub total_gain: f64,

    /// Percentage growth: (total_gain / principal) * 100, or 0 when principal is 0
    pub growth_pct: f64,

    /// total_gain / (periods * 12), or 0 when periods is 0
    pub avg_monthly_gain: f64,

    /// total_gain / periods, or 0 when periods is 0
    pub avg_yearly_gain: f64,

    /// Horizon in whole periods
    pub periods: u32,
}
