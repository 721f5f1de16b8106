use serde::{Deserialize, Serialize};

use super::analytics::ProjectionSummary;
use super::chart::ChartGeometry;
use super::projection::{ProjectionParameters, ProjectionSeries};

/// Everything the host needs to render one state of the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionView {
    pub parameters: ProjectionParameters,
    pub series: ProjectionSeries,
    pub summary: ProjectionSummary,
    pub geometry: ChartGeometry,
}

/// Formatted summary strings, one per output field of the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayText {
    pub final_amount: String,
    pub total_gain: String,
    pub growth_pct: String,
    pub monthly_gain: String,
    pub yearly_gain: String,

    /// Horizon with its unit, e.g. "10 лет"
    pub horizon: String,
}

/// Hover tooltip content for one chart point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub period: u32,

    /// "Начало" / "3 года" style heading
    pub label: String,

    /// Formatted amount at this period
    pub amount: String,

    /// Marker position the tooltip anchors to
    pub x: f64,
    pub y: f64,
}
