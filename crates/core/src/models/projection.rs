use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Upper bound on the number of compounding periods a single projection may span.
pub const MAX_PERIODS: u32 = 1200;

/// Validated inputs for one projection run.
///
/// Only constructible through [`ProjectionParameters::new`] or
/// [`ProjectionParameters::from_raw`], so a value of this type always
/// satisfies `principal >= 0`, finite rate and `periods <= MAX_PERIODS`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectionParameters")]
pub struct ProjectionParameters {
    /// Initial amount before any growth is applied
    principal: f64,

    /// Fractional growth per period (0.12 = 12%). May be negative.
    periodic_rate: f64,

    /// Number of whole compounding periods
    periods: u32,
}

impl ProjectionParameters {
    /// Validate and build parameters from an integer period count.
    pub fn new(principal: f64, periodic_rate: f64, periods: i64) -> Result<Self, CoreError> {
        if !principal.is_finite() {
            return Err(CoreError::InvalidArgument(format!(
                "principal must be a finite number, got {principal}"
            )));
        }
        if principal < 0.0 {
            return Err(CoreError::InvalidArgument(format!(
                "principal must not be negative, got {principal}"
            )));
        }
        if !periodic_rate.is_finite() {
            return Err(CoreError::InvalidArgument(format!(
                "periodic rate must be a finite number, got {periodic_rate}"
            )));
        }
        if periods < 0 {
            return Err(CoreError::InvalidArgument(format!(
                "periods must not be negative, got {periods}"
            )));
        }
        if periods > i64::from(MAX_PERIODS) {
            return Err(CoreError::InvalidArgument(format!(
                "periods must not exceed {MAX_PERIODS}, got {periods}"
            )));
        }

        Ok(Self {
            principal,
            periodic_rate,
            periods: periods as u32,
        })
    }

    /// Build parameters from raw control values, where the horizon arrives as a float.
    /// Rejects fractional and non-finite period counts.
    pub fn from_raw(principal: f64, periodic_rate: f64, periods: f64) -> Result<Self, CoreError> {
        if !periods.is_finite() || periods.fract() != 0.0 {
            return Err(CoreError::InvalidArgument(format!(
                "periods must be a whole number, got {periods}"
            )));
        }
        if periods < 0.0 || periods > f64::from(MAX_PERIODS) {
            return Err(CoreError::InvalidArgument(format!(
                "periods must be within 0..={MAX_PERIODS}, got {periods}"
            )));
        }
        Self::new(principal, periodic_rate, periods as i64)
    }

    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal
    }

    #[must_use]
    pub fn periodic_rate(&self) -> f64 {
        self.periodic_rate
    }

    #[must_use]
    pub fn periods(&self) -> u32 {
        self.periods
    }
}

/// Unchecked wire form of [`ProjectionParameters`]; deserialization goes
/// through [`ProjectionParameters::new`].
#[derive(Deserialize)]
struct RawProjectionParameters {
    principal: f64,
    periodic_rate: f64,
    periods: i64,
}

impl TryFrom<RawProjectionParameters> for ProjectionParameters {
    type Error = CoreError;

    fn try_from(raw: RawProjectionParameters) -> Result<Self, Self::Error> {
        Self::new(raw.principal, raw.periodic_rate, raw.periods)
    }
}

/// Projected amount at one whole period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Period index, 0 is the starting point
    pub period: u32,

    /// Projected amount at this period
    pub value: f64,
}

/// The full projection: one point per period from 0 through N, ascending.
///
/// Regenerated from scratch whenever an input changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// Points ordered by period ascending
    pub points: Vec<ProjectionPoint>,

    /// Largest `value` across all points
    pub max_value: f64,
}

impl ProjectionSeries {
    /// Wrap a list of points, computing `max_value`.
    /// An empty list yields a `max_value` of 0.
    pub fn from_points(points: Vec<ProjectionPoint>) -> Self {
        let max_value = points
            .iter()
            .map(|p| p.value)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
            .unwrap_or(0.0);
        Self { points, max_value }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&ProjectionPoint> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Period of the final point (0 for an empty series).
    #[must_use]
    pub fn last_period(&self) -> u32 {
        self.points.last().map_or(0, |p| p.period)
    }
}
