use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::chart::ChartSurface;
use super::input::InputBounds;
use super::projection::MAX_PERIODS;
use super::strategy::Strategy;

/// Display locale for currency and period labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Rubles, Russian plural forms
    #[default]
    Ru,
    /// US dollars, English labels
    En,
}

/// Calculator configuration: control ranges, starting values, chart surface, locale.
///
/// Missing fields in a JSON document fall back to [`Settings::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Chart drawing surface in pixels
    pub surface: ChartSurface,

    /// Starting amount range
    pub principal_bounds: InputBounds,

    /// Horizon range in years; step must be a whole number
    pub years_bounds: InputBounds,

    /// Annual rate range in percent
    pub rate_bounds: InputBounds,

    pub initial_principal: f64,
    pub initial_years: f64,
    pub initial_rate_percent: f64,

    /// Strategy marked active on start-up
    pub initial_strategy: Strategy,

    pub locale: Locale,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface: ChartSurface::default(),
            principal_bounds: InputBounds::new(10_000.0, 10_000_000.0, 1_000.0),
            years_bounds: InputBounds::new(1.0, 50.0, 1.0),
            rate_bounds: InputBounds::new(1.0, 30.0, 0.5),
            initial_principal: 100_000.0,
            initial_years: 10.0,
            initial_rate_percent: 12.0,
            initial_strategy: Strategy::Balanced,
            locale: Locale::Ru,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Check internal consistency. Called by `from_json` and by the calculator constructor.
    pub fn validate(&self) -> Result<(), CoreError> {
        let s = &self.surface;
        if ![s.width, s.height, s.padding].iter().all(|v| v.is_finite()) {
            return Err(CoreError::ValidationError(
                "chart surface dimensions must be finite".into(),
            ));
        }
        if s.padding < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "chart padding must not be negative, got {}",
                s.padding
            )));
        }
        if s.width <= 2.0 * s.padding || s.height <= 2.0 * s.padding {
            return Err(CoreError::ValidationError(format!(
                "chart surface {}x{} leaves no plot area with padding {}",
                s.width, s.height, s.padding
            )));
        }

        validate_bounds("principal", &self.principal_bounds, self.initial_principal)?;
        validate_bounds("years", &self.years_bounds, self.initial_years)?;
        validate_bounds("rate", &self.rate_bounds, self.initial_rate_percent)?;

        if self.principal_bounds.min < 0.0 {
            return Err(CoreError::ValidationError(
                "principal range must not include negative amounts".into(),
            ));
        }
        if self.years_bounds.min < 0.0
            || self.years_bounds.min.fract() != 0.0
            || self.years_bounds.step.fract() != 0.0
        {
            return Err(CoreError::ValidationError(
                "years range must start at a non-negative whole number and use a whole step"
                    .into(),
            ));
        }
        if self.years_bounds.max.fract() != 0.0 || self.years_bounds.max > f64::from(MAX_PERIODS)
        {
            return Err(CoreError::ValidationError(format!(
                "years range must end at a whole number no greater than {MAX_PERIODS}, got {}",
                self.years_bounds.max
            )));
        }
        if self.rate_bounds.min < -100.0 {
            return Err(CoreError::ValidationError(format!(
                "rate range must not go below -100%, got {}",
                self.rate_bounds.min
            )));
        }

        Ok(())
    }
}

fn validate_bounds(name: &str, bounds: &InputBounds, initial: f64) -> Result<(), CoreError> {
    if ![bounds.min, bounds.max, bounds.step, initial]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(CoreError::ValidationError(format!(
            "{name} range values must be finite"
        )));
    }
    if bounds.min > bounds.max {
        return Err(CoreError::ValidationError(format!(
            "{name} range is inverted: min {} > max {}",
            bounds.min, bounds.max
        )));
    }
    if bounds.step <= 0.0 {
        return Err(CoreError::ValidationError(format!(
            "{name} step must be positive, got {}",
            bounds.step
        )));
    }
    if !bounds.contains(initial) {
        return Err(CoreError::ValidationError(format!(
            "initial {name} {initial} is outside {}..={}",
            bounds.min, bounds.max
        )));
    }
    Ok(())
}
