use serde::{Deserialize, Serialize};

/// Allowed range and granularity of one numeric control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputBounds {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp into `[min, max]` and snap to the nearest step counted from `min`.
    #[must_use]
    pub fn normalize(&self, raw: f64) -> f64 {
        let clamped = raw.max(self.min).min(self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).max(self.min).min(self.max)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Which of the three calculator inputs a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    /// Starting amount
    Principal,
    /// Horizon in whole years
    Years,
    /// Annual rate in percent
    RatePercent,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::Principal => write!(f, "Principal"),
            InputField::Years => write!(f, "Years"),
            InputField::RatePercent => write!(f, "RatePercent"),
        }
    }
}

/// Notification sent to view bindings after an input's stored value changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputChange {
    pub field: InputField,
    pub value: f64,
}

/// Single source of truth for one numeric control.
///
/// Text boxes and sliders both write through [`BoundedInput::set`] and
/// re-render from the stored value; writing the value a view already shows
/// is a no-op, so two views bound to one input never feed each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedInput {
    value: f64,
    bounds: InputBounds,
}

impl BoundedInput {
    /// Create an input whose initial value is normalized into `bounds`.
    pub fn new(initial: f64, bounds: InputBounds) -> Self {
        let value = if initial.is_finite() {
            bounds.normalize(initial)
        } else {
            bounds.min
        };
        Self { value, bounds }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn bounds(&self) -> InputBounds {
        self.bounds
    }

    /// Store a new raw value. Returns the normalized value when it differs
    /// from the previous one, `None` when nothing changed or the input was
    /// not a finite number.
    pub fn set(&mut self, raw: f64) -> Option<f64> {
        if !raw.is_finite() {
            return None;
        }
        let next = self.bounds.normalize(raw);
        if next == self.value {
            return None;
        }
        self.value = next;
        Some(next)
    }
}
