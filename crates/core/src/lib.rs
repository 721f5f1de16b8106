pub mod errors;
pub mod models;
pub mod services;

use models::{
    chart::ChartSurface,
    input::{BoundedInput, InputChange, InputField},
    projection::ProjectionParameters,
    settings::Settings,
    strategy::Strategy,
    view::{DisplayText, ProjectionView, Tooltip},
};
use services::{
    analytics_service::AnalyticsService,
    chart_service::ChartService,
    format_service::{formatter_for, AmountFormatter},
    projection_service::ProjectionService,
};
use tracing::{debug, warn};

use errors::CoreError;

type InputListener = Box<dyn FnMut(&InputChange)>;

/// Main entry point for the growth calculator core library.
///
/// Headless presentation state: owns the three inputs (principal, years,
/// annual rate), the active strategy preset and the services. The host UI
/// binds its controls to the inputs, calls [`GrowthCalculator::calculate`]
/// after every change and draws the returned view.
#[must_use]
pub struct GrowthCalculator {
    settings: Settings,
    principal: BoundedInput,
    years: BoundedInput,
    rate_percent: BoundedInput,
    strategy: Strategy,
    surface: ChartSurface,
    projection_service: ProjectionService,
    chart_service: ChartService,
    analytics_service: AnalyticsService,
    formatter: Box<dyn AmountFormatter>,
    listeners: Vec<InputListener>,
}

impl std::fmt::Debug for GrowthCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowthCalculator")
            .field("principal", &self.principal.value())
            .field("years", &self.years.value())
            .field("rate_percent", &self.rate_percent.value())
            .field("strategy", &self.strategy)
            .field("surface", &self.surface)
            .field("locale", &self.settings.locale)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GrowthCalculator {
    /// Create a calculator with default settings.
    pub fn new() -> Self {
        Self::build(Settings::default())
    }

    /// Create a calculator from custom settings. Settings are validated first.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(settings))
    }

    /// Create a calculator from a JSON settings document.
    pub fn from_settings_json(json: &str) -> Result<Self, CoreError> {
        let settings = Settings::from_json(json)?;
        Ok(Self::build(settings))
    }

    // ── View Bindings ───────────────────────────────────────────────

    /// Register a view binding. It is called once for every input whose
    /// stored value actually changes, never for writes that change nothing.
    pub fn subscribe(&mut self, listener: impl FnMut(&InputChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ── Inputs ──────────────────────────────────────────────────────

    /// Write a raw control value into one input.
    /// Clamps and snaps it to the input's bounds and returns the stored value.
    pub fn set_input(&mut self, field: InputField, raw: f64) -> f64 {
        let input = match field {
            InputField::Principal => &mut self.principal,
            InputField::Years => &mut self.years,
            InputField::RatePercent => &mut self.rate_percent,
        };

        if !raw.is_finite() {
            warn!(%field, raw, "Ignoring non-finite input value");
            return input.value();
        }

        match input.set(raw) {
            Some(value) => {
                if value != raw {
                    warn!(%field, raw, value, "Input value clamped");
                }
                let change = InputChange { field, value };
                for listener in &mut self.listeners {
                    listener(&change);
                }
                value
            }
            None => input.value(),
        }
    }

    pub fn set_principal(&mut self, raw: f64) -> f64 {
        self.set_input(InputField::Principal, raw)
    }

    pub fn set_years(&mut self, raw: f64) -> f64 {
        self.set_input(InputField::Years, raw)
    }

    pub fn set_rate_percent(&mut self, raw: f64) -> f64 {
        self.set_input(InputField::RatePercent, raw)
    }

    #[must_use]
    pub fn input(&self, field: InputField) -> &BoundedInput {
        match field {
            InputField::Principal => &self.principal,
            InputField::Years => &self.years,
            InputField::RatePercent => &self.rate_percent,
        }
    }

    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal.value()
    }

    #[must_use]
    pub fn years(&self) -> f64 {
        self.years.value()
    }

    #[must_use]
    pub fn rate_percent(&self) -> f64 {
        self.rate_percent.value()
    }

    // ── Strategy Presets ────────────────────────────────────────────

    /// Mark `strategy` active and apply its default rate.
    /// Returns the rate actually stored (clamped to the configured rate bounds).
    pub fn set_strategy(&mut self, strategy: Strategy) -> f64 {
        self.strategy = strategy;
        let rate = strategy.rate_range().current;
        debug!(%strategy, rate, "Strategy selected");
        self.set_rate_percent(rate)
    }

    /// Same as [`GrowthCalculator::set_strategy`], by preset name (e.g. "aggressive").
    pub fn set_strategy_by_name(&mut self, name: &str) -> Result<f64, CoreError> {
        let strategy: Strategy = name.parse()?;
        Ok(self.set_strategy(strategy))
    }

    /// Currently active strategy preset.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    // ── Surface & Settings ──────────────────────────────────────────

    /// Resize the chart surface. The surface must leave a positive plot area.
    pub fn set_surface(&mut self, surface: ChartSurface) -> Result<(), CoreError> {
        let mut candidate = self.settings.clone();
        candidate.surface = surface;
        candidate.validate()?;
        self.surface = surface;
        Ok(())
    }

    #[must_use]
    pub fn surface(&self) -> ChartSurface {
        self.surface
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn formatter(&self) -> &dyn AmountFormatter {
        self.formatter.as_ref()
    }

    // ── Calculation ─────────────────────────────────────────────────

    /// Current inputs as projection parameters (rate converted from percent).
    pub fn parameters(&self) -> Result<ProjectionParameters, CoreError> {
        ProjectionParameters::from_raw(
            self.principal.value(),
            self.rate_percent.value() / 100.0,
            self.years.value(),
        )
    }

    /// Recompute the series, summary and chart geometry from the current inputs.
    pub fn calculate(&self) -> Result<ProjectionView, CoreError> {
        let parameters = self.parameters()?;
        let series = self.projection_service.project_parameters(&parameters);
        let summary = self.analytics_service.summarize(&series);
        let geometry = self.chart_service.map_to_geometry(&series, &self.surface);

        Ok(ProjectionView {
            parameters,
            series,
            summary,
            geometry,
        })
    }

    /// Format a view's summary for display.
    #[must_use]
    pub fn display_text(&self, view: &ProjectionView) -> DisplayText {
        let f = self.formatter.as_ref();
        let s = &view.summary;
        DisplayText {
            final_amount: f.currency(s.final_value),
            total_gain: f.currency(s.total_gain),
            growth_pct: f.percent(s.growth_pct),
            monthly_gain: f.currency(s.avg_monthly_gain),
            yearly_gain: f.currency(s.avg_yearly_gain),
            horizon: f.period_label(view.parameters.periods()),
        }
    }

    /// Tooltip for the chart point nearest to pointer x-coordinate `x`.
    #[must_use]
    pub fn tooltip(&self, view: &ProjectionView, x: f64) -> Option<Tooltip> {
        let marker = self.chart_service.nearest_marker(&view.geometry, x)?;
        Some(Tooltip {
            period: marker.period,
            label: self.formatter.point_label(marker.period),
            amount: self.formatter.currency(marker.value),
            x: marker.position.x,
            y: marker.position.y,
        })
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: Settings) -> Self {
        let principal = BoundedInput::new(settings.initial_principal, settings.principal_bounds);
        let years = BoundedInput::new(settings.initial_years, settings.years_bounds);
        let rate_percent =
            BoundedInput::new(settings.initial_rate_percent, settings.rate_bounds);
        let formatter = formatter_for(settings.locale);

        Self {
            principal,
            years,
            rate_percent,
            strategy: settings.initial_strategy,
            surface: settings.surface,
            projection_service: ProjectionService::new(),
            chart_service: ChartService::new(),
            analytics_service: AnalyticsService::new(),
            formatter,
            listeners: Vec::new(),
            settings,
        }
    }
}

impl Default for GrowthCalculator {
    fn default() -> Self {
        Self::new()
    }
}
