use bon::Builder;
use deckung_quantities::{
    distance::Kilometres,
    money::Francs,
    rate::{DailyRate, HourlyRate, KilometreRate},
    time::{Days, Hours},
};
use serde::{Deserialize, Serialize};

/// Inputs of a single job order.
///
/// The builder starts from zeros, while [`Default`] yields [`JobOrder::SAMPLE`]: a job file only
/// needs to mention what differs from the sample.
#[derive(Builder, Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
#[must_use]
pub struct JobOrder {
    #[builder(default)]
    pub revenue: Francs,

    #[builder(default)]
    pub material_cost: Francs,

    #[builder(default)]
    pub labor_hours: Hours,

    #[builder(default)]
    pub hourly_rate: HourlyRate,

    #[builder(default)]
    pub distance_km: Kilometres,

    /// Fuel cost of a single kilometre.
    #[builder(default)]
    pub fuel_cost_per_km: KilometreRate,

    /// Number of trips, each covering [`JobOrder::distance_km`].
    #[builder(default)]
    pub trip_count: f64,

    /// Income forgone for every day spent on this project.
    #[builder(default)]
    pub opportunity_cost_per_day: DailyRate,

    #[builder(default)]
    pub project_days: Days,

    #[builder(default)]
    pub admin_cost: Francs,

    #[builder(default)]
    pub insurance_cost: Francs,
}

impl JobOrder {
    pub const SAMPLE: Self = Self {
        revenue: Francs::new(100_000.0),
        material_cost: Francs::new(25_000.0),
        labor_hours: Hours::new(160.0),
        hourly_rate: HourlyRate::new(45.0),
        distance_km: Kilometres::new(50.0),
        fuel_cost_per_km: KilometreRate::new(0.35),
        trip_count: 20.0,
        opportunity_cost_per_day: DailyRate::new(200.0),
        project_days: Days::new(20.0),
        admin_cost: Francs::new(2_000.0),
        insurance_cost: Francs::new(1_500.0),
    };

    /// Raw field values keyed by their configuration names.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, f64); 11] {
        [
            ("revenue", self.revenue.into()),
            ("material_cost", self.material_cost.into()),
            ("labor_hours", self.labor_hours.into()),
            ("hourly_rate", self.hourly_rate.into()),
            ("distance_km", self.distance_km.into()),
            ("fuel_cost_per_km", self.fuel_cost_per_km.into()),
            ("trip_count", self.trip_count),
            ("opportunity_cost_per_day", self.opportunity_cost_per_day.into()),
            ("project_days", self.project_days.into()),
            ("admin_cost", self.admin_cost.into()),
            ("insurance_cost", self.insurance_cost.into()),
        ]
    }
}

impl Default for JobOrder {
    fn default() -> Self {
        Self::SAMPLE
    }
}
