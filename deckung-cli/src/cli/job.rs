//! Job order arguments: sample values, overlaid by a TOML job file, overlaid by flags.

use std::{fs, path::Path};

use clap::Parser;
use deckung_quantities::{
    distance::Kilometres,
    money::Francs,
    rate::{DailyRate, HourlyRate, KilometreRate},
    time::{Days, Hours},
};

use crate::{core::job::JobOrder, prelude::*};

#[derive(Parser)]
pub struct JobOrderArgs {
    /// Revenue in francs.
    #[clap(long, env = "JOB_REVENUE")]
    pub revenue: Option<Francs>,

    /// Material costs in francs.
    #[clap(long, env = "JOB_MATERIAL_COST")]
    pub material_cost: Option<Francs>,

    #[clap(long, env = "JOB_LABOR_HOURS")]
    pub labor_hours: Option<Hours>,

    /// Hourly labor rate in francs.
    #[clap(long, env = "JOB_HOURLY_RATE")]
    pub hourly_rate: Option<HourlyRate>,

    /// One-way distance to the site in kilometres.
    #[clap(long, env = "JOB_DISTANCE_KM")]
    pub distance_km: Option<Kilometres>,

    /// Fuel cost per kilometre in francs.
    #[clap(long, env = "JOB_FUEL_COST_PER_KM")]
    pub fuel_cost_per_km: Option<KilometreRate>,

    #[clap(long, env = "JOB_TRIP_COUNT")]
    pub trip_count: Option<f64>,

    /// Opportunity costs per project day in francs.
    #[clap(long, env = "JOB_OPPORTUNITY_COST_PER_DAY")]
    pub opportunity_cost_per_day: Option<DailyRate>,

    #[clap(long, env = "JOB_PROJECT_DAYS")]
    pub project_days: Option<Days>,

    /// Administration costs in francs.
    #[clap(long, env = "JOB_ADMIN_COST")]
    pub admin_cost: Option<Francs>,

    /// Insurance costs in francs.
    #[clap(long, env = "JOB_INSURANCE_COST")]
    pub insurance_cost: Option<Francs>,
}

impl JobOrderArgs {
    /// Overlay the explicitly specified values.
    pub fn apply(&self, job: JobOrder) -> JobOrder {
        JobOrder {
            revenue: self.revenue.unwrap_or(job.revenue),
            material_cost: self.material_cost.unwrap_or(job.material_cost),
            labor_hours: self.labor_hours.unwrap_or(job.labor_hours),
            hourly_rate: self.hourly_rate.unwrap_or(job.hourly_rate),
            distance_km: self.distance_km.unwrap_or(job.distance_km),
            fuel_cost_per_km: self.fuel_cost_per_km.unwrap_or(job.fuel_cost_per_km),
            trip_count: self.trip_count.unwrap_or(job.trip_count),
            opportunity_cost_per_day: self
                .opportunity_cost_per_day
                .unwrap_or(job.opportunity_cost_per_day),
            project_days: self.project_days.unwrap_or(job.project_days),
            admin_cost: self.admin_cost.unwrap_or(job.admin_cost),
            insurance_cost: self.insurance_cost.unwrap_or(job.insurance_cost),
        }
    }

    /// Resolve the final job order and make sure that it is valid.
    #[instrument(skip_all)]
    pub fn resolve(&self, job_file: Option<&Path>) -> Result<JobOrder> {
        let base = match job_file {
            Some(path) => read_job_file(path)?,
            None => JobOrder::SAMPLE,
        };
        let job = self.apply(base);
        validate(&job)?;
        Ok(job)
    }
}

pub fn read_job_file(path: &Path) -> Result<JobOrder> {
    info!(path = %path.display(), "reading the job file…");
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("failed to parse `{}`", path.display()))
}

/// Inputs must be finite and non-negative, the model itself does not check anything.
pub fn validate(job: &JobOrder) -> Result {
    for (name, value) in job.fields() {
        ensure!(value.is_finite(), "`{name}` must be a finite number, got `{value}`");
        ensure!(value >= 0.0, "`{name}` must not be negative, got `{value}`");
    }
    Ok(())
}
