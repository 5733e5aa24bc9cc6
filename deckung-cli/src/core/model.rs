//! Contribution margin model of a job order.

use std::fmt::{Display, Formatter};

use deckung_quantities::money::Francs;
use serde::{Serialize, Serializer};

use crate::core::job::JobOrder;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Material,
    Labor,
    Transport,
    Opportunity,
    Administration,
    Insurance,
}

impl CostCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Material => "Materialkosten",
            Self::Labor => "Arbeitskosten",
            Self::Transport => "Transportkosten",
            Self::Opportunity => "Opportunitätskosten",
            Self::Administration => "Verwaltungskosten",
            Self::Insurance => "Versicherungskosten",
        }
    }
}

impl Display for CostCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    /// Scales with the job: material, labor, transport.
    Variable,

    /// Incurred regardless of the job volume.
    Fixed,
}

impl CostKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Variable => "Variable Kosten",
            Self::Fixed => "Fixkosten",
        }
    }
}

impl Display for CostKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Named costs of one kind in display order.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct CostBreakdown {
    kind: CostKind,
    entries: Vec<(CostCategory, Francs)>,
}

impl CostBreakdown {
    pub fn new(kind: CostKind, entries: impl IntoIterator<Item = (CostCategory, Francs)>) -> Self {
        Self { kind, entries: entries.into_iter().collect() }
    }

    #[must_use]
    pub const fn kind(&self) -> CostKind {
        self.kind
    }

    pub fn iter(&self) -> impl Iterator<Item = (CostCategory, Francs)> + '_ {
        self.entries.iter().copied()
    }

    pub fn total(&self) -> Francs {
        self.iter().map(|(_, amount)| amount).sum()
    }
}

impl Serialize for CostBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Result of evaluating a [`JobOrder`].
///
/// Every evaluation starts from scratch, nothing is carried over between calls.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Evaluation {
    pub revenue: Francs,
    pub variable_costs: CostBreakdown,
    pub fixed_costs: CostBreakdown,
    pub total_variable_costs: Francs,

    /// Revenue minus the variable costs («Deckungsbeitrag»).
    pub contribution_margin: Francs,

    pub total_fixed_costs: Francs,

    /// Contribution margin minus the fixed costs («Betriebsergebnis»).
    pub operating_result: Francs,
}

impl Evaluation {
    pub fn evaluate(job: &JobOrder) -> Self {
        let labor_cost = job.labor_hours * job.hourly_rate;
        let transport_cost = job.distance_km * job.fuel_cost_per_km * job.trip_count;

        let variable_costs = CostBreakdown::new(
            CostKind::Variable,
            [
                (CostCategory::Material, job.material_cost),
                (CostCategory::Labor, labor_cost),
                (CostCategory::Transport, transport_cost),
            ],
        );
        let fixed_costs = CostBreakdown::new(
            CostKind::Fixed,
            [
                (CostCategory::Opportunity, job.opportunity_cost_per_day * job.project_days),
                (CostCategory::Administration, job.admin_cost),
                (CostCategory::Insurance, job.insurance_cost),
            ],
        );

        let total_variable_costs = variable_costs.total();
        let contribution_margin = job.revenue - total_variable_costs;
        let total_fixed_costs = fixed_costs.total();
        let operating_result = contribution_margin - total_fixed_costs;

        Self {
            revenue: job.revenue,
            variable_costs,
            fixed_costs,
            total_variable_costs,
            contribution_margin,
            total_fixed_costs,
            operating_result,
        }
    }
}

impl From<&JobOrder> for Evaluation {
    fn from(job: &JobOrder) -> Self {
        Self::evaluate(job)
    }
}
