//! Waterfall chart layout: turns signed steps into floating bar segments.

use std::fmt::{Display, Formatter};

use deckung_quantities::money::Francs;
use serde::Serialize;

use crate::core::{
    model::Evaluation,
    palette::{self, Rgb},
};

/// Label offset relative to the revenue magnitude.
const LABEL_OFFSET: f64 = 0.01;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Revenue,
    VariableCosts,
    ContributionMargin,
    FixedCosts,
    OperatingResult,
}

impl Stage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Umsatz",
            Self::VariableCosts => "Variable Kosten",
            Self::ContributionMargin => "Deckungsbeitrag",
            Self::FixedCosts => "Fixkosten",
            Self::OperatingResult => "Betriebsergebnis",
        }
    }

    /// Bar color; only the operating result depends on the amount sign.
    pub fn color(self, amount: Francs) -> Rgb {
        match self {
            Self::Revenue => palette::REVENUE,
            Self::VariableCosts => palette::VARIABLE_COSTS,
            Self::ContributionMargin => palette::CONTRIBUTION_MARGIN,
            Self::FixedCosts => palette::FIXED_COSTS,
            Self::OperatingResult if amount >= Francs::ZERO => palette::PROFIT,
            Self::OperatingResult => palette::LOSS,
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How a step is placed relative to the running total.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Drawn from zero and advances the running total.
    Anchor,

    /// Drawn from zero, restates what the preceding flows already accumulated.
    Subtotal,

    /// Stacked on the running total and advances it.
    Flow,
}

impl Role {
    const fn starts_at_zero(self) -> bool {
        matches!(self, Self::Anchor | Self::Subtotal)
    }

    const fn advances(self) -> bool {
        matches!(self, Self::Anchor | Self::Flow)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub stage: Stage,
    pub amount: Francs,
    pub role: Role,
}

impl Step {
    pub const fn new(stage: Stage, amount: Francs, role: Role) -> Self {
        Self { stage, amount, role }
    }

    /// The contribution margin breakdown: revenue, minus variable costs, minus fixed costs.
    pub fn contribution_margin(evaluation: &Evaluation) -> [Self; 5] {
        [
            Self::new(Stage::Revenue, evaluation.revenue, Role::Anchor),
            Self::new(Stage::VariableCosts, -evaluation.total_variable_costs, Role::Flow),
            Self::new(Stage::ContributionMargin, evaluation.contribution_margin, Role::Subtotal),
            Self::new(Stage::FixedCosts, -evaluation.total_fixed_costs, Role::Flow),
            Self::new(Stage::OperatingResult, evaluation.operating_result, Role::Subtotal),
        ]
    }
}

/// Laid out bar: `end - start` always equals the step amount.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Segment {
    pub stage: Stage,
    pub amount: Francs,
    pub start: Francs,
    pub end: Francs,
}

impl Segment {
    pub fn color(&self) -> Rgb {
        self.stage.color(self.amount)
    }

    pub fn low(&self) -> Francs {
        self.start.min(self.end)
    }

    pub fn high(&self) -> Francs {
        self.start.max(self.end)
    }

    /// Place the value label next to the bar end, pushed away from the bar by 1% of the revenue.
    pub fn label(&self, revenue: Francs) -> Label {
        let offset = revenue.abs() * LABEL_OFFSET;
        if self.amount.is_negative() {
            Label { position: self.end - offset, placement: Placement::Below }
        } else {
            Label { position: self.end + offset, placement: Placement::Above }
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Above,
    Below,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub position: Francs,
    pub placement: Placement,
}

/// Lay the steps out in order.
pub fn layout(steps: impl IntoIterator<Item = Step>) -> Vec<Segment> {
    let mut running_total = Francs::ZERO;
    steps
        .into_iter()
        .map(|step| {
            let start = if step.role.starts_at_zero() { Francs::ZERO } else { running_total };
            if step.role.advances() {
                running_total += step.amount;
            }
            Segment { stage: step.stage, amount: step.amount, start, end: start + step.amount }
        })
        .collect()
}
