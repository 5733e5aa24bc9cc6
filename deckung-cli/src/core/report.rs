use serde::Serialize;

use crate::core::{
    cost_table::{self, CostTableRow},
    job::JobOrder,
    model::Evaluation,
    palette::Rgb,
    waterfall::{self, Label, Segment, Step},
};

/// Waterfall segment together with its presentation attributes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    #[serde(flatten)]
    pub segment: Segment,

    pub color: Rgb,
    pub label: Label,
}

/// Everything produced for a single job order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Report {
    pub job: JobOrder,

    #[serde(flatten)]
    pub evaluation: Evaluation,

    pub waterfall: Vec<Bar>,
    pub cost_table: Vec<CostTableRow>,
}

impl Report {
    pub fn new(job: JobOrder) -> Self {
        let evaluation = Evaluation::evaluate(&job);
        let waterfall = waterfall::layout(Step::contribution_margin(&evaluation))
            .into_iter()
            .map(|segment| Bar {
                segment,
                color: segment.color(),
                label: segment.label(evaluation.revenue),
            })
            .collect();
        let cost_table = cost_table::assemble(&evaluation);
        Self { job, evaluation, waterfall, cost_table }
    }
}
