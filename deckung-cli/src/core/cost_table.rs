use deckung_quantities::money::Francs;
use serde::Serialize;

use crate::core::model::{CostCategory, CostKind, Evaluation};

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CostTableRow {
    pub category: CostCategory,
    pub kind: CostKind,
    pub amount: Francs,
}

/// Variable costs followed by the fixed costs, each tagged with its kind.
#[must_use]
pub fn assemble(evaluation: &Evaluation) -> Vec<CostTableRow> {
    [&evaluation.variable_costs, &evaluation.fixed_costs]
        .into_iter()
        .flat_map(|breakdown| {
            breakdown.iter().map(move |(category, amount)| CostTableRow {
                category,
                kind: breakdown.kind(),
                amount,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::job::JobOrder;

    #[test]
    fn assemble_ok() {
        let rows = assemble(&Evaluation::evaluate(&JobOrder::SAMPLE));
        assert_eq!(
            rows,
            [
                CostTableRow {
                    category: CostCategory::Material,
                    kind: CostKind::Variable,
                    amount: Francs::from(25_000),
                },
                CostTableRow {
                    category: CostCategory::Labor,
                    kind: CostKind::Variable,
                    amount: Francs::from(7_200),
                },
                CostTableRow {
                    category: CostCategory::Transport,
                    kind: CostKind::Variable,
                    amount: Francs::from(350),
                },
                CostTableRow {
                    category: CostCategory::Opportunity,
                    kind: CostKind::Fixed,
                    amount: Francs::from(4_000),
                },
                CostTableRow {
                    category: CostCategory::Administration,
                    kind: CostKind::Fixed,
                    amount: Francs::from(2_000),
                },
                CostTableRow {
                    category: CostCategory::Insurance,
                    kind: CostKind::Fixed,
                    amount: Francs::from(1_500),
                },
            ],
        );
    }
}
