use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use deckung_quantities::money::Francs;

use crate::{
    chart::Scale,
    core::{
        cost_table::CostTableRow,
        model::Evaluation,
        palette::Rgb,
        report::Bar,
        waterfall::{Placement, Stage},
    },
    fmt::FormattedAmount,
};

/// Width of the bar column in characters.
const CHART_WIDTH: usize = 40;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb { r: rgb.red, g: rgb.green, b: rgb.blue }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn amount_cell(amount: Francs) -> Cell {
    Cell::new(FormattedAmount::cents(amount)).set_alignment(CellAlignment::Right)
}

pub fn build_summary_table(evaluation: &Evaluation) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Ergebnis", "CHF"]);
    for (stage, amount) in [
        (Stage::Revenue, evaluation.revenue),
        (Stage::VariableCosts, evaluation.total_variable_costs),
        (Stage::ContributionMargin, evaluation.contribution_margin),
        (Stage::FixedCosts, evaluation.total_fixed_costs),
        (Stage::OperatingResult, evaluation.operating_result),
    ] {
        let name = Cell::new(stage);
        let name = if stage == Stage::OperatingResult {
            name.add_attribute(Attribute::Bold).fg(stage.color(amount).into())
        } else {
            name
        };
        table.add_row(vec![name, amount_cell(amount)]);
    }
    table
}

pub fn build_waterfall_table(bars: &[Bar]) -> Table {
    let scale = Scale::fitting(bars.iter().map(|bar| &bar.segment), CHART_WIDTH);

    let mut table = new_table();
    table.set_header(vec!["Kategorie", "Betrag", "Start", "Ende", "Wasserfall", "Beschriftung"]);
    for bar in bars {
        let segment = &bar.segment;
        let marker = match bar.label.placement {
            Placement::Above => '▲',
            Placement::Below => '▼',
        };
        table.add_row(vec![
            Cell::new(segment.stage).fg(bar.color.into()),
            amount_cell(segment.amount),
            amount_cell(segment.start).add_attribute(Attribute::Dim),
            amount_cell(segment.end).add_attribute(Attribute::Dim),
            Cell::new(scale.draw(segment)).fg(bar.color.into()),
            Cell::new(format!("{marker} {}", FormattedAmount::whole(segment.amount)))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_cost_table(rows: &[CostTableRow]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Kostenkategorie", "Typ", "Betrag in CHF"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.category),
            Cell::new(row.kind).add_attribute(Attribute::Dim),
            amount_cell(row.amount),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{job::JobOrder, report::Report};

    #[test]
    fn summary_table_ok() {
        let rendered = build_summary_table(&Evaluation::evaluate(&JobOrder::SAMPLE)).to_string();
        assert!(rendered.contains("Deckungsbeitrag"));
        assert!(rendered.contains("67'450.00"));
        assert!(rendered.contains("59'950.00"));
    }

    #[test]
    fn waterfall_table_ok() {
        let report = Report::new(JobOrder::SAMPLE);
        let rendered = build_waterfall_table(&report.waterfall).to_string();
        assert!(rendered.contains("-32'550.00"));
        assert!(rendered.contains("▼ -32'550"));
        assert!(rendered.contains("▲ 100'000"));
    }

    #[test]
    fn cost_table_ok() {
        let report = Report::new(JobOrder::SAMPLE);
        let rendered = build_cost_table(&report.cost_table).to_string();
        assert!(rendered.contains("Opportunitätskosten"));
        assert!(rendered.contains("Fixkosten"));
        assert!(rendered.contains("25'000.00"));
    }
}
