use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    cli::job::JobOrderArgs,
    core::report::Report,
    fmt::FormattedAmount,
    prelude::*,
    tables::{build_cost_table, build_summary_table, build_waterfall_table},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Text,

    /// Complete report as a JSON document.
    Json,
}

#[derive(Parser)]
pub struct CalculateArgs {
    /// TOML file with the job order, omitted keys fall back to the sample job.
    #[clap(long, env = "JOB_FILE")]
    pub job_file: Option<PathBuf>,

    #[clap(flatten)]
    pub job: JobOrderArgs,

    #[clap(long, value_enum, default_value = "text", env = "OUTPUT_FORMAT")]
    pub format: OutputFormat,
}

#[instrument(skip_all)]
pub fn calculate(args: &CalculateArgs) -> Result {
    let job = args.job.resolve(args.job_file.as_deref())?;
    let report = Report::new(job);

    let evaluation = &report.evaluation;
    info!(
        revenue = %FormattedAmount::cents(evaluation.revenue),
        variable_costs = %FormattedAmount::cents(evaluation.total_variable_costs),
        contribution_margin = %FormattedAmount::cents(evaluation.contribution_margin),
        fixed_costs = %FormattedAmount::cents(evaluation.total_fixed_costs),
        operating_result = %FormattedAmount::cents(evaluation.operating_result),
        "evaluated"
    );
    for bar in &report.waterfall {
        debug!(
            stage = %bar.segment.stage,
            start = ?bar.segment.start,
            end = ?bar.segment.end,
            color = %bar.color,
            "laid out"
        );
    }

    match args.format {
        OutputFormat::Text => {
            println!("{}", build_summary_table(evaluation));
            println!("{}", build_waterfall_table(&report.waterfall));
            println!("{}", build_cost_table(&report.cost_table));
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize the report")?;
            println!("{json}");
        }
    }
    Ok(())
}
