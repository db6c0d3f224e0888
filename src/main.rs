use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numeric_ranges::{
    accumulate_range, adjacent_difference_range, inner_product_range, iota_range,
    partial_sum_range, AccumulateOptions, AdjacentDifferenceOptions, BackInserter,
    InnerProductOptions, Operation, PartialSumOptions,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "numeric-ranges",
    about = "Run range-aware numeric algorithms over numbers from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print `count` increasing values starting at `start`.
    Iota {
        /// Number of values to produce.
        #[arg(long)]
        count: usize,
        /// First value.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        start: f64,
    },
    /// Fold the values left to right.
    Accumulate {
        /// Values to fold.
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
        /// Starting value.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        init: f64,
        /// Fold operation (add, sub, mul, min, max).
        #[arg(long, default_value = "add")]
        op: Operation,
    },
    /// Fold two comma-separated sequences pairwise; the shorter one wins.
    InnerProduct {
        /// First sequence, e.g. `1,2,3`.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        lhs: Vec<f64>,
        /// Second sequence.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        rhs: Vec<f64>,
        /// Starting value.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        init: f64,
        /// Operation folding each pair into the total.
        #[arg(long, default_value = "add")]
        reduce_op: Operation,
        /// Operation combining the two elements of a pair.
        #[arg(long, default_value = "mul")]
        combine_op: Operation,
    },
    /// Print the first value, then `op(current, previous)` for the rest.
    AdjacentDifference {
        /// Input values.
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
        /// Differencing operation.
        #[arg(long, default_value = "sub")]
        op: Operation,
    },
    /// Print running totals.
    PartialSum {
        /// Input values.
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
        /// Running operation.
        #[arg(long, default_value = "add")]
        op: Operation,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(cli.command);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", format_values(&output)).context("failed to write results")?;
    Ok(())
}

fn run(command: Commands) -> Vec<f64> {
    match command {
        Commands::Iota { count, start } => {
            debug!(count, start, "iota");
            let mut values = vec![0.0; count];
            iota_range(&mut values, start);
            values
        }
        Commands::Accumulate { values, init, op } => {
            debug!(len = values.len(), init, %op, "accumulate");
            vec![accumulate_range(&values, AccumulateOptions::new(init).op(op))]
        }
        Commands::InnerProduct {
            lhs,
            rhs,
            init,
            reduce_op,
            combine_op,
        } => {
            debug!(
                lhs = lhs.len(),
                rhs = rhs.len(),
                init,
                %reduce_op,
                %combine_op,
                "inner product"
            );
            if lhs.len() != rhs.len() {
                debug!(
                    lhs = lhs.len(),
                    rhs = rhs.len(),
                    "sequences differ in length; trailing values are ignored"
                );
            }
            let options = InnerProductOptions::new(init)
                .reduce_op(reduce_op)
                .combine_op(combine_op);
            vec![inner_product_range(&lhs, &rhs, options)]
        }
        Commands::AdjacentDifference { values, op } => {
            debug!(len = values.len(), %op, "adjacent difference");
            let mut out: Vec<f64> = Vec::with_capacity(values.len());
            adjacent_difference_range(
                &values,
                BackInserter::new(&mut out),
                AdjacentDifferenceOptions::new().op(op),
            );
            out
        }
        Commands::PartialSum { values, op } => {
            debug!(len = values.len(), %op, "partial sum");
            let mut out: Vec<f64> = Vec::with_capacity(values.len());
            partial_sum_range(
                &values,
                BackInserter::new(&mut out),
                PartialSumOptions::new().op(op),
            );
            out
        }
    }
}

fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
