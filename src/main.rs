use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use kira_trackqc::input::{load_hit_table, load_labels};
use kira_trackqc::logging::init_logging;
use kira_trackqc::report::{render_result_text, write_json_report};
use kira_trackqc::{DegeneratePolicy, HitMatchingConfig, ParameterMatchingConfig, ScoringMode};

#[derive(Debug, Parser)]
#[command(name = "kira-trackqc", version, about = "Score track reconstruction of one event")]
struct Cli {
    /// Debug-level logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Match groups to true tracks by shared hits.
    Hits {
        #[command(flatten)]
        io: IoArgs,
        #[arg(long, default_value_t = 0.5)]
        eff_threshold: f64,
    },
    /// Match groups to true tracks by fitted line parameters.
    Params {
        #[command(flatten)]
        io: IoArgs,
        #[arg(long)]
        delta_k: f64,
        #[arg(long)]
        delta_b: f64,
        #[arg(long, value_enum, default_value_t = DegeneratePolicy::Fail)]
        on_degenerate: DegeneratePolicy,
    },
}

#[derive(Debug, Args)]
struct IoArgs {
    /// Hit table (CSV or TSV, optionally .gz) with TrackID, X and y columns.
    #[arg(long)]
    event: PathBuf,
    /// File of predicted labels, one per hit in table order.
    #[arg(long, conflicts_with = "labels_column", required_unless_present = "labels_column")]
    labels: Option<PathBuf>,
    /// Take predicted labels from this column of the hit table instead.
    #[arg(long)]
    labels_column: Option<String>,
    /// Also write the result as JSON here.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("{err}");
    }
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn scoring_mode(command: &Command) -> (ScoringMode, &IoArgs) {
    match command {
        Command::Hits { io, eff_threshold } => {
            (ScoringMode::Hits(HitMatchingConfig::new(*eff_threshold)), io)
        }
        Command::Params {
            io,
            delta_k,
            delta_b,
            on_degenerate,
        } => (
            ScoringMode::Params(
                ParameterMatchingConfig::new(*delta_k, *delta_b).with_policy(*on_degenerate),
            ),
            io,
        ),
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let (mode, io) = scoring_mode(&cli.command);
    let scorer = mode.build().map_err(|e| e.to_string())?;

    let table = load_hit_table(&io.event, io.labels_column.as_deref()).map_err(|e| e.to_string())?;
    let labels = match (&io.labels, table.labels) {
        (Some(path), _) => load_labels(path).map_err(|e| e.to_string())?,
        (None, Some(labels)) => labels,
        (None, None) => return Err("no labels given (use --labels or --labels-column)".to_string()),
    };

    let result = scorer.fit(&table.event, &labels).map_err(|e| e.to_string())?;
    print!("{}", render_result_text(&result));

    if let Some(path) = &io.json {
        write_json_report(&result, path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
