use clap::{Parser, Subcommand};

/// AREG shift end calculator
#[derive(Parser, Debug)]
#[command(name = "areg")]
#[command(about = "Shift end calculator for 6-hour AREG journeys")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the shift end for one set of times
    Compute(ComputeArgs),
    /// Compute shift ends for time triples read line by line
    Batch(BatchArgs),
}

#[derive(clap::Args, Debug)]
pub struct ComputeArgs {
    /// Entry time (HH:MM, or 4-digit shorthand like 0800)
    #[arg(short, long, default_value = "")]
    pub entry: String,

    /// Break start time (HH:MM or shorthand)
    #[arg(long, default_value = "")]
    pub break_start: String,

    /// Break end time (HH:MM or shorthand)
    #[arg(long, default_value = "")]
    pub break_end: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    /// Input file path with one 'entry break_start break_end' triple per
    /// line (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
