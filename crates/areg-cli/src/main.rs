use std::process::ExitCode;

use clap::Parser;

mod batch_cmd;
mod cli;
mod compute_cmd;
mod error;
mod shared;

use batch_cmd::run_batch;
use cli::{Cli, Commands};
use compute_cmd::run_compute;
use error::{output_format_hint, parse_output_format, render_error};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_compute(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Batch(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_batch(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}
