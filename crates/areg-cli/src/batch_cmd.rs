use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use areg_core::{ShiftResult, compute_shift_end_from_strings};

use crate::cli::BatchArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{format_result_line, map_core_error};

pub fn run_batch(args: BatchArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let reader: Box<dyn BufRead> = if args.stdin || args.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input).map_err(|e| {
            CliError::runtime(format!("Failed to open file '{}': {}", args.input, e))
        })?;
        Box::new(BufReader::new(file))
    };

    for line in reader.lines() {
        let line = line.map_err(|e| CliError::runtime(format!("Failed to read line: {}", e)))?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let result = process_batch_line(trimmed).map_err(|e| e.for_line(trimmed))?;

        match output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string(&result)
                    .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
                println!("{}", json);
            }
            OutputFormat::Text => {
                println!("{}", format_result_line(&result));
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn process_batch_line(line: &str) -> CliResult<ShiftResult> {
    let mut fields = line.split_whitespace();
    let (Some(entry), Some(break_start), Some(break_end), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(CliError::input(
            "Expected three fields: entry break_start break_end",
        ));
    };

    compute_shift_end_from_strings(entry, break_start, break_end).map_err(map_core_error)
}
