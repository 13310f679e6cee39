use std::process::ExitCode;

use areg_core::compute_shift_end_from_strings;

use crate::cli::ComputeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{map_core_error, require_field};

pub fn run_compute(args: ComputeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    require_field("entry", &args.entry)?;
    require_field("break-start", &args.break_start)?;
    require_field("break-end", &args.break_end)?;

    let result = compute_shift_end_from_strings(&args.entry, &args.break_start, &args.break_end)
        .map_err(map_core_error)?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Entry: {}", result.input.entry);
            println!(
                "Break: {} to {} ({} min, {} min credited)",
                result.input.break_start,
                result.input.break_end,
                result.break_minutes,
                result.credited_minutes
            );
            if result.shift_end.next_day {
                println!("Shift end: {} (next day)", result.shift_end.time);
            } else {
                println!("Shift end: {}", result.shift_end.time);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
