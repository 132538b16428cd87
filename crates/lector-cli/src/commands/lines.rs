use lector_core::error::LectorError;
use lector_core::normalize::summarize_lines;

use crate::output;
use crate::InputArgs;

pub fn run(input: &InputArgs, output_format: &str) -> Result<(), LectorError> {
    let (sequence, _) = super::load(input)?;
    let lines = summarize_lines(sequence.tokens());

    match output_format {
        "json" => output::json::print(&lines)?,
        _ => print!("{}", output::table::format_lines(&lines)),
    }

    Ok(())
}
