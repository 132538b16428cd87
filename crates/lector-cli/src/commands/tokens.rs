use lector_core::error::LectorError;

use crate::output;
use crate::InputArgs;

pub fn run(input: &InputArgs, output_format: &str) -> Result<(), LectorError> {
    let (sequence, _) = super::load(input)?;

    match output_format {
        "json" => output::json::print(&sequence)?,
        _ => print!("{}", output::table::format_tokens(&sequence)),
    }

    Ok(())
}
