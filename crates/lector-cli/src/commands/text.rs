use lector_core::error::LectorError;

use crate::InputArgs;

pub fn run(input: &InputArgs, from: Option<usize>, to: Option<usize>) -> Result<(), LectorError> {
    let (sequence, _) = super::load(input)?;

    if sequence.is_empty() && from.is_none() && to.is_none() {
        return Ok(());
    }

    let last = sequence.len().saturating_sub(1);
    let first = sequence.token(from.unwrap_or(0))?;
    let second = sequence.token(to.unwrap_or(last))?;

    let text = lector_core::copy_range(&sequence, first, second)?;
    println!("{text}");

    Ok(())
}
