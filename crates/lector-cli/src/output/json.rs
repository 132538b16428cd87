use lector_core::error::LectorError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), LectorError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
