use std::path::Path;

use tableparse_core::error::TableParseError;
use tableparse_core::output::OutputItem;

pub fn print(items: &[OutputItem]) -> Result<(), TableParseError> {
    let json = serde_json::to_string_pretty(items)?;
    println!("{json}");
    Ok(())
}

pub fn write(items: &[OutputItem], path: &Path) -> Result<(), TableParseError> {
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json)?;
    Ok(())
}
