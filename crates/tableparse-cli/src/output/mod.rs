pub mod json;
pub mod table;

use std::path::PathBuf;

use tableparse_core::error::TableParseError;
use tableparse_core::output::OutputItem;

/// Print items in the requested format, or write them as JSON to `out`.
pub fn emit(
    items: &[OutputItem],
    output_format: &str,
    out: Option<PathBuf>,
) -> Result<(), TableParseError> {
    match out {
        Some(path) => {
            // Always write JSON when saving to file
            json::write(items, &path)?;
            let failed = items.iter().filter(|i| i.json.error().is_some()).count();
            eprintln!("{} item(s) written to {}", items.len(), path.display());
            if failed > 0 {
                eprintln!("  {failed} item(s) carry an error payload");
            }
        }
        None => match output_format {
            "json" => json::print(items)?,
            _ => table::print(items),
        },
    }
    Ok(())
}
