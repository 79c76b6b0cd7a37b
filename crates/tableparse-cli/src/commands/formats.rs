use tableparse_core::error::TableParseError;
use tableparse_core::format::OutputFormat;

pub fn list() -> Result<(), TableParseError> {
    println!("Available output formats:\n");
    for format in OutputFormat::ALL {
        let default_marker = if format == OutputFormat::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {:<16} {}{}", format.as_str(), format.description(), default_marker);
    }
    Ok(())
}
