use std::io::Read;
use std::path::{Path, PathBuf};

use tableparse_core::config::ParseOptions;
use tableparse_core::error::TableParseError;
use tableparse_core::extraction::HtmlExtractor;
use tableparse_core::format::OutputFormat;

use crate::output;

/// Option flags of the `parse` subcommand.
pub struct Flags {
    pub no_header: bool,
    pub format: String,
    pub keep_whitespace: bool,
}

impl Flags {
    fn to_options(&self) -> ParseOptions {
        ParseOptions {
            use_first_row_as_header: !self.no_header,
            output_format: OutputFormat::from_str_loose(&self.format),
            clean_data: !self.keep_whitespace,
        }
    }
}

pub fn run(
    input_file: PathBuf,
    flags: Flags,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), TableParseError> {
    let html = read_input(&input_file)?;
    let options = flags.to_options();
    if options.output_format.as_str() != flags.format {
        tracing::warn!(
            requested = %flags.format,
            "unknown output format, using {}",
            options.output_format
        );
    }

    let extractor = HtmlExtractor::new();
    let items = tableparse_core::parse_tables(&html, &options, &extractor, 0)?;

    output::emit(&items, output_format, output_file)
}

fn read_input(path: &Path) -> Result<String, TableParseError> {
    if path == Path::new("-") {
        let mut html = String::new();
        std::io::stdin().read_to_string(&mut html)?;
        Ok(html)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
