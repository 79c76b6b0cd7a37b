use std::path::PathBuf;

use tableparse_core::config::load_requests;
use tableparse_core::error::TableParseError;
use tableparse_core::extraction::HtmlExtractor;
use tableparse_core::FailurePolicy;

use crate::output;

pub fn run(
    requests_file: PathBuf,
    continue_on_fail: bool,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), TableParseError> {
    let requests = load_requests(&requests_file)?;

    let policy = if continue_on_fail {
        FailurePolicy::ContinueOnFail
    } else {
        FailurePolicy::FailFast
    };

    let extractor = HtmlExtractor::new();
    let items = tableparse_core::run(&requests, &extractor, policy)?;

    output::emit(&items, output_format, output_file)
}
