pub mod html;

use crate::error::TableParseError;
use crate::model::Table;

pub use html::HtmlExtractor;

/// Trait for table extraction backends.
pub trait TableExtractor: Send + Sync {
    /// Extract every table from an HTML document, in document order.
    ///
    /// Empty rows and tables left without rows are dropped. When
    /// `clean_data` is set, cell text is trimmed.
    fn extract_tables(&self, html: &str, clean_data: bool) -> Result<Vec<Table>, TableParseError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
