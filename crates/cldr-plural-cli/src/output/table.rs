//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// The outcome of building one locale's rule set.
pub struct LocaleReport {
    /// Locale key as found in the data file (e.g., "en", "pt-PT").
    pub locale: String,
    /// Categories with explicit conditions.
    pub categories: Vec<String>,
    /// Why the locale failed, if it did.
    pub error: Option<String>,
}

/// Format locale reports as an ASCII table.
pub fn format_locale_table(reports: &[LocaleReport]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Categories", "Status"]);

    for report in reports {
        let categories = if report.categories.is_empty() {
            "(other only)".to_string()
        } else {
            report.categories.join(", ")
        };
        let status = if report.error.is_some() { "error" } else { "ok" };
        table.add_row(vec![report.locale.clone(), categories, status.to_string()]);
    }

    table
}
