//! Centralized constants for report generation
//!
//! Policy values here are the defaults; config.toml can override them.

// =============================================================================
// Visibility Policy
// =============================================================================

/// Items with a value strictly above this are flagged for administrators
pub const PRIORITY_THRESHOLD: f64 = 1000.0;

/// Highest item value a standard user may see (inclusive)
pub const VISIBILITY_LIMIT: f64 = 500.0;

// =============================================================================
// Role and Format Identifiers
// =============================================================================

/// Administrative role identifier
pub const ROLE_ADMIN: &str = "ADMIN";

/// Standard user role identifier
pub const ROLE_USER: &str = "USER";

/// CSV report selector
pub const FORMAT_CSV: &str = "CSV";

/// HTML report selector
pub const FORMAT_HTML: &str = "HTML";

// =============================================================================
// Report Layout
// =============================================================================

/// Column header line of the CSV report
pub const CSV_HEADER: [&str; 4] = ["ID", "NOME", "VALOR", "USUARIO"];

/// Label of the CSV totals row
pub const CSV_TOTAL_LABEL: &str = "Total";

/// Inline style applied to priority rows in HTML output
pub const PRIORITY_ROW_STYLE: &str = "font-weight:bold;";

// =============================================================================
// File Names
// =============================================================================

/// Default config file path
pub const CONFIG_FILENAME: &str = "config.toml";
