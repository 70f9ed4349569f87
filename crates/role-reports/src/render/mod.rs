//! Report rendering (CSV and HTML)
//!
//! A report is `header + one row per visible item + footer`. Each format
//! provides those three pieces through [`ReportLayout`]; an unsupported
//! format renders every piece as empty text.

mod csv_report;
mod html_report;

pub use csv_report::CsvLayout;
pub use html_report::HtmlLayout;

use std::fmt;

use crate::config::Escaping;
use crate::constants;
use crate::error::Result;
use crate::items::{AnnotatedItem, User};

/// Report format selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    Csv,
    Html,
    /// Anything else, kept verbatim for error messages
    Unsupported(String),
}

impl From<&str> for Format {
    fn from(raw: &str) -> Self {
        match raw {
            constants::FORMAT_CSV => Format::Csv,
            constants::FORMAT_HTML => Format::Html,
            other => Format::Unsupported(other.to_string()),
        }
    }
}

impl From<String> for Format {
    fn from(raw: String) -> Self {
        Format::from(raw.as_str())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Csv => write!(f, "{}", constants::FORMAT_CSV),
            Format::Html => write!(f, "{}", constants::FORMAT_HTML),
            Format::Unsupported(raw) => write!(f, "{}", raw),
        }
    }
}

/// The three format-specific pieces of a report
pub trait ReportLayout {
    fn header(&self, user: &User) -> Result<String>;
    fn row(&self, item: &AnnotatedItem, user: &User) -> Result<String>;
    fn footer(&self, total: f64) -> Result<String>;
}

/// Layout for unsupported formats: contributes nothing
pub struct EmptyLayout;

impl ReportLayout for EmptyLayout {
    fn header(&self, _user: &User) -> Result<String> {
        Ok(String::new())
    }

    fn row(&self, _item: &AnnotatedItem, _user: &User) -> Result<String> {
        Ok(String::new())
    }

    fn footer(&self, _total: f64) -> Result<String> {
        Ok(String::new())
    }
}

/// Pick the layout for a format
pub fn layout_for(format: &Format, escaping: Escaping) -> Box<dyn ReportLayout> {
    match format {
        Format::Csv => Box::new(CsvLayout::new(escaping)),
        Format::Html => Box::new(HtmlLayout::new(escaping)),
        Format::Unsupported(_) => Box::new(EmptyLayout),
    }
}

/// Render header, body and footer, then trim surrounding whitespace
pub fn render(
    format: &Format,
    user: &User,
    visible: &[AnnotatedItem],
    total: f64,
    escaping: Escaping,
) -> Result<String> {
    let layout = layout_for(format, escaping);

    let mut report = layout.header(user)?;
    for item in visible {
        report.push_str(&layout.row(item, user)?);
    }
    report.push_str(&layout.footer(total)?);

    Ok(report.trim().to_string())
}

/// Shortest round-trip form (`100`, `1500.5`), switching to exponent notation
/// (`1e+21`, `1e-7`) outside `1e-6 <= |v| < 1e21`. Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // `{:e}` omits the sign on positive exponents
        let exp = format!("{:e}", value);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        value.to_string()
    }
}
