//! Role-aware item reports
//!
//! Filters items by the viewer's role, totals what is visible and renders the
//! result as CSV or HTML.
//!
//! ```
//! use role_reports::{Format, Item, ReportGenerator, User};
//!
//! let generator = ReportGenerator::new(());
//! let report = generator.generate_report(
//!     &Format::Csv,
//!     &User::new("Ana", "USER"),
//!     &[Item::new("1", "X", 100.0)],
//! );
//! assert_eq!(report, "ID,NOME,VALOR,USUARIO\n1,X,100,Ana\n\nTotal,,\n100,,");
//! ```

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod error;
pub mod items;
pub mod render;
pub mod report;
pub mod visibility;

pub use config::{Config, Escaping, FileConfig, Policy};
pub use error::ReportError;
pub use items::{AnnotatedItem, Item, Role, User};
pub use render::Format;
pub use report::ReportGenerator;
pub use visibility::{select_visible, Visibility};
