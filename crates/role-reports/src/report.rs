//! Report generation: visibility → total → rendering
//!
//! `generate_report` never fails: unknown roles see nothing and unknown
//! formats render as an empty string. `try_generate_report` reports those
//! cases as errors instead.

use crate::aggregate;
use crate::config::Config;
use crate::error::{ReportError, Result};
use crate::items::{Item, User};
use crate::render::{self, Format};
use crate::visibility::{self, Visibility};

/// Composes the report pipeline.
///
/// `D` is the data-access handle supplied by the caller. Report generation
/// works only on the items it is given and never touches it.
pub struct ReportGenerator<D> {
    database: D,
    config: Config,
}

impl<D> ReportGenerator<D> {
    pub fn new(database: D) -> Self {
        Self::with_config(database, Config::default())
    }

    pub fn with_config(database: D, config: Config) -> Self {
        Self { database, config }
    }

    pub fn database(&self) -> &D {
        &self.database
    }

    /// Build the report for `user` from `items`. Output is trimmed.
    pub fn generate_report(&self, format: &Format, user: &User, items: &[Item]) -> String {
        match self.build(format, user, items) {
            Ok(report) => report,
            Err(e) => {
                log::error!("Failed to render {} report: {}", format, e);
                String::new()
            }
        }
    }

    /// Like [`generate_report`](Self::generate_report), but unknown formats
    /// and roles are errors rather than empty output
    pub fn try_generate_report(
        &self,
        format: &Format,
        user: &User,
        items: &[Item],
    ) -> Result<String> {
        if let Format::Unsupported(raw) = format {
            return Err(ReportError::UnsupportedFormat(raw.clone()));
        }
        if Visibility::for_role(&user.role) == Visibility::Denied {
            return Err(ReportError::UnrecognizedRole(user.role.to_string()));
        }
        self.build(format, user, items)
    }

    fn build(&self, format: &Format, user: &User, items: &[Item]) -> Result<String> {
        let visible = visibility::select_visible(user, items, &self.config.policy);
        log::debug!(
            "{} of {} items visible to {} ({})",
            visible.len(),
            items.len(),
            user.name,
            user.role
        );

        let total = aggregate::total(&visible);
        log::debug!("Total over visible items: {}", total);

        if let Format::Unsupported(raw) = format {
            log::warn!("Report format {:?} is not supported; output is empty", raw);
        }

        render::render(format, user, &visible, total, self.config.escaping)
    }
}
