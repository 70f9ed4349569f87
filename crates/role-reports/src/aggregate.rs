//! Totals over visible items

use crate::items::AnnotatedItem;

/// Sum of `value` over the visible items. Zero when empty.
pub fn total(visible: &[AnnotatedItem]) -> f64 {
    // Start from +0.0; float `sum()` starts at -0.0 and prints as "-0"
    visible.iter().fold(0.0, |sum, item| sum + item.value)
}
