//! Role-based visibility filter
//!
//! Decides which items a user may see and adds the admin priority flag.
//! Unknown roles see nothing.

use crate::config::Policy;
use crate::items::{AnnotatedItem, Item, Role, User};

/// What a role is allowed to see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Every item, high-value items flagged
    Full,
    /// Only items at or below the visibility limit
    Limited,
    /// Nothing
    Denied,
}

impl Visibility {
    pub fn for_role(role: &Role) -> Self {
        match role {
            Role::Admin => Visibility::Full,
            Role::User => Visibility::Limited,
            Role::Unrecognized(_) => Visibility::Denied,
        }
    }
}

/// Select the items `user` may see, in input order.
///
/// Returned items are fresh copies; `items` is never modified.
pub fn select_visible(user: &User, items: &[Item], policy: &Policy) -> Vec<AnnotatedItem> {
    match Visibility::for_role(&user.role) {
        Visibility::Full => items
            .iter()
            .map(|item| {
                if item.value > policy.priority_threshold {
                    AnnotatedItem::flagged(item)
                } else {
                    AnnotatedItem::plain(item)
                }
            })
            .collect(),
        Visibility::Limited => items
            .iter()
            .filter(|item| item.value <= policy.visibility_limit)
            .map(AnnotatedItem::plain)
            .collect(),
        Visibility::Denied => {
            log::warn!(
                "Role {:?} is not recognized; no items are visible to {}",
                user.role.to_string(),
                user.name
            );
            Vec::new()
        }
    }
}
