//! Item → category classification.
//!
//! Pure and total: every [`ItemKind`] maps to at most one [`Category`].
//! Armor occupying several slots is assigned to the first one in
//! [`BodySlot::PRECEDENCE`](crate::types::BodySlot::PRECEDENCE) order.

use crate::category::Category;
use crate::types::{InventoryItem, ItemKind};

/// Classify an item kind.
#[must_use]
pub fn classify_kind(kind: &ItemKind) -> Option<Category> {
    match *kind {
        ItemKind::Weapon { subtype, .. } => Category::for_weapon(subtype),
        ItemKind::Armor {
            weight_class,
            slots,
            ..
        } => slots
            .primary()
            .and_then(|slot| Category::for_armor(weight_class, slot)),
        ItemKind::Ammunition { is_bolt, .. } => Some(Category::for_ammunition(is_bolt)),
        ItemKind::Other => None,
    }
}

/// Classify an item; items with missing data are unclassified.
#[must_use]
pub fn classify<I: InventoryItem + ?Sized>(item: &I) -> Option<Category> {
    item.kind().as_ref().and_then(classify_kind)
}
