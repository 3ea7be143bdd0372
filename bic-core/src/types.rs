//! Core type definitions for best-in-class selection.
//!
//! Items are modelled as a display name plus a tagged [`ItemKind`]. The
//! kind carries exactly the fields the classifier and the metric need, so a
//! weapon can never be asked for an armor rating.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

// ---------------------------------------------------------------------------
// Weapons
// ---------------------------------------------------------------------------

/// Weapon family as reported by the item source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponSubtype {
    /// One-handed sword.
    Sword,
    /// Dagger.
    Dagger,
    /// One-handed war axe.
    Axe,
    /// One-handed mace.
    Mace,
    /// Two-handed greatsword.
    Greatsword,
    /// Two-handed battleaxe.
    Battleaxe,
    /// Bow.
    Bow,
    /// Crossbow.
    Crossbow,
    /// Anything else (staves, fists, unknown codes).
    Other,
}

// ---------------------------------------------------------------------------
// Armor
// ---------------------------------------------------------------------------

/// Armor weight class. The three classes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    /// Light armor.
    Light,
    /// Heavy armor.
    Heavy,
    /// Clothing (neither light nor heavy).
    Clothing,
}

/// A single body slot an armor piece can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySlot {
    /// Torso.
    Body,
    /// Boots and shoes.
    Feet,
    /// Gauntlets and gloves.
    Hands,
    /// Helmets and hats.
    Head,
    /// Shields.
    Shield,
}

impl BodySlot {
    /// Slots in classification precedence order.
    pub const PRECEDENCE: [BodySlot; 5] = [
        BodySlot::Body,
        BodySlot::Feet,
        BodySlot::Hands,
        BodySlot::Head,
        BodySlot::Shield,
    ];

    const fn bit(self) -> u8 {
        match self {
            Self::Body => 1 << 0,
            Self::Feet => 1 << 1,
            Self::Hands => 1 << 2,
            Self::Head => 1 << 3,
            Self::Shield => 1 << 4,
        }
    }
}

/// Set of body slots occupied by one armor piece.
///
/// Well-formed armor occupies one recognized slot, but host data may flag
/// several (or none), so the set is kept as-is and precedence is applied at
/// classification time.
///
/// Serialized as its bit mask; bits outside the five known slots are
/// dropped on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct BodySlots(u8);

impl BodySlots {
    /// The empty set.
    pub const NONE: Self = Self(0);

    const KNOWN_BITS: u8 = 0b1_1111;

    /// A set holding exactly `slot`.
    #[must_use]
    pub const fn single(slot: BodySlot) -> Self {
        Self(slot.bit())
    }

    /// Build a set from any number of slots.
    #[must_use]
    pub fn from_slots(slots: &[BodySlot]) -> Self {
        slots.iter().fold(Self::NONE, |acc, slot| acc.with(*slot))
    }

    /// This set plus `slot`.
    #[must_use]
    pub const fn with(self, slot: BodySlot) -> Self {
        Self(self.0 | slot.bit())
    }

    /// Whether `slot` is in the set.
    #[must_use]
    pub const fn contains(self, slot: BodySlot) -> bool {
        self.0 & slot.bit() != 0
    }

    /// Whether no recognized slot is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The first slot in [`BodySlot::PRECEDENCE`] order, if any.
    #[must_use]
    pub fn primary(self) -> Option<BodySlot> {
        BodySlot::PRECEDENCE
            .into_iter()
            .find(|slot| self.contains(*slot))
    }
}

impl From<BodySlot> for BodySlots {
    fn from(slot: BodySlot) -> Self {
        Self::single(slot)
    }
}

impl From<u8> for BodySlots {
    fn from(bits: u8) -> Self {
        Self(bits & Self::KNOWN_BITS)
    }
}

impl From<BodySlots> for u8 {
    fn from(slots: BodySlots) -> Self {
        slots.0
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// What an item is, together with the data needed to rank it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    /// A weapon, ranked by attack damage.
    Weapon {
        /// Weapon family.
        subtype: WeaponSubtype,
        /// Base attack damage.
        attack_damage: f32,
    },
    /// An armor piece or clothing, ranked by armor rating.
    Armor {
        /// Light, heavy or clothing.
        weight_class: WeightClass,
        /// Occupied body slots.
        slots: BodySlots,
        /// Armor rating.
        armor_rating: f32,
    },
    /// Arrows and bolts, ranked by projectile damage.
    Ammunition {
        /// `true` for crossbow bolts, `false` for arrows.
        is_bolt: bool,
        /// Projectile damage.
        damage: f32,
    },
    /// Potions, ingredients, misc items, ...
    Other,
}

impl ItemKind {
    /// The ranking metric for this kind, or `None` for [`ItemKind::Other`].
    #[must_use]
    pub fn metric(&self) -> Option<f32> {
        match *self {
            Self::Weapon { attack_damage, .. } => Some(attack_damage),
            Self::Armor { armor_rating, .. } => Some(armor_rating),
            Self::Ammunition { damage, .. } => Some(damage),
            Self::Other => None,
        }
    }
}

/// Anything that can take part in a selection pass.
///
/// Implemented by [`ItemRecord`] and by host adapters that wrap their own
/// menu entries.
pub trait InventoryItem {
    /// Name used in diagnostics.
    fn display_name(&self) -> &str;

    /// The item's kind, or `None` when the underlying item data is missing.
    fn kind(&self) -> Option<ItemKind>;

    /// Current value of the best-in-class flag.
    fn is_best_in_class(&self) -> bool;

    /// Write the best-in-class flag.
    ///
    /// # Errors
    /// Returns [`crate::BicError::MarkUnavailable`] when the item cannot
    /// currently accept the write.
    fn set_best_in_class(&mut self, value: bool) -> Result<()>;
}

/// An owned inventory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Name used in diagnostics.
    pub display_name: String,
    /// What the item is.
    #[serde(flatten)]
    pub kind: ItemKind,
    /// Set by the marker on category winners.
    #[serde(default)]
    pub best_in_class: bool,
}

impl ItemRecord {
    /// Create an unflagged item.
    #[must_use]
    pub fn new(display_name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            display_name: display_name.into(),
            kind,
            best_in_class: false,
        }
    }

    /// A weapon.
    #[must_use]
    pub fn weapon(name: impl Into<String>, subtype: WeaponSubtype, attack_damage: f32) -> Self {
        Self::new(
            name,
            ItemKind::Weapon {
                subtype,
                attack_damage,
            },
        )
    }

    /// An armor piece.
    #[must_use]
    pub fn armor(
        name: impl Into<String>,
        weight_class: WeightClass,
        slots: impl Into<BodySlots>,
        armor_rating: f32,
    ) -> Self {
        Self::new(
            name,
            ItemKind::Armor {
                weight_class,
                slots: slots.into(),
                armor_rating,
            },
        )
    }

    /// An arrow (`is_bolt == false`) or a bolt.
    #[must_use]
    pub fn ammunition(name: impl Into<String>, is_bolt: bool, damage: f32) -> Self {
        Self::new(name, ItemKind::Ammunition { is_bolt, damage })
    }

    /// Anything that is never ranked.
    #[must_use]
    pub fn other(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Other)
    }
}

impl InventoryItem for ItemRecord {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn kind(&self) -> Option<ItemKind> {
        Some(self.kind)
    }

    fn is_best_in_class(&self) -> bool {
        self.best_in_class
    }

    fn set_best_in_class(&mut self, value: bool) -> Result<()> {
        self.best_in_class = value;
        Ok(())
    }
}

impl fmt::Display for ItemRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}
