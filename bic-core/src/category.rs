//! The fixed category table.
//!
//! | Idx   | Category                                     |
//! |-------|----------------------------------------------|
//! | 0–4   | Light armor: body, feet, hands, head, shield |
//! | 5–9   | Heavy armor: body, feet, hands, head, shield |
//! | 10–13 | Sword, war axe, mace, dagger                 |
//! | 14–15 | Greatsword, battleaxe                        |
//! | 16–17 | Bow, crossbow                                |
//! | 18–19 | Arrow, bolt                                  |
//! | 20–23 | Clothing: body, feet, hands, head            |
//!
//! Indices are part of the contract and never change.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{BodySlot, WeaponSubtype, WeightClass};

/// Number of categories, and therefore of ledger slots.
pub const CATEGORY_COUNT: usize = 24;

/// One of the 24 buckets items are ranked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Category {
    /// Light body armor.
    LightBody = 0,
    /// Light boots.
    LightFeet = 1,
    /// Light gauntlets.
    LightHands = 2,
    /// Light helmet.
    LightHead = 3,
    /// Light shield.
    LightShield = 4,
    /// Heavy body armor.
    HeavyBody = 5,
    /// Heavy boots.
    HeavyFeet = 6,
    /// Heavy gauntlets.
    HeavyHands = 7,
    /// Heavy helmet.
    HeavyHead = 8,
    /// Heavy shield.
    HeavyShield = 9,
    /// One-handed sword.
    Sword = 10,
    /// One-handed war axe.
    WarAxe = 11,
    /// One-handed mace.
    Mace = 12,
    /// Dagger.
    Dagger = 13,
    /// Two-handed greatsword.
    Greatsword = 14,
    /// Two-handed battleaxe.
    Battleaxe = 15,
    /// Bow.
    Bow = 16,
    /// Crossbow.
    Crossbow = 17,
    /// Arrow.
    Arrow = 18,
    /// Crossbow bolt.
    Bolt = 19,
    /// Clothing worn on the body.
    ClothingBody = 20,
    /// Shoes.
    ClothingFeet = 21,
    /// Gloves.
    ClothingHands = 22,
    /// Hat.
    ClothingHead = 23,
}

impl Category {
    /// Every category in index order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Self::LightBody,
        Self::LightFeet,
        Self::LightHands,
        Self::LightHead,
        Self::LightShield,
        Self::HeavyBody,
        Self::HeavyFeet,
        Self::HeavyHands,
        Self::HeavyHead,
        Self::HeavyShield,
        Self::Sword,
        Self::WarAxe,
        Self::Mace,
        Self::Dagger,
        Self::Greatsword,
        Self::Battleaxe,
        Self::Bow,
        Self::Crossbow,
        Self::Arrow,
        Self::Bolt,
        Self::ClothingBody,
        Self::ClothingFeet,
        Self::ClothingHands,
        Self::ClothingHead,
    ];

    /// The category's fixed index (0–23).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look a category up by index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Table row for a weapon subtype.
    #[must_use]
    pub const fn for_weapon(subtype: WeaponSubtype) -> Option<Self> {
        match subtype {
            WeaponSubtype::Sword => Some(Self::Sword),
            WeaponSubtype::Axe => Some(Self::WarAxe),
            WeaponSubtype::Mace => Some(Self::Mace),
            WeaponSubtype::Dagger => Some(Self::Dagger),
            WeaponSubtype::Greatsword => Some(Self::Greatsword),
            WeaponSubtype::Battleaxe => Some(Self::Battleaxe),
            WeaponSubtype::Bow => Some(Self::Bow),
            WeaponSubtype::Crossbow => Some(Self::Crossbow),
            WeaponSubtype::Other => None,
        }
    }

    /// Table row for one armor weight class and one body slot.
    ///
    /// Clothing has no shield row.
    #[must_use]
    pub const fn for_armor(weight_class: WeightClass, slot: BodySlot) -> Option<Self> {
        match (weight_class, slot) {
            (WeightClass::Light, BodySlot::Body) => Some(Self::LightBody),
            (WeightClass::Light, BodySlot::Feet) => Some(Self::LightFeet),
            (WeightClass::Light, BodySlot::Hands) => Some(Self::LightHands),
            (WeightClass::Light, BodySlot::Head) => Some(Self::LightHead),
            (WeightClass::Light, BodySlot::Shield) => Some(Self::LightShield),
            (WeightClass::Heavy, BodySlot::Body) => Some(Self::HeavyBody),
            (WeightClass::Heavy, BodySlot::Feet) => Some(Self::HeavyFeet),
            (WeightClass::Heavy, BodySlot::Hands) => Some(Self::HeavyHands),
            (WeightClass::Heavy, BodySlot::Head) => Some(Self::HeavyHead),
            (WeightClass::Heavy, BodySlot::Shield) => Some(Self::HeavyShield),
            (WeightClass::Clothing, BodySlot::Body) => Some(Self::ClothingBody),
            (WeightClass::Clothing, BodySlot::Feet) => Some(Self::ClothingFeet),
            (WeightClass::Clothing, BodySlot::Hands) => Some(Self::ClothingHands),
            (WeightClass::Clothing, BodySlot::Head) => Some(Self::ClothingHead),
            (WeightClass::Clothing, BodySlot::Shield) => None,
        }
    }

    /// Table row for ammunition.
    #[must_use]
    pub const fn for_ammunition(is_bolt: bool) -> Self {
        if is_bolt { Self::Bolt } else { Self::Arrow }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LightBody => "Light Armor",
            Self::LightFeet => "Light Boots",
            Self::LightHands => "Light Gauntlets",
            Self::LightHead => "Light Helmet",
            Self::LightShield => "Light Shield",
            Self::HeavyBody => "Heavy Armor",
            Self::HeavyFeet => "Heavy Boots",
            Self::HeavyHands => "Heavy Gauntlets",
            Self::HeavyHead => "Heavy Helmet",
            Self::HeavyShield => "Heavy Shield",
            Self::Sword => "Sword",
            Self::WarAxe => "War Axe",
            Self::Mace => "Mace",
            Self::Dagger => "Dagger",
            Self::Greatsword => "Greatsword",
            Self::Battleaxe => "Battleaxe",
            Self::Bow => "Bow",
            Self::Crossbow => "Crossbow",
            Self::Arrow => "Arrow",
            Self::Bolt => "Bolt",
            Self::ClothingBody => "Clothing",
            Self::ClothingFeet => "Shoes",
            Self::ClothingHands => "Gloves",
            Self::ClothingHead => "Hat",
        }
    }

    /// Name of the metric items in this category are ranked by.
    #[must_use]
    pub const fn metric_name(self) -> &'static str {
        match self.index() {
            0..=9 | 20..=23 => "armor rating",
            _ => "damage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_position() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from_index(i), Some(*category));
        }
        assert_eq!(Category::from_index(CATEGORY_COUNT), None);
    }

    #[test]
    fn armor_rows_are_contiguous() {
        for (offset, slot) in BodySlot::PRECEDENCE.into_iter().enumerate() {
            assert_eq!(
                Category::for_armor(WeightClass::Light, slot).map(Category::index),
                Some(offset)
            );
            assert_eq!(
                Category::for_armor(WeightClass::Heavy, slot).map(Category::index),
                Some(5 + offset)
            );
        }
        assert_eq!(Category::for_armor(WeightClass::Clothing, BodySlot::Shield), None);
        assert_eq!(
            Category::for_armor(WeightClass::Clothing, BodySlot::Head),
            Some(Category::ClothingHead)
        );
    }

    #[test]
    fn metric_names() {
        assert_eq!(Category::HeavyShield.metric_name(), "armor rating");
        assert_eq!(Category::ClothingFeet.metric_name(), "armor rating");
        assert_eq!(Category::Bolt.metric_name(), "damage");
        assert_eq!(Category::Sword.to_string(), "Sword");
    }
}
