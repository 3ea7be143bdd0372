//! Bridge module — maps host form data to core item kinds.
//!
//! The host describes inventory entries by their base form:
//! - weapons carry an animation type code and an integer attack damage
//! - armor carries an armor type, a biped slot mask and the armor rating
//!   in hundredths
//! - ammunition carries a flag byte and a float damage
//!
//! The core only knows [`ItemKind`]; this module is the one place that
//! understands host codes.

use bic_core::error::{BicError, Result};
use bic_core::types::{BodySlot, BodySlots, InventoryItem, ItemKind, WeaponSubtype, WeightClass};

// ---------------------------------------------------------------------------
// Host codes
// ---------------------------------------------------------------------------

/// Weapon animation type codes.
pub mod weapon_type {
    /// Fists.
    pub const HAND_TO_HAND: u8 = 0;
    /// One-handed sword.
    pub const ONE_HAND_SWORD: u8 = 1;
    /// Dagger.
    pub const ONE_HAND_DAGGER: u8 = 2;
    /// One-handed war axe.
    pub const ONE_HAND_AXE: u8 = 3;
    /// One-handed mace.
    pub const ONE_HAND_MACE: u8 = 4;
    /// Greatsword.
    pub const TWO_HAND_SWORD: u8 = 5;
    /// Battleaxe and warhammer.
    pub const TWO_HAND_AXE: u8 = 6;
    /// Bow.
    pub const BOW: u8 = 7;
    /// Staff.
    pub const STAFF: u8 = 8;
    /// Crossbow.
    pub const CROSSBOW: u8 = 9;
}

/// Armor type codes.
pub mod armor_type {
    /// Light armor.
    pub const LIGHT: u32 = 0;
    /// Heavy armor.
    pub const HEAVY: u32 = 1;
    /// Clothing.
    pub const CLOTHING: u32 = 2;
}

/// Biped slot mask bits (slot 30 is bit 0).
pub mod biped {
    /// Slot 30, head.
    pub const HEAD: u32 = 1 << 0;
    /// Slot 31, hair. Helmets and hats occupy this slot.
    pub const HAIR: u32 = 1 << 1;
    /// Slot 32, body.
    pub const BODY: u32 = 1 << 2;
    /// Slot 33, hands.
    pub const HANDS: u32 = 1 << 3;
    /// Slot 37, feet.
    pub const FEET: u32 = 1 << 7;
    /// Slot 39, shield.
    pub const SHIELD: u32 = 1 << 9;
}

/// Ammunition flag: set on arrows, clear on bolts.
pub const AMMO_FLAG_NON_BOLT: u8 = 0x04;

// ---------------------------------------------------------------------------
// Host forms
// ---------------------------------------------------------------------------

/// Weapon base form data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponForm {
    /// Form identifier.
    pub form_id: u32,
    /// Animation type code, see [`weapon_type`].
    pub weapon_type: u8,
    /// Base attack damage.
    pub attack_damage: u16,
}

/// Armor base form data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmorForm {
    /// Form identifier.
    pub form_id: u32,
    /// Armor type code, see [`armor_type`].
    pub armor_type: u32,
    /// Occupied biped slots, see [`biped`].
    pub slot_mask: u32,
    /// Armor rating × 100.
    pub armor_value_times_100: u32,
}

/// Ammunition base form data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmmoForm {
    /// Form identifier.
    pub form_id: u32,
    /// Flag byte, see [`AMMO_FLAG_NON_BOLT`].
    pub flags: u8,
    /// Projectile damage.
    pub damage: f32,
}

/// Base form of an inventory entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostForm {
    /// A weapon.
    Weapon(WeaponForm),
    /// Armor or clothing.
    Armor(ArmorForm),
    /// Arrows or bolts.
    Ammo(AmmoForm),
    /// Any other form type.
    Other {
        /// Form identifier.
        form_id: u32,
        /// Host form type code.
        form_type: u8,
    },
}

impl HostForm {
    /// The form identifier.
    #[must_use]
    pub fn form_id(&self) -> u32 {
        match self {
            Self::Weapon(w) => w.form_id,
            Self::Armor(a) => a.form_id,
            Self::Ammo(a) => a.form_id,
            Self::Other { form_id, .. } => *form_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Map a weapon type code to a subtype.
#[must_use]
pub fn weapon_subtype(code: u8) -> WeaponSubtype {
    match code {
        weapon_type::ONE_HAND_SWORD => WeaponSubtype::Sword,
        weapon_type::ONE_HAND_DAGGER => WeaponSubtype::Dagger,
        weapon_type::ONE_HAND_AXE => WeaponSubtype::Axe,
        weapon_type::ONE_HAND_MACE => WeaponSubtype::Mace,
        weapon_type::TWO_HAND_SWORD => WeaponSubtype::Greatsword,
        weapon_type::TWO_HAND_AXE => WeaponSubtype::Battleaxe,
        weapon_type::BOW => WeaponSubtype::Bow,
        weapon_type::CROSSBOW => WeaponSubtype::Crossbow,
        _ => WeaponSubtype::Other,
    }
}

/// Map an armor type code. Anything neither light nor heavy is clothing.
#[must_use]
pub fn weight_class(code: u32) -> WeightClass {
    match code {
        armor_type::LIGHT => WeightClass::Light,
        armor_type::HEAVY => WeightClass::Heavy,
        _ => WeightClass::Clothing,
    }
}

/// Translate a biped slot mask, keeping only the recognized slots.
///
/// The core's head slot is the hair bit; the bare head bit is ignored.
#[must_use]
pub fn body_slots(mask: u32) -> BodySlots {
    [
        (biped::BODY, BodySlot::Body),
        (biped::FEET, BodySlot::Feet),
        (biped::HANDS, BodySlot::Hands),
        (biped::HAIR, BodySlot::Head),
        (biped::SHIELD, BodySlot::Shield),
    ]
    .into_iter()
    .filter(|(bit, _)| mask & bit != 0)
    .fold(BodySlots::NONE, |slots, (_, slot)| slots.with(slot))
}

/// Translate a host base form into a core item kind.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn item_kind(form: &HostForm) -> ItemKind {
    match *form {
        HostForm::Weapon(w) => ItemKind::Weapon {
            subtype: weapon_subtype(w.weapon_type),
            attack_damage: f32::from(w.attack_damage),
        },
        HostForm::Armor(a) => ItemKind::Armor {
            weight_class: weight_class(a.armor_type),
            slots: body_slots(a.slot_mask),
            armor_rating: a.armor_value_times_100 as f32,
        },
        HostForm::Ammo(a) => ItemKind::Ammunition {
            is_bolt: a.flags & AMMO_FLAG_NON_BOLT == 0,
            damage: a.damage,
        },
        HostForm::Other { .. } => ItemKind::Other,
    }
}

// ---------------------------------------------------------------------------
// Menu entries
// ---------------------------------------------------------------------------

/// UI-side state of one menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemDisplay {
    /// Rendered as the best-in-class marker.
    pub best_in_class: bool,
}

/// One entry of a menu's item list.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Display name.
    pub name: String,
    /// Base form; `None` when the host has no data for the entry.
    pub base_form: Option<HostForm>,
    /// UI binding; `None` until the UI has created the entry.
    pub display: Option<ItemDisplay>,
}

impl MenuItem {
    /// An entry with a bound display.
    #[must_use]
    pub fn new(name: impl Into<String>, base_form: HostForm) -> Self {
        Self {
            name: name.into(),
            base_form: Some(base_form),
            display: Some(ItemDisplay::default()),
        }
    }
}

impl InventoryItem for MenuItem {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> Option<ItemKind> {
        self.base_form.as_ref().map(item_kind)
    }

    fn is_best_in_class(&self) -> bool {
        self.display.is_some_and(|d| d.best_in_class)
    }

    fn set_best_in_class(&mut self, value: bool) -> Result<()> {
        match self.display.as_mut() {
            Some(display) => {
                display.best_in_class = value;
                Ok(())
            }
            None => Err(BicError::MarkUnavailable {
                item: self.name.clone(),
            }),
        }
    }
}
