//! Inventory generators shared by the benchmarks.

use bic_core::types::{BodySlot, ItemRecord, WeaponSubtype, WeightClass};
use bic_skyrim::bridge::{AmmoForm, ArmorForm, HostForm, MenuItem, WeaponForm, biped};

const SUBTYPES: [WeaponSubtype; 9] = [
    WeaponSubtype::Sword,
    WeaponSubtype::Dagger,
    WeaponSubtype::Axe,
    WeaponSubtype::Mace,
    WeaponSubtype::Greatsword,
    WeaponSubtype::Battleaxe,
    WeaponSubtype::Bow,
    WeaponSubtype::Crossbow,
    WeaponSubtype::Other,
];

const WEIGHTS: [WeightClass; 3] = [WeightClass::Light, WeightClass::Heavy, WeightClass::Clothing];

/// A mixed inventory of `n` owned records cycling through every kind.
#[must_use]
pub fn record_inventory(n: usize) -> Vec<ItemRecord> {
    (0..n)
        .map(|i| {
            let metric = ((i * 37) % 50) as f32;
            match i % 4 {
                0 => ItemRecord::weapon(
                    format!("Weapon {i}"),
                    SUBTYPES[i % SUBTYPES.len()],
                    metric,
                ),
                1 => ItemRecord::armor(
                    format!("Armor {i}"),
                    WEIGHTS[i % WEIGHTS.len()],
                    BodySlot::PRECEDENCE[i % BodySlot::PRECEDENCE.len()],
                    metric,
                ),
                2 => ItemRecord::ammunition(format!("Ammo {i}"), i % 3 == 0, metric),
                _ => ItemRecord::other(format!("Misc {i}")),
            }
        })
        .collect()
}

/// A mixed menu list of `n` host entries.
#[must_use]
pub fn menu_inventory(n: usize) -> Vec<MenuItem> {
    const MASKS: [u32; 5] = [biped::BODY, biped::FEET, biped::HANDS, biped::HAIR, biped::SHIELD];
    (0..n)
        .map(|i| {
            let form_id = i as u32;
            let form = match i % 4 {
                0 => HostForm::Weapon(WeaponForm {
                    form_id,
                    weapon_type: (i % 10) as u8,
                    attack_damage: ((i * 37) % 50) as u16,
                }),
                1 => HostForm::Armor(ArmorForm {
                    form_id,
                    armor_type: (i % 3) as u32,
                    slot_mask: MASKS[i % MASKS.len()],
                    armor_value_times_100: ((i * 37) % 50 * 100) as u32,
                }),
                2 => HostForm::Ammo(AmmoForm {
                    form_id,
                    flags: if i % 3 == 0 { 0 } else { 0x04 },
                    damage: ((i * 37) % 50) as f32,
                }),
                _ => HostForm::Other { form_id, form_type: 32 },
            };
            MenuItem::new(format!("Entry {i}"), form)
        })
        .collect()
}
