//! Item value types.
//!
//! Items are immutable value records; identity is by content, not by
//! reference, so they can be copied freely between a tile, a backpack, and a
//! transfer snapshot.

/// Broad item classes the maze scenes hand out.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapon,
    InfoCard,
}

/// Damage/element sub-attribute carried by weapons and info cards.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageKind {
    Fire,
    Water,
    Void,
    Electricity,
    Poison,
    Yellow,
}

/// A collectible item: display label plus gameplay classification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub label: String,
    pub category: ItemCategory,
    pub damage: Option<DamageKind>,
}

impl Item {
    pub fn new(label: impl Into<String>, category: ItemCategory, damage: Option<DamageKind>) -> Self {
        Self {
            label: label.into(),
            category,
            damage,
        }
    }

    pub fn weapon(label: impl Into<String>, damage: DamageKind) -> Self {
        Self::new(label, ItemCategory::Weapon, Some(damage))
    }

    pub fn info_card(label: impl Into<String>, damage: DamageKind) -> Self {
        Self::new(label, ItemCategory::InfoCard, Some(damage))
    }
}
