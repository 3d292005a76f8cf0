//! Defaults for the `dnd5e` system

use super::StaticProvider;

pub(super) const HOST_ID: &str = "dnd5e";

pub(super) const PROVIDER: StaticProvider = StaticProvider {
    icons: ICONS,
    properties: PROPERTIES,
};

const ICONS: &[(&str, &str)] = &[
    ("weapon", "icons/svg/sword.svg"),
    ("equipment", "icons/svg/shield.svg"),
    ("consumable", "icons/svg/potion.svg"),
    ("tool", "icons/svg/anchor.svg"),
    ("loot", "icons/svg/coins.svg"),
    ("backpack", "icons/svg/chest.svg"),
];

const PROPERTIES: &[(&str, &[(&str, bool)])] = &[
    (
        "weapon",
        &[
            ("description.value", true),
            ("rarity", true),
            ("price", true),
            ("weight", false),
            ("attunement", true),
            ("damage.parts", true),
            ("damage.versatile", true),
            ("attackBonus", true),
            ("properties", true),
            ("weaponType", false),
        ],
    ),
    (
        "equipment",
        &[
            ("description.value", true),
            ("rarity", true),
            ("price", true),
            ("weight", false),
            ("attunement", true),
            ("armor.value", true),
            ("armor.dex", true),
            ("strength", false),
            ("stealth", true),
        ],
    ),
    (
        "consumable",
        &[
            ("description.value", true),
            ("rarity", true),
            ("price", true),
            ("weight", false),
            ("uses.value", true),
            ("uses.max", true),
            ("damage.parts", true),
            ("consumableType", false),
        ],
    ),
    (
        "tool",
        &[
            ("description.value", true),
            ("rarity", true),
            ("price", true),
            ("weight", false),
            ("proficient", false),
            ("ability", true),
        ],
    ),
    (
        "loot",
        &[
            ("description.value", true),
            ("rarity", true),
            ("price", true),
            ("weight", false),
        ],
    ),
    (
        "backpack",
        &[
            ("description.value", true),
            ("rarity", true),
            ("price", true),
            ("weight", false),
            ("capacity.value", true),
            ("currency", true),
        ],
    ),
];
