//! Defaults for the `wfrp4e` system

use super::StaticProvider;

pub(super) const HOST_ID: &str = "wfrp4e";

pub(super) const PROVIDER: StaticProvider = StaticProvider {
    icons: ICONS,
    properties: PROPERTIES,
};

const ICONS: &[(&str, &str)] = &[
    ("weapon", "icons/svg/sword.svg"),
    ("armour", "icons/svg/shield.svg"),
    ("trapping", "icons/svg/item-bag.svg"),
    ("ammunition", "icons/svg/target.svg"),
    ("container", "icons/svg/chest.svg"),
    ("money", "icons/svg/coins.svg"),
];

const PROPERTIES: &[(&str, &[(&str, bool)])] = &[
    (
        "weapon",
        &[
            ("description.value", true),
            ("price.gc", true),
            ("price.ss", true),
            ("price.bp", true),
            ("encumbrance.value", false),
            ("availability.value", true),
            ("damage.value", true),
            ("reach.value", true),
            ("range.value", true),
            ("weaponGroup.value", true),
            ("qualities.value", true),
            ("flaws.value", true),
        ],
    ),
    (
        "armour",
        &[
            ("description.value", true),
            ("price.gc", true),
            ("price.ss", true),
            ("price.bp", true),
            ("encumbrance.value", false),
            ("availability.value", true),
            ("armorType.value", true),
            ("qualities.value", true),
            ("flaws.value", true),
        ],
    ),
    (
        "trapping",
        &[
            ("description.value", true),
            ("price.gc", true),
            ("price.ss", true),
            ("price.bp", true),
            ("encumbrance.value", false),
            ("availability.value", true),
            ("trappingType.value", true),
        ],
    ),
    (
        "ammunition",
        &[
            ("description.value", true),
            ("price.gc", true),
            ("price.ss", true),
            ("price.bp", true),
            ("encumbrance.value", false),
            ("availability.value", true),
            ("damage.value", true),
            ("range.value", true),
            ("qualities.value", true),
            ("flaws.value", true),
        ],
    ),
    (
        "container",
        &[
            ("description.value", true),
            ("price.gc", true),
            ("price.ss", true),
            ("price.bp", true),
            ("encumbrance.value", false),
            ("availability.value", true),
            ("carries.value", true),
        ],
    ),
];
