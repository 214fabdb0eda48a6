//! The fixed extraction plan: every data category saved per run, in order.

/// One auxiliary data category: endpoint template, output filename, and a
/// human description for progress and warning messages.
///
/// Templates use `{uuid}` (raw player uuid) and `{profile}` (profile id)
/// placeholders.
#[derive(Debug, Clone, Copy)]
pub struct PlanEntry {
    pub endpoint: &'static str,
    pub file: &'static str,
    pub description: &'static str,
}

const fn entry(
    endpoint: &'static str,
    file: &'static str,
    description: &'static str,
) -> PlanEntry {
    PlanEntry {
        endpoint,
        file,
        description,
    }
}

/// Ordered plan. Reordering would not change the result set, only the
/// file-write order, but the order is kept deterministic.
pub const EXTRACTION_PLAN: &[PlanEntry] = &[
    entry("stats/{uuid}/{profile}", "stats.json", "Profile Statistics"),
    entry("playerStats/{uuid}/{profile}", "player_stats.json", "Player Performance"),
    entry("networth/{uuid}/{profile}", "networth.json", "Networth Analysis"),
    entry("skills/{uuid}/{profile}", "skills.json", "Skills & XP"),
    entry("dungeons/{uuid}/{profile}", "dungeons.json", "Dungeon Progress"),
    entry("slayer/{uuid}/{profile}", "slayer.json", "Slayer Statistics"),
    entry("collections/{uuid}/{profile}", "collections.json", "Collection Progress"),
    entry("gear/{uuid}/{profile}", "gear.json", "Equipment & Gear"),
    entry("accessories/{uuid}/{profile}", "accessories.json", "Accessories & Talismans"),
    entry("pets/{uuid}/{profile}", "pets.json", "Pet Collection"),
    entry("minions/{uuid}/{profile}", "minions.json", "Minion Data"),
    entry("bestiary/{uuid}/{profile}", "bestiary.json", "Bestiary Progress"),
    entry("crimson_isle/{uuid}/{profile}", "crimson_isle.json", "Crimson Isle Progress"),
    entry("rift/{uuid}/{profile}", "rift.json", "Rift Dimension"),
    entry("misc/{uuid}/{profile}", "misc.json", "Miscellaneous Data"),
    entry("garden/{profile}", "garden.json", "Garden Progress"),
    entry(
        "inventory/{uuid}/{profile}/inv_contents",
        "inventory_inv_contents.json",
        "Main Inventory",
    ),
    entry(
        "inventory/{uuid}/{profile}/ender_chest_contents",
        "inventory_ender_chest_contents.json",
        "Ender Chest",
    ),
    entry(
        "inventory/{uuid}/{profile}/wardrobe_contents",
        "inventory_wardrobe_contents.json",
        "Wardrobe",
    ),
    entry(
        "inventory/{uuid}/{profile}/personal_vault_contents",
        "inventory_personal_vault_contents.json",
        "Personal Vault",
    ),
    entry(
        "inventory/{uuid}/{profile}/bag_contents",
        "inventory_bag_contents.json",
        "All Bags",
    ),
    entry(
        "inventory/{uuid}/{profile}/fishing_bag",
        "inventory_fishing_bag.json",
        "Fishing Bag",
    ),
    entry(
        "inventory/{uuid}/{profile}/potion_bag",
        "inventory_potion_bag.json",
        "Potion Bag",
    ),
    entry(
        "inventory/{uuid}/{profile}/candy_inventory_contents",
        "inventory_candy_inventory_contents.json",
        "Candy Inventory",
    ),
    entry(
        "inventory/{uuid}/{profile}/quiver",
        "inventory_quiver.json",
        "Quiver",
    ),
];

/// Substitutes the `{uuid}` and `{profile}` placeholders.
pub fn render_endpoint(template: &str, uuid: &str, profile_id: &str) -> String {
    template
        .replace("{uuid}", uuid)
        .replace("{profile}", profile_id)
}
