use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemCategory};

/// Ids of every item in the catalog.
pub const ITEM_IDS: [&str; 17] = [
    "longsword",
    "quarterstaff",
    "dagger",
    "mace",
    "shortbow",
    "chain-shirt",
    "leather-armor",
    "shield",
    "health-potion",
    "spellbook",
    "lockpicks",
    "holy-symbol",
    "torch",
    "rope",
    "rations",
    "gold-ring",
    "ancient-amulet",
];

fn entry(id: &str) -> Option<Item> {
    use ItemCategory::*;
    let item = match id {
        "longsword" => Item::new(id, "Longsword", Weapon)
            .with_description("A well-balanced steel blade.")
            .with_weight(3.0)
            .with_value(15),
        "quarterstaff" => Item::new(id, "Quarterstaff", Weapon)
            .with_description("A stout length of ash wood.")
            .with_weight(4.0)
            .with_value(2),
        "dagger" => Item::new(id, "Dagger", Weapon)
            .with_description("Short, sharp, and easy to hide.")
            .with_weight(1.0)
            .with_value(2),
        "mace" => Item::new(id, "Mace", Weapon)
            .with_description("A flanged iron head on an oak haft.")
            .with_weight(4.0)
            .with_value(5),
        "shortbow" => Item::new(id, "Shortbow", Weapon)
            .with_description("A hunter's bow of yew.")
            .with_weight(2.0)
            .with_value(25),
        "chain-shirt" => Item::new(id, "Chain Shirt", Armor)
            .with_description("Interlocking rings worn under a tunic.")
            .with_weight(20.0)
            .with_value(50),
        "leather-armor" => Item::new(id, "Leather Armor", Armor)
            .with_description("Boiled leather, stiff and scuffed.")
            .with_weight(10.0)
            .with_value(10),
        "shield" => Item::new(id, "Shield", Armor)
            .with_description("A round wooden shield rimmed in iron.")
            .with_weight(6.0)
            .with_value(10),
        "health-potion" => Item::new(id, "Health Potion", Potion)
            .with_description("A red draught that knits flesh.")
            .with_weight(0.5)
            .with_value(10)
            .usable(),
        "spellbook" => Item::new(id, "Spellbook", Misc)
            .with_description("Dense notes in a cramped hand.")
            .with_weight(3.0)
            .with_value(25),
        "lockpicks" => Item::new(id, "Lockpicks", Tool)
            .with_description("A roll of fine steel picks.")
            .with_weight(1.0)
            .with_value(25)
            .usable(),
        "holy-symbol" => Item::new(id, "Holy Symbol", Misc)
            .with_description("A silver sunburst on a leather cord.")
            .with_weight(1.0)
            .with_value(5)
            .usable(),
        "torch" => Item::new(id, "Torch", Tool)
            .with_description("Pitch-soaked rags on a stick.")
            .with_weight(1.0)
            .with_value(1)
            .usable(),
        "rope" => Item::new(id, "Rope", Tool)
            .with_description("Fifty feet of hempen rope.")
            .with_weight(10.0)
            .with_value(1),
        "rations" => Item::new(id, "Rations", Misc)
            .with_description("Hard bread, dried meat, and a wedge of cheese.")
            .with_weight(2.0)
            .with_value(5)
            .usable(),
        "gold-ring" => Item::new(id, "Gold Ring", Treasure)
            .with_description("A plain band, heavier than it looks.")
            .with_weight(0.1)
            .with_value(75),
        "ancient-amulet" => Item::new(id, "Ancient Amulet", Treasure)
            .with_description("Green stone set in tarnished bronze. It hums faintly.")
            .with_weight(0.5)
            .with_value(150),
        _ => return None,
    };
    Some(item)
}

/// Every catalog item, in catalog order.
pub fn catalog() -> Vec<Item> {
    ITEM_IDS.iter().filter_map(|id| entry(id)).collect()
}

/// Look up a catalog item by id.
pub fn item(id: &str) -> CoreResult<Item> {
    entry(id).ok_or_else(|| CoreError::UnknownItem(id.to_string()))
}

/// Catalog items for a list of ids. Unknown ids are skipped.
pub(crate) fn items(ids: &[&str]) -> Vec<Item> {
    ids.iter().filter_map(|id| entry(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_has_an_entry() {
        assert_eq!(catalog().len(), ITEM_IDS.len());
        for item in catalog() {
            assert!(!item.description.is_empty(), "{}", item.id);
        }
    }

    #[test]
    fn unknown_item_errors() {
        assert!(matches!(item("bfg"), Err(CoreError::UnknownItem(_))));
        assert!(item("health-potion").unwrap().is_potion());
    }
}
