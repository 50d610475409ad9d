use super::items::items;
use crate::location::{Direction::*, Location};

/// Every location of the reference world.
pub fn all() -> Vec<Location> {
    vec![
        Location::new(
            "village-square",
            "Village Square",
            "Cobblestones ring a dry fountain. The tavern sign creaks to the north, \
             market stalls crowd the east, and the temple bell hangs quiet to the west. \
             A dirt road leads south toward the woods.",
        )
        .with_exit(North, "tavern")
        .with_exit(East, "market")
        .with_exit(West, "temple")
        .with_exit(South, "forest-path")
        .with_npc("captain-rurik"),
        Location::new(
            "tavern",
            "The Sleeping Stag",
            "Low beams, a crackling hearth, and the smell of stew. A few locals \
             nurse their ale and pretend not to stare.",
        )
        .with_exit(South, "village-square")
        .with_npc("marta"),
        Location::new(
            "market",
            "Market Row",
            "Canvas awnings flap over tables of produce, pots, and cheap trinkets. \
             A forge glows at the far end.",
        )
        .with_exit(West, "village-square")
        .with_npc("tobias")
        .with_npc("greta"),
        Location::new(
            "temple",
            "Temple of the Dawn",
            "Pale light falls through high windows onto worn pews. The air is still \
             and smells of incense.",
        )
        .with_exit(East, "village-square")
        .with_npc("sister-elowen"),
        Location::new(
            "forest-path",
            "Forest Path",
            "The road narrows to a rutted track under old oaks. Smoke rises from a hut \
             to the east; the trees grow thick and dark to the west. The track \
             continues south toward the hills.",
        )
        .with_exit(North, "village-square")
        .with_exit(East, "hermit-hut")
        .with_exit(West, "dark-woods")
        .with_exit(South, "cave-entrance")
        .with_items(items(&["torch"])),
        Location::new(
            "hermit-hut",
            "Hermit's Hut",
            "A cramped hut stuffed with drying herbs, bones, and books with broken spines.",
        )
        .with_exit(West, "forest-path")
        .with_npc("old-hermit")
        .with_items(items(&["health-potion"])),
        Location::new(
            "dark-woods",
            "Dark Woods",
            "Branches knit overhead and shut out the sun. Something has been gnawing \
             on the bones scattered here.",
        )
        .with_exit(East, "forest-path")
        .with_npc("grey-wolf")
        .with_items(items(&["rations"])),
        Location::new(
            "cave-entrance",
            "Cave Entrance",
            "A black mouth in the hillside, marked with crude goblin daubings. \
             A rough slope leads down into the dark.",
        )
        .with_exit(North, "forest-path")
        .with_exit(Down, "goblin-warren")
        .with_items(items(&["rope"])),
        Location::new(
            "goblin-warren",
            "Goblin Warren",
            "A low cavern littered with filthy bedding and gnawed bones. Torchlight \
             flickers from a passage to the east.",
        )
        .with_exit(Up, "cave-entrance")
        .with_exit(East, "chieftain-hall")
        .with_npc("goblin-warrior")
        .with_npc("goblin-archer")
        .with_items(items(&["gold-ring"])),
        Location::new(
            "chieftain-hall",
            "Chieftain's Hall",
            "A vaulted chamber with a throne of lashed bones. Stolen goods are piled \
             against the walls.",
        )
        .with_exit(West, "goblin-warren")
        .with_npc("goblin-chieftain")
        .with_items(items(&["ancient-amulet"])),
    ]
}
