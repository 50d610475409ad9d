use super::items::items;
use crate::ability::Ability;
use crate::dialogue::{DialogueEffect, DialogueNode, DialogueOption};
use crate::npc::{CombatStats, Npc, Shop};

/// Every NPC of the reference world.
pub fn all() -> Vec<Npc> {
    vec![
        captain_rurik(),
        marta(),
        tobias(),
        greta(),
        sister_elowen(),
        old_hermit(),
        grey_wolf(),
        goblin_warrior(),
        goblin_archer(),
        goblin_chieftain(),
    ]
}

fn farewell(text: &str) -> DialogueOption {
    DialogueOption::new(text)
}

fn captain_rurik() -> Npc {
    Npc::new(
        "captain-rurik",
        "Captain Rurik",
        "A grizzled guard captain leaning on a halberd.",
    )
    .with_combat(CombatStats::new(30, 16, 5, "1d10+3"))
    .with_node(
        DialogueNode::new("greeting", "\"Keep your blade sheathed inside the walls, stranger.\"")
            .with_option(DialogueOption::new("Any trouble lately?").with_next("trouble"))
            .with_option(farewell("Goodbye.")),
    )
    .with_node(
        DialogueNode::new(
            "trouble",
            "\"Goblins. They've been raiding the south road from a cave in the hills. \
             Marta at the tavern is offering coin to anyone who'll deal with them.\"",
        )
        .with_option(DialogueOption::new("Anything else?").with_next("greeting"))
        .with_option(farewell("I'll keep my eyes open.")),
    )
}

fn marta() -> Npc {
    Npc::new(
        "marta",
        "Marta",
        "The innkeeper, a broad woman with flour on her sleeves.",
    )
    .quest_giver()
    .with_node(
        DialogueNode::new("greeting", "\"Welcome to the Sleeping Stag! What can I do for you?\"")
            .with_option(DialogueOption::new("Heard any rumors?").with_next("rumors"))
            .with_option(
                DialogueOption::new("I'll deal with the goblins.")
                    .with_next("quest-accepted")
                    .with_effect(DialogueEffect::AcceptQuest {
                        quest_id: "goblin-menace".to_string(),
                    }),
            )
            .with_option(DialogueOption::new("I need a room.").with_next("room"))
            .with_option(farewell("Goodbye.")),
    )
    .with_node(
        DialogueNode::new(
            "rumors",
            "\"The goblins have a chieftain now, a big brute. And the old hermit \
             east of the path claims he knows a way past their guards.\"",
        )
        .with_option(DialogueOption::new("Anything else?").with_next("greeting"))
        .with_option(farewell("Thanks.")),
    )
    .with_node(DialogueNode::new(
        "quest-accepted",
        "\"Bless you. The cave is south past the forest path. Come back in one piece.\"",
    ))
    .with_node(
        DialogueNode::new(
            "room",
            "\"Rest by the fire whenever you like, no charge for heroes.\"",
        )
        .with_option(DialogueOption::new("Something else...").with_next("greeting")),
    )
}

fn tobias() -> Npc {
    Npc::new(
        "tobias",
        "Tobias",
        "A wiry merchant with quick eyes and an ink-stained ledger.",
    )
    .with_shop(Shop::new(
        items(&[
            "health-potion",
            "health-potion",
            "health-potion",
            "torch",
            "rope",
            "rations",
            "lockpicks",
            "shortbow",
        ]),
        1.5,
        0.5,
    ))
    .with_node(
        DialogueNode::new("greeting", "\"Finest goods this side of the river! Buying or selling?\"")
            .with_option(
                DialogueOption::new("Show me your wares.")
                    .with_next("greeting")
                    .with_effect(DialogueEffect::OpenShop {
                        npc_id: "tobias".to_string(),
                    }),
            )
            .with_option(
                DialogueOption::new("What would you pay for my things?")
                    .with_next("greeting")
                    .with_effect(DialogueEffect::ListSellables {
                        npc_id: "tobias".to_string(),
                    }),
            )
            .with_option(
                DialogueOption::new("Surely you can spare a coin for the road?")
                    .with_next("generous")
                    .with_check(Ability::Charisma, 14)
                    .with_effect(DialogueEffect::GiveGold { amount: 10 }),
            )
            .with_option(farewell("Goodbye.")),
    )
    .with_node(DialogueNode::new(
        "generous",
        "\"Fine, fine. Ten gold, and not a copper more. Don't tell the others.\"",
    ))
}

fn greta() -> Npc {
    Npc::new(
        "greta",
        "Greta",
        "The blacksmith, soot-streaked and built like her anvil.",
    )
    .with_shop(Shop::new(
        items(&[
            "longsword",
            "dagger",
            "mace",
            "chain-shirt",
            "leather-armor",
            "shield",
        ]),
        1.25,
        0.5,
    ))
    .with_node(
        DialogueNode::new("greeting", "\"Need steel? I've got steel.\"")
            .with_option(
                DialogueOption::new("Show me what you've forged.")
                    .with_next("greeting")
                    .with_effect(DialogueEffect::OpenShop {
                        npc_id: "greta".to_string(),
                    }),
            )
            .with_option(
                DialogueOption::new("Are you buying?")
                    .with_next("greeting")
                    .with_effect(DialogueEffect::ListSellables {
                        npc_id: "greta".to_string(),
                    }),
            )
            .with_option(farewell("Goodbye.")),
    )
}

fn sister_elowen() -> Npc {
    Npc::new(
        "sister-elowen",
        "Sister Elowen",
        "A young priestess in faded white robes.",
    )
    .with_node(
        DialogueNode::new("greeting", "\"The Dawn watches over all travelers. How may I help?\"")
            .with_option(
                DialogueOption::new("Could you tend my wounds?")
                    .with_next("blessed")
                    .with_effect(DialogueEffect::Heal { amount: 10 }),
            )
            .with_option(
                DialogueOption::new("Tell me of the old gods.")
                    .with_next("lore")
                    .with_check(Ability::Wisdom, 12),
            )
            .with_option(farewell("Farewell.")),
    )
    .with_node(DialogueNode::new(
        "blessed",
        "She lays a cool hand on your brow. Warmth spreads through you.",
    ))
    .with_node(
        DialogueNode::new(
            "lore",
            "\"Before the Dawn there were older powers, bound into stones and amulets. \
             The goblins dig for such things.\"",
        )
        .with_option(DialogueOption::new("I have other questions.").with_next("greeting"))
        .with_option(farewell("Thank you, Sister.")),
    )
}

fn old_hermit() -> Npc {
    Npc::new(
        "old-hermit",
        "Old Hermit",
        "A stooped figure in a patchwork cloak, muttering to a crow.",
    )
    .with_node(
        DialogueNode::new("greeting", "\"Eh? Visitors. Nobody visits.\"")
            .with_option(
                DialogueOption::new("What do you know about the goblin cave?")
                    .with_next("secret")
                    .with_check(Ability::Intelligence, 13),
            )
            .with_option(farewell("Sorry to bother you.")),
    )
    .with_node(DialogueNode::new(
        "secret",
        "\"The chieftain sleeps on an amulet older than this forest. Take it and \
         the rest of them will scatter.\"",
    ))
}

fn grey_wolf() -> Npc {
    Npc::new("grey-wolf", "Grey Wolf", "A lean wolf with a scarred muzzle.")
        .hostile(CombatStats::new(11, 13, 4, "2d4+2"))
        .with_node(DialogueNode::new(
            "encounter",
            "The wolf lowers its head and growls.",
        ))
}

fn goblin_warrior() -> Npc {
    Npc::new(
        "goblin-warrior",
        "Goblin Warrior",
        "A snarling goblin with a notched scimitar.",
    )
    .hostile(CombatStats::new(7, 15, 4, "1d6+2"))
    .with_node(DialogueNode::new("encounter", "\"Manflesh! Get it!\""))
}

fn goblin_archer() -> Npc {
    Npc::new(
        "goblin-archer",
        "Goblin Archer",
        "A goblin crouched behind a crate, nocking an arrow.",
    )
    .hostile(CombatStats::new(7, 13, 4, "1d6+2"))
    .with_node(DialogueNode::new("encounter", "An arrow whistles past your ear."))
}

fn goblin_chieftain() -> Npc {
    Npc::new(
        "goblin-chieftain",
        "Goblin Chieftain",
        "A hulking goblin in mismatched plate, gripping a spiked club.",
    )
    .hostile(CombatStats::new(21, 15, 4, "2d6+2"))
    .with_node(DialogueNode::new(
        "encounter",
        "\"You come to Grishnak's hall? You die in Grishnak's hall!\"",
    ))
}
