use comfy_table::{ContentArrangement, Table};
use ql_core::content::items;
use ql_mechanics::sheet::CLASSES;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Class", "Name", "Hit Die", "Gold", "Weapon", "Equipment"]);

    for class in &CLASSES {
        let equipment = class
            .equipment
            .iter()
            .map(|id| items::item(id).map(|item| item.name).map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");
        let gold = class.gold.to_string();
        let die = class.hit_die.to_string();
        let weapon = if class.ranged {
            format!("{} (ranged)", class.weapon_damage)
        } else {
            class.weapon_damage.to_string()
        };
        table.add_row(vec![
            class.id,
            class.name,
            die.as_str(),
            gold.as_str(),
            weapon.as_str(),
            equipment.as_str(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} classes", CLASSES.len());

    Ok(())
}
