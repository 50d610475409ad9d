use std::path::Path;

use colored::Colorize;
use ql_core::WorldTemplate;

pub fn export(output: Option<&Path>) -> Result<(), String> {
    let json = WorldTemplate::standard()
        .to_json_pretty()
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, format!("{json}\n"))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{json}");
    }

    Ok(())
}

pub fn check(file: &Path) -> Result<(), String> {
    let template = super::load_world(file)?;
    let warnings = template.validate().len();

    println!("  {} for '{}'.", "All checks passed".green(), file.display());
    println!(
        "  {} locations, {} NPCs, {warnings} warning(s)",
        template.locations.len(),
        template.npcs.len()
    );

    Ok(())
}
