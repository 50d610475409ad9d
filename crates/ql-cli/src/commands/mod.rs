pub mod classes;
pub mod play;
pub mod world;

use std::path::Path;

use ql_core::WorldTemplate;

/// Read a world file and refuse it if validation finds errors.
///
/// Warnings are printed to stderr and do not stop loading.
fn load_world(path: &Path) -> Result<WorldTemplate, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let template = WorldTemplate::from_json(&json)
        .map_err(|e| format!("invalid world file {}: {e}", path.display()))?;

    let issues = template.validate();
    for issue in &issues {
        eprintln!("  {issue}");
    }
    let errors = issues.iter().filter(|i| i.is_error).count();
    if errors > 0 {
        return Err(format!("{} has {errors} error(s)", path.display()));
    }
    tracing::debug!(path = %path.display(), locations = template.locations.len(), "world loaded");
    Ok(template)
}
