//! Entity name resolution.
//!
//! Lookup order is fixed: exact id, then a substring of the display name,
//! then (for NPCs) the words joined with hyphens as an id. The first match
//! wins. Fuzzy similarity is only used to suggest a name when nothing
//! matched; it never picks the entity.

use ql_core::{Item, Npc};
use ql_mechanics::Enemy;
use strsim::jaro_winkler;

use crate::error::ParseError;

/// Minimum similarity score for a "did you mean" suggestion (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Something with an id and a display name.
pub trait Named {
    /// Stable identifier.
    fn id(&self) -> &str;
    /// Display name.
    fn name(&self) -> &str;
}

impl Named for Item {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Npc {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Enemy {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// Find the first candidate matching `query`.
///
/// `hyphen_ids` enables the last step, matching `"captain rurik"` to the
/// id `captain-rurik`.
pub fn resolve<'a, T: Named>(candidates: &[&'a T], query: &str, hyphen_ids: bool) -> Option<&'a T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    if let Some(found) = candidates.iter().find(|c| c.id().to_lowercase() == query) {
        return Some(*found);
    }
    if let Some(found) = candidates
        .iter()
        .find(|c| c.name().to_lowercase().contains(&query))
    {
        return Some(*found);
    }
    if hyphen_ids {
        let slug = query.replace(' ', "-");
        return candidates
            .iter()
            .find(|c| c.id().to_lowercase() == slug)
            .copied();
    }
    None
}

/// The candidate name most similar to `query`, if similar enough.
pub fn suggest<T: Named>(candidates: &[&T], query: &str) -> Option<String> {
    let query = query.to_lowercase();
    candidates
        .iter()
        .map(|c| (c.name(), jaro_winkler(&query, &c.name().to_lowercase())))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name.to_string())
}

/// Resolve `query`, or build a [`ParseError::NotFound`] with a suggestion.
///
/// `what` completes the sentence "There is no \"x\" ...".
pub fn find<'a, T: Named>(
    candidates: &[&'a T],
    query: &str,
    hyphen_ids: bool,
    what: &str,
) -> Result<&'a T, ParseError> {
    resolve(candidates, query, hyphen_ids).ok_or_else(|| ParseError::NotFound {
        what: what.to_string(),
        name: query.to_string(),
        suggestion: suggest(candidates, query),
    })
}
