//! Entity extraction by keyword containment.

use crate::keywords::ENTITY_KEYWORDS;
use crate::model::Entity;

/// Name of the entity emitted when no keyword matches.
pub const DEFAULT_ENTITY_NAME: &str = "System";

/// Responsibilities of the fallback entity.
pub const DEFAULT_ENTITY_RESPONSIBILITIES: &str =
    "Handle core business logic and user interactions";

/// Scan `description` for known domain keywords.
///
/// Matching is plain substring containment on the lower-cased text, so a
/// keyword also matches inside longer words ("cart" in "cartography"). Output
/// follows table order, one entity per keyword, and is never empty.
#[must_use]
pub fn extract(description: &str) -> Vec<Entity> {
    let haystack = description.to_lowercase();

    let entities: Vec<Entity> = ENTITY_KEYWORDS
        .iter()
        .filter(|(keyword, _)| haystack.contains(keyword))
        .map(|(keyword, responsibilities)| Entity {
            name: capitalize(keyword),
            responsibilities: (*responsibilities).to_string(),
        })
        .collect();

    if entities.is_empty() {
        vec![Entity {
            name: DEFAULT_ENTITY_NAME.to_string(),
            responsibilities: DEFAULT_ENTITY_RESPONSIBILITIES.to_string(),
        }]
    } else {
        entities
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}
