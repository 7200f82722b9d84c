//! Story synthesis: one templated user story per statement.

use crate::keywords::FILLER_PREFIXES;
use crate::model::UserStory;

/// Statements shorter than this (in characters, after trimming) are noise.
pub const MIN_STATEMENT_CHARS: usize = 10;

/// Story returned when no statement survives filtering.
pub const DEFAULT_STORY: &str =
    "As a user, I want to use the system so that I can accomplish my tasks.";

const STORY_PREFIX: &str = "As a user, I want to ";
const STORY_SUFFIX: &str = " so that I can accomplish my goals efficiently.";

/// Rewrite every statement of `description` into a user story.
///
/// Statements are separated by runs of `.` or newline characters. Never returns
/// an empty vector.
#[must_use]
pub fn synthesize(description: &str) -> Vec<UserStory> {
    let stories: Vec<UserStory> = statements(description)
        .map(|statement| UserStory::new(render(&action_of(statement))))
        .collect();

    if stories.is_empty() {
        vec![UserStory::new(DEFAULT_STORY)]
    } else {
        stories
    }
}

/// Trimmed statements long enough to be treated as real requirements.
fn statements(description: &str) -> impl Iterator<Item = &str> {
    description
        .split(['.', '\n'])
        .map(str::trim)
        .filter(|segment| segment.chars().count() >= MIN_STATEMENT_CHARS)
}

/// Lower-case a statement and drop one leading filler prefix.
fn action_of(statement: &str) -> String {
    let lowered = statement.to_lowercase();
    FILLER_PREFIXES
        .iter()
        .find_map(|prefix| lowered.strip_prefix(prefix))
        .map_or_else(|| lowered.clone(), str::to_string)
}

fn render(action: &str) -> String {
    let mut story = String::with_capacity(STORY_PREFIX.len() + action.len() + STORY_SUFFIX.len());
    story.push_str(STORY_PREFIX);
    story.push_str(action);
    story.push_str(STORY_SUFFIX);
    story
}
