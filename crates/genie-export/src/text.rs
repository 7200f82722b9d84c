//! Plain-text rendering of the story document.

use std::fmt::Write as _;

use genie_core::UserStory;

use crate::TITLE;

/// Title, a blank line, then one `- story` line per story.
#[must_use]
pub fn render_text(stories: &[UserStory]) -> String {
    let mut out = String::with_capacity(TITLE.len() + 2 + stories.len() * 96);
    out.push_str(TITLE);
    out.push_str("\n\n");
    for story in stories {
        let _ = writeln!(out, "- {story}");
    }
    out
}
