//! Page layout for the story document.
//!
//! Geometry is expressed in millimetres with the origin at the top-left corner
//! of the page, the way a flowing text cursor moves. Conversion to PDF points
//! happens in [`crate::pdf`].
//!
//! ```text
//! +---------------------------+  10 mm top margin
//! | SpecGenie - User Stories  |  title cell, 10 mm
//! |                           |  5 mm gap
//! | - As a user, I want ...   |  8 mm per wrapped line
//! |   continued line          |
//! |                           |  1 mm gap after each story
//! | - As a user, ...          |
//! |                           |
//! +---------------------------+  break 20 mm above the bottom edge
//! ```

use genie_core::UserStory;

/// Fixed page and typography metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub width_mm: f32,
    pub height_mm: f32,
    /// Left, right, and top margin.
    pub margin_mm: f32,
    /// Distance from the bottom edge at which a new page starts.
    pub break_margin_mm: f32,
    /// Horizontal padding inside a text cell.
    pub cell_padding_mm: f32,
    pub font_size_pt: f32,
    /// Advance width of one glyph as a fraction of the font size.
    pub glyph_width_em: f32,
    pub title_height_mm: f32,
    pub title_gap_mm: f32,
    pub line_height_mm: f32,
    pub story_gap_mm: f32,
}

/// A4 portrait, 12 pt Courier.
pub const A4: PageMetrics = PageMetrics {
    width_mm: 210.0,
    height_mm: 297.0,
    margin_mm: 10.0,
    break_margin_mm: 20.0,
    cell_padding_mm: 1.0,
    font_size_pt: 12.0,
    glyph_width_em: 0.6,
    title_height_mm: 10.0,
    title_gap_mm: 5.0,
    line_height_mm: 8.0,
    story_gap_mm: 1.0,
};

pub(crate) const PT_PER_MM: f32 = 72.0 / 25.4;

impl PageMetrics {
    /// Lowest y a line may reach before the page breaks.
    #[must_use]
    pub fn break_at_mm(&self) -> f32 {
        self.height_mm - self.break_margin_mm
    }

    /// Glyphs that fit on one wrapped line.
    #[must_use]
    pub fn chars_per_line(&self) -> usize {
        let usable = self.width_mm - 2.0 * self.margin_mm - 2.0 * self.cell_padding_mm;
        let glyph_mm = self.font_size_pt * self.glyph_width_em / PT_PER_MM;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (usable / glyph_mm).floor().max(1.0) as usize
        }
    }

    fn font_size_mm(&self) -> f32 {
        self.font_size_pt / PT_PER_MM
    }

    /// Baseline of text vertically centred in a cell starting at `top`.
    fn baseline(&self, top: f32, height: f32) -> f32 {
        top + height / 2.0 + 0.3 * self.font_size_mm()
    }
}

/// One line of text at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x_mm: f32,
    pub baseline_mm: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// The story document split into pages.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryLayout {
    pub metrics: PageMetrics,
    pub pages: Vec<Page>,
}

impl StoryLayout {
    /// Lay out `title` followed by one `- story` paragraph per story on A4.
    #[must_use]
    pub fn paginate(title: &str, stories: &[UserStory]) -> Self {
        Self::paginate_with(A4, title, stories)
    }

    #[must_use]
    pub fn paginate_with(metrics: PageMetrics, title: &str, stories: &[UserStory]) -> Self {
        let mut cursor = Cursor::new(metrics);

        cursor.place(title, metrics.title_height_mm);
        cursor.advance(metrics.title_gap_mm);

        let width = metrics.chars_per_line();
        for story in stories {
            for line in wrap(&format!("- {story}"), width) {
                cursor.place(&line, metrics.line_height_mm);
            }
            cursor.advance(metrics.story_gap_mm);
        }

        Self {
            metrics,
            pages: cursor.finish(),
        }
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Flowing text cursor that starts a new page when a line would cross the
/// break margin.
struct Cursor {
    metrics: PageMetrics,
    pages: Vec<Page>,
    current: Page,
    y: f32,
}

impl Cursor {
    fn new(metrics: PageMetrics) -> Self {
        Self {
            metrics,
            pages: Vec::new(),
            current: Page::default(),
            y: metrics.margin_mm,
        }
    }

    fn place(&mut self, text: &str, height: f32) {
        if self.y + height > self.metrics.break_at_mm() && !self.current.lines.is_empty() {
            self.pages.push(std::mem::take(&mut self.current));
            self.y = self.metrics.margin_mm;
        }

        self.current.lines.push(PlacedLine {
            x_mm: self.metrics.margin_mm + self.metrics.cell_padding_mm,
            baseline_mm: self.metrics.baseline(self.y, height),
            text: text.to_string(),
        });
        self.y += height;
    }

    fn advance(&mut self, gap: f32) {
        self.y += gap;
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Greedy word wrap to at most `width` characters per line.
///
/// Whitespace runs collapse to a single space; words longer than a line are
/// split across lines.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        let needed = if line_len == 0 {
            chars.len()
        } else {
            line_len + 1 + chars.len()
        };
        if needed <= width {
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(chars.iter());
            line_len += chars.len();
            continue;
        }

        if line_len > 0 {
            lines.push(std::mem::take(&mut line));
        }

        while chars.len() > width {
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        line_len = chars.len();
        line.extend(chars);
    }

    if line_len > 0 || lines.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use genie_core::UserStory;
    use pretty_assertions::assert_eq;

    use super::{A4, StoryLayout, wrap};

    fn stories(count: usize) -> Vec<UserStory> {
        (0..count)
            .map(|i| UserStory::new(format!("As a user, I want to do thing number {i}.")))
            .collect()
    }

    #[test]
    fn a4_courier_fits_seventy_four_columns() {
        assert_eq!(A4.chars_per_line(), 74);
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("- short story", 74), vec!["- short story"]);
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap("alpha beta gamma delta", 11),
            vec!["alpha beta", "gamma delta"]
        );
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn overlong_word_after_text_starts_a_fresh_line() {
        assert_eq!(wrap("ab abcdefghij", 4), vec!["ab", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_of_blank_text_is_one_empty_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn title_is_first_line_of_first_page() {
        let layout = StoryLayout::paginate("SpecGenie - User Stories", &stories(2));
        assert_eq!(layout.page_count(), 1);

        let lines = &layout.pages[0].lines;
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "SpecGenie - User Stories");
        assert!(lines[1].text.starts_with("- As a user"));
        assert!(lines[1].baseline_mm > lines[0].baseline_mm);
    }

    #[test]
    fn story_spacing_is_line_height_plus_gap() {
        let layout = StoryLayout::paginate("T", &stories(3));
        let lines = &layout.pages[0].lines;
        let step = lines[2].baseline_mm - lines[1].baseline_mm;
        assert!((step - 9.0).abs() < 1e-3, "step was {step}");
    }

    #[test]
    fn long_lists_spill_onto_new_pages() {
        // 25 mm header, 9 mm per single-line story, break at 277 mm.
        let layout = StoryLayout::paginate("T", &stories(40));
        assert_eq!(layout.page_count(), 2);

        let first = layout.pages[0].lines.len();
        let second = layout.pages[1].lines.len();
        assert_eq!(first + second, 41);
        assert_eq!(first, 29);
        assert!(
            layout.pages[1].lines[0].baseline_mm < layout.pages[0].lines[1].baseline_mm,
            "second page restarts at the top margin"
        );
    }
}
