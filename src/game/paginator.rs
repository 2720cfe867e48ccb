//! Found-word list laid out in fixed-height columns, two columns per page
//!
//! Rows are built by reading across the columns, then windowed horizontally
//! by the (animated) page offset so paging scrolls smoothly.

use super::animation::{AnimatedValue, PAGE_SCROLL};
use super::view::capitalize;
use crate::core::is_pangram;

/// Columns visible at once
pub const COLUMNS_PER_PAGE: usize = 2;

/// Split words into columns of at most `column_height`, taking from the end of `words`
///
/// With `words` sorted in descending order this yields columns in ascending
/// order. The last column may be short. A zero height yields no columns.
///
/// # Examples
/// ```
/// use terminal_bee::game::paginator::columnify;
///
/// let words: Vec<String> = (0..13).map(|i| format!("w{i:02}")).rev().collect();
/// let columns = columnify(&words, 5);
/// let sizes: Vec<usize> = columns.iter().map(Vec::len).collect();
/// assert_eq!(sizes, vec![5, 5, 3]);
/// assert_eq!(columns[0][0], "w00");
/// ```
#[must_use]
pub fn columnify<S: AsRef<str>>(words: &[S], column_height: usize) -> Vec<Vec<String>> {
    if column_height == 0 {
        return Vec::new();
    }

    let mut remaining: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
    let mut columns = Vec::new();
    while !remaining.is_empty() {
        let mut column = Vec::with_capacity(column_height);
        while column.len() < column_height {
            let Some(word) = remaining.pop() else { break };
            column.push(word);
        }
        columns.push(column);
    }
    columns
}

/// Pages needed to show `column_count` columns
#[must_use]
pub const fn page_count(column_count: usize) -> usize {
    column_count.div_ceil(COLUMNS_PER_PAGE)
}

/// Pages needed for `word_count` words in columns of `column_height`
///
/// A zero height is treated as one.
#[must_use]
pub const fn page_count_for(word_count: usize, column_height: usize) -> usize {
    let height = if column_height == 0 { 1 } else { column_height };
    page_count(word_count.div_ceil(height))
}

/// Character window `(start, length)` into a row for a page offset
///
/// One page is two columns plus their separators: `column_width * 2 + 2`
/// characters. The start rounds halves to even.
#[must_use]
pub fn visible_slice(page_offset: f64, column_width: usize) -> (usize, usize) {
    let length = column_width * COLUMNS_PER_PAGE + 2;
    let start = (page_offset.max(0.0) * length as f64).round_ties_even() as usize;
    (start, length)
}

/// One full row across all columns plus the divider drawn beneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    pub text: String,
    pub divider: String,
}

/// Read across columns row by row, padding or truncating each word to `column_width`
#[must_use]
pub fn layout_rows(columns: &[Vec<String>], column_width: usize) -> Vec<LayoutRow> {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            let parts: Vec<&String> = columns.iter().filter_map(|c| c.get(row)).collect();
            let cells: Vec<String> = parts
                .iter()
                .map(|word| {
                    let cut: String = word.chars().take(column_width).collect();
                    format!("{cut:<column_width$}")
                })
                .collect();
            let rules = vec!["─".repeat(column_width); parts.len()];
            LayoutRow {
                text: format!(" {}", cells.join(" ")),
                divider: format!(" {}", rules.join(" ")),
            }
        })
        .collect()
}

/// Characters `start..start + length` of `s`, counted in chars
#[must_use]
pub fn window(s: &str, start: usize, length: usize) -> String {
    s.chars().skip(start).take(length).collect()
}

/// A word fragment visible in the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCell {
    pub text: String,
    pub pangram: bool,
}

/// A windowed row ready to draw: cells are separated by single spaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub cells: Vec<WordCell>,
    pub divider: String,
}

/// Page indicator: one dot per page, `current` highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDots {
    pub count: usize,
    pub current: usize,
}

/// Everything the word list shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct WordListPage {
    pub found_count: usize,
    pub rows: Vec<VisibleRow>,
    pub dots: Option<PageDots>,
    pub column_width: usize,
}

/// Column dimensions plus the target and animated current page
#[derive(Debug, Clone)]
pub struct Paginator {
    column_width: usize,
    rows_per_column: usize,
    target_page: usize,
    page: AnimatedValue,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            column_width: 0,
            rows_per_column: 0,
            target_page: 0,
            page: AnimatedValue::new(0.0),
        }
    }

    /// Derive column dimensions from the word-strip width and main area height
    ///
    /// Width is `round(strip_width / 2) - 2`, rows are `main_height / 2 - 3`,
    /// both saturating at zero.
    pub fn set_dimensions(&mut self, strip_width: u16, main_height: u16) {
        let half_width = (f64::from(strip_width) / 2.0).round_ties_even() as usize;
        self.column_width = half_width.saturating_sub(2);
        self.rows_per_column = usize::from(main_height / 2).saturating_sub(3);
    }

    /// New dimensions after a resize; the page snaps back to the first
    pub fn resize(&mut self, strip_width: u16, main_height: u16) {
        self.set_dimensions(strip_width, main_height);
        self.target_page = 0;
        self.page.set(0.0);
    }

    /// Back to the first page with no animation
    pub fn reset(&mut self) {
        self.target_page = 0;
        self.page.set(0.0);
    }

    #[must_use]
    pub const fn column_width(&self) -> usize {
        self.column_width
    }

    #[must_use]
    pub const fn rows_per_column(&self) -> usize {
        self.rows_per_column
    }

    #[must_use]
    pub const fn target_page(&self) -> usize {
        self.target_page
    }

    #[must_use]
    pub fn page_offset(&self, now: f64) -> f64 {
        self.page.value_at(now)
    }

    /// Whether a page scroll is still in progress
    #[must_use]
    pub fn is_animating(&self, now: f64) -> bool {
        self.page.is_animating(now)
    }

    #[must_use]
    pub const fn page_count(&self, word_count: usize) -> usize {
        page_count_for(word_count, self.rows_per_column)
    }

    /// Move one page left; returns whether the target changed
    pub fn scroll_left(&mut self, now: f64) -> bool {
        if self.target_page == 0 {
            return false;
        }
        self.set_target(self.target_page - 1, now);
        true
    }

    /// Move one page right if there is a further page; returns whether the target changed
    pub fn scroll_right(&mut self, word_count: usize, now: f64) -> bool {
        if self.target_page + 1 >= self.page_count(word_count) {
            return false;
        }
        self.set_target(self.target_page + 1, now);
        true
    }

    fn set_target(&mut self, page: usize, now: f64) {
        self.target_page = page;
        self.page.animate_to(page as f64, now, PAGE_SCROLL);
    }

    /// Lay out `found_words` and window it at the current page offset
    ///
    /// Returns `None` while the dimensions leave no room for a column.
    #[must_use]
    pub fn render(&self, found_words: &[String], now: f64) -> Option<WordListPage> {
        if self.rows_per_column == 0 || self.column_width == 0 {
            return None;
        }

        let mut sorted: Vec<String> = found_words.iter().map(|w| capitalize(w)).collect();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let columns = columnify(&sorted, self.rows_per_column);
        let offset = self.page_offset(now);
        let (start, length) = visible_slice(offset, self.column_width);

        let rows = layout_rows(&columns, self.column_width)
            .into_iter()
            .map(|row| VisibleRow {
                cells: window(&row.text, start, length)
                    .split(' ')
                    .map(|fragment| WordCell {
                        text: fragment.to_string(),
                        pangram: is_pangram(fragment),
                    })
                    .collect(),
                divider: window(&row.divider, start, length),
            })
            .collect();

        let pages = page_count(columns.len());
        let dots = (pages > 1).then(|| PageDots {
            count: pages,
            current: (offset.round_ties_even() as usize).min(pages - 1),
        });

        Some(WordListPage {
            found_count: found_words.len(),
            rows,
            dots,
            column_width: self.column_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word{i:02}")).collect()
    }

    #[test]
    fn thirteen_words_make_two_pages() {
        let list = words(13);
        let columns = columnify(&list, 5);
        let sizes: Vec<usize> = columns.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![5, 5, 3]);
        assert_eq!(page_count(columns.len()), 2);
        assert_eq!(page_count_for(13, 5), 2);
    }

    #[test]
    fn columnify_takes_from_the_end() {
        let list = vec!["c", "b", "a"];
        let columns = columnify(&list, 2);
        assert_eq!(columns, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn columnify_edge_cases() {
        assert!(columnify::<String>(&[], 5).is_empty());
        assert!(columnify(&words(3), 0).is_empty());
        assert_eq!(page_count_for(0, 5), 0);
        assert_eq!(page_count_for(3, 0), 2);
    }

    #[test]
    fn slice_tracks_page_offset() {
        assert_eq!(visible_slice(0.0, 10), (0, 22));
        assert_eq!(visible_slice(1.0, 10), (22, 22));
        assert_eq!(visible_slice(0.5, 10), (11, 22));
        // 0.25 * 10 = 2.5 rounds to even
        assert_eq!(visible_slice(0.25, 4), (2, 10));
        assert_eq!(visible_slice(-0.1, 4), (0, 10));
    }

    #[test]
    fn rows_read_across_columns() {
        let columns = vec![
            vec!["Alpha".to_string(), "Bravo".to_string()],
            vec!["Charlie".to_string()],
        ];
        let rows = layout_rows(&columns, 6);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, " Alpha  Charli");
        assert_eq!(rows[0].divider, " ────── ──────");
        assert_eq!(rows[1].text, " Bravo ");
        assert_eq!(rows[1].divider, " ──────");
    }

    #[test]
    fn window_counts_chars() {
        assert_eq!(window(" ────── ──────", 2, 5), "─────");
        assert_eq!(window("abc", 5, 3), "");
    }

    #[test]
    fn dimensions_from_area() {
        let mut paginator = Paginator::new();
        paginator.set_dimensions(40, 30);
        assert_eq!(paginator.column_width(), 18);
        assert_eq!(paginator.rows_per_column(), 12);

        paginator.set_dimensions(3, 5);
        assert_eq!(paginator.column_width(), 0);
        assert_eq!(paginator.rows_per_column(), 0);
        assert!(paginator.render(&words(3), 0.0).is_none());
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut paginator = Paginator::new();
        // 6 rows per column
        paginator.set_dimensions(24, 18);
        let found = 13; // 3 columns, 2 pages

        assert!(!paginator.scroll_left(0.0));
        assert!(paginator.scroll_right(found, 0.0));
        assert_eq!(paginator.target_page(), 1);
        assert!(!paginator.scroll_right(found, 0.0));
        assert_eq!(paginator.target_page(), 1);

        assert!((paginator.page_offset(0.3) - 1.0).abs() < 1e-9);
        assert!(paginator.scroll_left(0.3));
        assert!(paginator.page_offset(0.6).abs() < 1e-9);
    }

    #[test]
    fn resize_snaps_to_first_page() {
        let mut paginator = Paginator::new();
        paginator.set_dimensions(24, 18);
        paginator.scroll_right(13, 0.0);
        paginator.resize(30, 20);
        assert_eq!(paginator.target_page(), 0);
        assert!(paginator.page_offset(0.1).abs() < 1e-9);
    }

    #[test]
    fn render_sorts_and_marks_pangrams() {
        let mut paginator = Paginator::new();
        // column width 10, 2 rows per column
        paginator.set_dimensions(24, 10);
        let found = vec![
            "labia".to_string(),
            "tableland".to_string(),
            "blab".to_string(),
        ];

        let page = paginator.render(&found, 0.0).unwrap();
        assert_eq!(page.found_count, 3);
        assert_eq!(page.rows.len(), 2);
        assert!(page.dots.is_none());

        let first_row: Vec<&str> = page.rows[0]
            .cells
            .iter()
            .map(|c| c.text.as_str())
            .filter(|t| !t.is_empty())
            .collect();
        assert_eq!(first_row, vec!["Blab", "Tableland"]);
        let pangrams: Vec<&str> = page.rows[0]
            .cells
            .iter()
            .filter(|c| c.pangram)
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(pangrams, vec!["Tableland"]);
    }

    #[test]
    fn render_shows_page_dots() {
        let mut paginator = Paginator::new();
        paginator.set_dimensions(24, 10);
        let found = words(9); // 5 columns of 2, 3 pages

        let page = paginator.render(&found, 0.0).unwrap();
        assert_eq!(page.dots, Some(PageDots { count: 3, current: 0 }));

        paginator.scroll_right(found.len(), 0.0);
        let page = paginator.render(&found, 1.0).unwrap();
        assert_eq!(page.dots, Some(PageDots { count: 3, current: 1 }));
    }
}
