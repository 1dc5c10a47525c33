/// Number of menu rows visible at once inside the picker panel
pub const MENU_ROWS: usize = 10;

/// Cursor and scroll position of the commit picker
///
/// Movement is clamped to the list: Up on the first entry and Down on the
/// last entry leave the cursor where it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    /// Index of the highlighted entry
    pub cursor: usize,
    /// Index of the first visible entry
    pub scroll_offset: usize,
    len: usize,
    visible_rows: usize,
}

impl PickerState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self::with_visible_rows(len, MENU_ROWS)
    }

    #[must_use]
    pub fn with_visible_rows(len: usize, visible_rows: usize) -> Self {
        Self {
            cursor: 0,
            scroll_offset: 0,
            len,
            visible_rows: visible_rows.max(1),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the highlighted entry, if there is one
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.cursor)
    }

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor < self.last_index() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor to top
    pub fn cursor_top(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Move cursor to bottom
    pub fn cursor_bottom(&mut self) {
        self.cursor = self.last_index();
        self.adjust_scroll();
    }

    /// Page up
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_rows);
        self.adjust_scroll();
    }

    /// Page down
    pub fn page_down(&mut self) {
        self.cursor = (self.cursor + self.visible_rows).min(self.last_index());
        self.adjust_scroll();
    }

    fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Adjust scroll offset to keep cursor visible
    fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = self.cursor + 1 - self.visible_rows;
        }
    }
}
