use crate::git::commit::{CommitData, MENU_HASH_LEN};
use crate::state::PickerState;
use crate::ui::theme::Theme;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns of the terminal width not available to the commit summary
/// (borders, label, date and separators)
pub const RESERVED_COLUMNS: u16 = 41;

/// Gap between an entry's label and its description
const LABEL_SPACING: &str = "   ";

/// Truncate `text` so it is at most `max_width` columns wide
///
/// Text that does not fit keeps `max_width - 2` columns of content followed
/// by "..".
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width < 2 {
        return take_width(text, max_width);
    }
    let mut result = take_width(text, max_width - 2);
    result.push_str("..");
    result
}

/// Longest prefix of `text` that fits in `width` columns
fn take_width(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

/// A commit as shown in the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// A space followed by the first 16 hex characters of the id
    pub label: String,
    /// Committer date, " - " and the summary
    pub description: String,
}

impl MenuEntry {
    /// Build the entry for a terminal `terminal_width` columns wide
    #[must_use]
    pub fn from_commit(commit: &CommitData, terminal_width: u16) -> Self {
        let available = usize::from(terminal_width.saturating_sub(RESERVED_COLUMNS));
        Self {
            label: format!(" {}", commit.id.prefix(MENU_HASH_LEN)),
            description: format!(
                "{} - {}",
                commit.menu_date(),
                truncate_with_ellipsis(&commit.summary, available)
            ),
        }
    }

    fn to_line<'a>(&self, theme: &Theme) -> Line<'a> {
        let (date, summary) = self
            .description
            .split_once(" - ")
            .unwrap_or((self.description.as_str(), ""));
        Line::from(vec![
            Span::styled(self.label.clone(), theme.hash),
            Span::raw(LABEL_SPACING),
            Span::styled(date.to_string(), theme.date),
            Span::raw(" - "),
            Span::styled(summary.to_string(), theme.message),
        ])
    }
}

/// Render the commit menu inside a bordered panel
pub fn render_commit_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    entries: &[MenuEntry],
    state: &PickerState,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.menu_border);

    if entries.is_empty() {
        let para = Paragraph::new(Line::from(" No commits to show").style(theme.warning))
            .block(block);
        frame.render_widget(para, area);
        return;
    }

    let items: Vec<ListItem<'_>> = entries
        .iter()
        .map(|entry| ListItem::new(entry.to_line(theme)))
        .collect();

    let list = List::new(items).block(block).highlight_style(theme.highlight);

    let mut list_state = ListState::default()
        .with_offset(state.scroll_offset)
        .with_selected(state.selected());

    frame.render_stateful_widget(list, area, &mut list_state);
}
