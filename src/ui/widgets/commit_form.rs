#![allow(clippy::cast_possible_truncation)]

use crate::git::commit::EditableField;
use crate::state::{FormField, FormState, FIELD_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::widgets::truncate_with_ellipsis;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Column of the labels inside the panel
const LABEL_COLUMN: u16 = 1;
/// Column of the inputs inside the panel
const INPUT_COLUMN: u16 = 19;
/// Row of the message line inside the panel
const MESSAGE_ROW: u16 = 7;
/// Columns of the terminal width not available to the message line
const MESSAGE_RESERVED: u16 = 4;

/// Render the six-field form and the message line inside a bordered panel
pub fn render_commit_form(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &FormState,
    summary: &str,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.form_border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for field in EditableField::all() {
        let y = inner.y + field.index() as u16;
        if y >= inner.bottom() {
            break;
        }

        let label = Paragraph::new(Span::styled(field.form_label(), theme.form_label));
        frame.render_widget(label, clip(inner, LABEL_COLUMN, y, INPUT_COLUMN - LABEL_COLUMN));

        let focused = form.focus == *field;
        let input = Line::from(build_input_with_cursor(form.field(*field), focused, theme));
        frame.render_widget(
            Paragraph::new(input),
            clip(inner, INPUT_COLUMN, y, FIELD_WIDTH as u16),
        );
    }

    let message_y = inner.y + MESSAGE_ROW;
    if message_y < inner.bottom() {
        let max_width = frame.area().width.saturating_sub(MESSAGE_RESERVED);
        let message = truncate_with_ellipsis(&format!("Message: {summary}"), usize::from(max_width));
        frame.render_widget(
            Paragraph::new(Span::styled(message, theme.message)),
            clip(inner, LABEL_COLUMN, message_y, inner.width),
        );
    }
}

/// A one-row rect at `column` of `inner`, cut to the inner width
fn clip(inner: Rect, column: u16, y: u16, width: u16) -> Rect {
    let x = inner.x.saturating_add(column).min(inner.right());
    Rect::new(x, y, width.min(inner.right() - x), 1)
}

/// Build an input with a visible cursor on the focused field
///
/// The input is padded to the field width so its underline shows the
/// editable extent.
fn build_input_with_cursor<'a>(field: &FormField, focused: bool, theme: &Theme) -> Vec<Span<'a>> {
    let style = theme.input_style(focused);
    let (visible, cursor_col) = field.window(FIELD_WIDTH);
    let mut spans = Vec::new();

    if !focused {
        spans.push(Span::styled(pad(visible, FIELD_WIDTH), style));
        return spans;
    }

    let before: String = visible.chars().take(cursor_col).collect();
    let at: Option<char> = visible.chars().nth(cursor_col);
    let after: String = visible.chars().skip(cursor_col + 1).collect();

    if !before.is_empty() {
        spans.push(Span::styled(before, style));
    }

    // Cursor character (or space if at end)
    spans.push(Span::styled(
        at.map_or_else(|| " ".to_string(), |c| c.to_string()),
        theme.form_cursor,
    ));

    let used = cursor_col + 1 + after.chars().count();
    spans.push(Span::styled(after, style));
    spans.push(Span::styled(" ".repeat(FIELD_WIDTH.saturating_sub(used)), style));

    spans
}

fn pad(text: String, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text
    } else {
        text + &" ".repeat(width - len)
    }
}
