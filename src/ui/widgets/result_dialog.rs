use crate::ui::layout::DialogLayout;
use crate::ui::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Headline of the result dialog for a change description
///
/// An empty description means nothing changed.
#[must_use]
pub fn result_headline(description: &str) -> String {
    if description.is_empty() {
        "No Changes. Exiting.".to_string()
    } else {
        format!("Changed: {description}.")
    }
}

/// Render the result dialog: headline, quit prompt and any notes
pub fn render_result_dialog(
    frame: &mut Frame<'_>,
    area: Rect,
    description: &str,
    notes: &[String],
    theme: &Theme,
) {
    let layout = DialogLayout::result(area);

    // Clear background
    frame.render_widget(Clear, layout.outer);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.dialog_border)
        .style(Style::default().bg(theme.dialog_bg));
    frame.render_widget(block, layout.outer);

    let headline_style = if description.is_empty() {
        theme.info
    } else {
        theme.success
    };

    let mut lines = vec![
        Line::from(result_headline(description))
            .style(headline_style)
            .alignment(Alignment::Center),
        Line::from("Press any key to quit.").alignment(Alignment::Center),
    ];
    lines.extend(
        notes
            .iter()
            .map(|note| Line::from(note.as_str()).style(theme.warning)),
    );

    let content = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(content, layout.content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_result_headline() {
        assert_eq!(result_headline(""), "No Changes. Exiting.");
        assert_eq!(result_headline("Author"), "Changed: Author.");
        assert_eq!(
            result_headline("Author and Committer"),
            "Changed: Author and Committer."
        );
    }
}
