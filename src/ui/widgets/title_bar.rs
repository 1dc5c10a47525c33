use crate::ui::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render a centred screen title
pub fn render_title_bar(frame: &mut Frame<'_>, area: Rect, title: &str, theme: &Theme) {
    let para = Paragraph::new(Line::from(Span::styled(title.to_string(), theme.title)))
        .alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Render the key hint below the panel
pub fn render_hint(frame: &mut Frame<'_>, area: Rect, hint: &str, theme: &Theme) {
    frame.render_widget(Paragraph::new(Span::styled(hint.to_string(), theme.keybinding)), area);
}
