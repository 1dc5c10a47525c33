use crate::error::Result;
use crate::ui::layout::{ScreenLayout, MIN_HEIGHT, MIN_WIDTH};
use crate::ui::theme::Theme;
use ratatui::backend::Backend;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

/// Rendering context handed to every screen
///
/// Owns the terminal and the color theme. The picker, editor and result
/// dialog draw through it one after another.
pub struct Screen<B: Backend> {
    terminal: Terminal<B>,
    theme: Theme,
}

impl<B: Backend> Screen<B> {
    /// Wrap a backend in a terminal using the default theme
    pub fn new(backend: B) -> Result<Self> {
        Ok(Self::from_terminal(Terminal::new(backend)?))
    }

    #[must_use]
    pub fn from_terminal(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    #[must_use]
    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }

    /// Draw a full frame
    ///
    /// The closure receives the frame and the theme. When the terminal is
    /// below the minimum size a resize message is drawn instead.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame<'_>, &Theme),
    {
        let theme = &self.theme;
        self.terminal.draw(|frame| {
            let area = frame.area();
            if ScreenLayout::is_too_small(area) {
                render_too_small(frame, area, theme);
            } else {
                render(frame, theme);
            }
        })?;
        Ok(())
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let msg = format!(
        "Terminal too small\n\nMinimum size: {MIN_WIDTH}x{MIN_HEIGHT}\nCurrent size: {}x{}\n\nPlease resize your terminal",
        area.width, area.height
    );
    let para = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(theme.warning);
    frame.render_widget(para, area);
}
