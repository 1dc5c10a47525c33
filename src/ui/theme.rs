use ratatui::style::{Color, Modifier, Style};

/// Color theme for the application using terminal colors
/// These colors adapt to the user's terminal theme (dark or light)
///
/// ## Visual Hierarchy (priority order):
/// 1. **Highlighted entry / text cursor**: REVERSED - always clearly visible
/// 2. **Focused input**: bold underline in the accent color
/// 3. **Base field colors**: Semantic colors (hash=magenta, date=blue, etc.)
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel borders: the menu and the form use different accents
    pub menu_border: Style,
    pub form_border: Style,

    // Menu entries
    pub hash: Style,
    pub date: Style,
    pub message: Style,
    pub highlight: Style,

    // Form
    pub form_label: Style,
    pub form_input: Style,
    pub form_input_focused: Style,
    pub form_cursor: Style,

    // UI elements
    pub title: Style,
    pub keybinding: Style,

    // Feedback
    pub warning: Style,
    pub success: Style,
    pub info: Style,

    // Dialog
    pub dialog_bg: Color,
    pub dialog_border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        // Use terminal's native colors - these adapt to dark/light terminal themes
        // Color::Reset inherits the terminal's default foreground/background

        Self {
            menu_border: Style::default().fg(Color::Cyan),
            form_border: Style::default().fg(Color::Green),

            // Fields - using distinct ANSI colors
            hash: Style::default().fg(Color::Magenta),
            date: Style::default().fg(Color::Blue),
            message: Style::default(), // Inherit terminal default
            highlight: Style::default().add_modifier(Modifier::REVERSED),

            form_label: Style::default(),
            form_input: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED),
            form_input_focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
            form_cursor: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::REVERSED | Modifier::BOLD),

            // UI
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            keybinding: Style::default().fg(Color::DarkGray),

            // Feedback
            warning: Style::default().fg(Color::Yellow),
            success: Style::default().fg(Color::Green),
            info: Style::default().fg(Color::Cyan),

            dialog_bg: Color::Reset,
            dialog_border: Style::default().fg(Color::Cyan),
        }
    }
}

impl Theme {
    /// Style for an input depending on whether it has focus
    #[must_use]
    pub fn input_style(&self, focused: bool) -> Style {
        if focused {
            self.form_input_focused
        } else {
            self.form_input
        }
    }
}
