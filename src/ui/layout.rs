use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum terminal dimensions for usable display
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 18;

/// Height of the bordered panel holding the menu or the form
pub const PANEL_HEIGHT: u16 = 12;

/// Size of the result dialog
pub const DIALOG_WIDTH: u16 = 40;
pub const DIALOG_HEIGHT: u16 = 10;
/// Row of the result dialog's top border
pub const DIALOG_ROW: u16 = 4;

/// Layout areas shared by the picker and the editor screens
#[derive(Debug, Clone)]
pub struct ScreenLayout {
    pub title: Rect,
    pub panel: Rect,
    pub hint: Rect,
}

impl ScreenLayout {
    /// Check if terminal is too small
    #[must_use]
    pub fn is_too_small(area: Rect) -> bool {
        area.width < MIN_WIDTH || area.height < MIN_HEIGHT
    }

    /// Title on row 1, panel on rows 3-14, key hint on row 16
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // Top margin
                Constraint::Length(1),            // Title
                Constraint::Length(1),            // Gap
                Constraint::Length(PANEL_HEIGHT), // Menu or form
                Constraint::Length(1),            // Gap
                Constraint::Length(1),            // Hint
                Constraint::Min(0),
            ])
            .split(area);

        let hint = chunks[5];
        Self {
            title: chunks[1],
            panel: chunks[3],
            // Hint text starts one column in
            hint: Rect::new(
                hint.x.saturating_add(1),
                hint.y,
                hint.width.saturating_sub(1),
                hint.height,
            ),
        }
    }
}

/// Layout for the result dialog
#[derive(Debug, Clone)]
pub struct DialogLayout {
    pub outer: Rect,
    pub content: Rect,
}

impl DialogLayout {
    /// A fixed-size dialog at `DIALOG_ROW`, centred horizontally
    #[must_use]
    pub fn result(area: Rect) -> Self {
        let width = DIALOG_WIDTH.min(area.width);
        let height = DIALOG_HEIGHT.min(area.height.saturating_sub(DIALOG_ROW));
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + DIALOG_ROW.min(area.height);

        let outer = Rect::new(x, y, width, height);
        let content = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(0)])
            .split(outer)[0];

        Self { outer, content }
    }
}
