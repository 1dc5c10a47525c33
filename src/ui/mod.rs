pub mod layout;
pub mod screen;
pub mod theme;
pub mod widgets;

pub use screen::Screen;
pub use theme::Theme;
