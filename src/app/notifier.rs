use crate::error::Result;
use crate::input::KeySource;
use crate::ui::widgets::render_result_dialog;
use crate::ui::Screen;
use ratatui::backend::Backend;

/// Report the outcome of an edit and wait for any key
///
/// `description` names the identities that changed; an empty description
/// reports that nothing changed. `notes` are printed below the prompt.
pub fn show_result<B, K>(
    screen: &mut Screen<B>,
    keys: &mut K,
    description: &str,
    notes: &[String],
) -> Result<()>
where
    B: Backend,
    K: KeySource + ?Sized,
{
    screen.draw(|frame, theme| {
        let area = frame.area();
        render_result_dialog(frame, area, description, notes, theme);
    })?;

    keys.next_key()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GltError;
    use crate::input::ScriptedKeys;
    use crate::ui::screen::tests::{row_text, screen_contains};
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    fn screen() -> Screen<TestBackend> {
        Screen::new(TestBackend::new(80, 24)).unwrap()
    }

    #[test]
    fn test_no_changes() {
        let mut screen = screen();
        let mut keys = ScriptedKeys::from_codes([KeyCode::Char('q')]);
        show_result(&mut screen, &mut keys, "", &[]).unwrap();

        assert!(row_text(&screen, 5).contains("No Changes. Exiting."));
        assert!(row_text(&screen, 6).contains("Press any key to quit."));
        assert_eq!(keys.remaining(), 0);
    }

    #[test]
    fn test_changed_description() {
        let mut screen = screen();
        let mut keys = ScriptedKeys::from_codes([KeyCode::Enter]);
        show_result(&mut screen, &mut keys, "Author and Committer", &[]).unwrap();

        assert!(row_text(&screen, 5).contains("Changed: Author and Committer."));
    }

    #[test]
    fn test_dialog_position() {
        let mut screen = screen();
        let mut keys = ScriptedKeys::from_codes([KeyCode::Esc]);
        show_result(&mut screen, &mut keys, "Author", &[]).unwrap();

        let top: String = row_text(&screen, 4).chars().skip(20).take(40).collect();
        assert!(top.starts_with('┌'));
        assert!(top.ends_with('┐'));
        assert_eq!(row_text(&screen, 13).chars().nth(20), Some('└'));
        assert!(!screen_contains(&screen, "Welcome to GLT!"));
    }

    #[test]
    fn test_notes_listed() {
        let mut screen = screen();
        let mut keys = ScriptedKeys::from_codes([KeyCode::Esc]);
        let notes = vec!["Author Date was reset.".to_string()];
        show_result(&mut screen, &mut keys, "Author", &notes).unwrap();

        assert!(row_text(&screen, 7).contains("Author Date was reset."));
    }

    #[test]
    fn test_waits_for_a_key() {
        let mut screen = screen();
        let mut keys = ScriptedKeys::default();
        let result = show_result(&mut screen, &mut keys, "Author", &[]);

        assert!(matches!(result, Err(GltError::InputClosed)));
    }
}
