use crate::error::Result;
use crate::git::CommitData;
use crate::input::KeySource;
use crate::state::PickerState;
use crate::ui::layout::ScreenLayout;
use crate::ui::widgets::{render_commit_menu, render_hint, render_title_bar, MenuEntry};
use crate::ui::Screen;
use crossterm::event::KeyCode;
use ratatui::backend::Backend;
use tracing::debug;

const TITLE: &str = "Welcome to GLT!";
const HINT: &str = "'esc' to exit";

/// Let the user choose one of `commits`
///
/// Returns the highlighted commit on Enter, or `None` on Escape. An empty
/// list only accepts Escape.
pub fn pick_commit<'a, B, K>(
    screen: &mut Screen<B>,
    keys: &mut K,
    commits: &'a [CommitData],
) -> Result<Option<&'a CommitData>>
where
    B: Backend,
    K: KeySource + ?Sized,
{
    let mut state = PickerState::new(commits.len());

    loop {
        screen.draw(|frame, theme| {
            let area = frame.area();
            let layout = ScreenLayout::new(area);
            let entries: Vec<MenuEntry> = commits
                .iter()
                .map(|commit| MenuEntry::from_commit(commit, area.width))
                .collect();

            render_title_bar(frame, layout.title, TITLE, theme);
            render_commit_menu(frame, layout.panel, &entries, &state, theme);
            render_hint(frame, layout.hint, HINT, theme);
        })?;

        let key = keys.next_key()?;
        match key.code {
            KeyCode::Esc => {
                debug!("commit selection cancelled");
                return Ok(None);
            }
            KeyCode::Enter => {
                if let Some(commit) = state.selected().and_then(|i| commits.get(i)) {
                    debug!(commit = %commit.id, "commit selected");
                    return Ok(Some(commit));
                }
            }
            KeyCode::Down => state.cursor_down(),
            KeyCode::Up => state.cursor_up(),
            KeyCode::PageDown => state.page_down(),
            KeyCode::PageUp => state.page_up(),
            KeyCode::Home => state.cursor_top(),
            KeyCode::End => state.cursor_bottom(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GltError;
    use crate::git::commit::tests::sample_commit;
    use crate::input::ScriptedKeys;
    use crate::ui::screen::tests::{row_text, screen_contains};
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    fn commits(count: usize) -> Vec<CommitData> {
        (0..count)
            .map(|i| {
                let id = format!("{:040x}", i + 1);
                sample_commit(&id, &format!("Commit number {i}"))
            })
            .collect()
    }

    fn screen(width: u16) -> Screen<TestBackend> {
        Screen::new(TestBackend::new(width, 24)).unwrap()
    }

    fn pick(commits: &[CommitData], codes: Vec<KeyCode>) -> Option<usize> {
        let mut screen = screen(80);
        let mut keys = ScriptedKeys::from_codes(codes);
        pick_commit(&mut screen, &mut keys, commits)
            .unwrap()
            .map(|chosen| commits.iter().position(|c| c.id == chosen.id).unwrap())
    }

    #[test]
    fn test_enter_selects_first_commit() {
        assert_eq!(pick(&commits(3), vec![KeyCode::Enter]), Some(0));
    }

    #[test]
    fn test_escape_cancels() {
        assert_eq!(pick(&commits(3), vec![KeyCode::Esc]), None);
        assert_eq!(pick(&commits(1), vec![KeyCode::Esc]), None);
        assert_eq!(pick(&[], vec![KeyCode::Esc]), None);
    }

    #[test]
    fn test_down_then_enter() {
        assert_eq!(pick(&commits(3), vec![KeyCode::Down, KeyCode::Enter]), Some(1));
    }

    #[test]
    fn test_navigation_does_not_wrap() {
        assert_eq!(pick(&commits(3), vec![KeyCode::Up, KeyCode::Enter]), Some(0));

        let downs = vec![KeyCode::Down; 5]
            .into_iter()
            .chain([KeyCode::Enter])
            .collect();
        assert_eq!(pick(&commits(3), downs), Some(2));
    }

    #[test]
    fn test_paging_and_jumps() {
        let list = commits(25);
        assert_eq!(pick(&list, vec![KeyCode::PageDown, KeyCode::Enter]), Some(10));
        assert_eq!(pick(&list, vec![KeyCode::End, KeyCode::Enter]), Some(24));
        assert_eq!(
            pick(&list, vec![KeyCode::End, KeyCode::PageUp, KeyCode::Enter]),
            Some(14)
        );
        assert_eq!(
            pick(&list, vec![KeyCode::End, KeyCode::Home, KeyCode::Enter]),
            Some(0)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let codes = vec![KeyCode::Char('j'), KeyCode::Left, KeyCode::Tab, KeyCode::Enter];
        assert_eq!(pick(&commits(3), codes), Some(0));
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut screen = screen(80);
        let mut keys = ScriptedKeys::from_codes([KeyCode::Enter, KeyCode::Esc]);
        let result = pick_commit(&mut screen, &mut keys, &[]).unwrap();

        assert!(result.is_none());
        assert!(screen_contains(&screen, "No commits to show"));
    }

    #[test]
    fn test_input_exhausted_is_an_error() {
        let mut screen = screen(80);
        let mut keys = ScriptedKeys::from_codes([KeyCode::Down]);
        let list = commits(3);
        let result = pick_commit(&mut screen, &mut keys, &list);

        assert!(matches!(result, Err(GltError::InputClosed)));
    }

    #[test]
    fn test_renders_title_menu_and_hint() {
        let mut screen = screen(80);
        let mut keys = ScriptedKeys::from_codes([KeyCode::Esc]);
        let list = commits(3);
        pick_commit(&mut screen, &mut keys, &list).unwrap();

        assert_eq!(row_text(&screen, 1).trim(), "Welcome to GLT!");
        assert!(row_text(&screen, 4).contains(" 0000000000000000   01-15 14:30:00 - Commit number 0"));
        assert!(row_text(&screen, 6).contains("Commit number 2"));
        assert!(row_text(&screen, 16).starts_with(" 'esc' to exit"));
    }

    #[test]
    fn test_long_summary_truncated_to_width() {
        let mut list = commits(1);
        list[0].summary = "x".repeat(100);
        let mut screen = screen(60);
        let mut keys = ScriptedKeys::from_codes([KeyCode::Esc]);
        pick_commit(&mut screen, &mut keys, &list).unwrap();

        let row = row_text(&screen, 4);
        // 60 - 41 columns: 17 of content and the ellipsis
        assert!(row.contains(&format!(" - {}..", "x".repeat(17))));
        assert!(!row.contains(&"x".repeat(18)));
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        let mut screen = screen(80);
        let mut keys = ScriptedKeys::from_codes(vec![KeyCode::Down; 12]);
        let list = commits(20);
        let _ = pick_commit(&mut screen, &mut keys, &list);

        // The last frame was drawn with the cursor on entry 12
        assert!(!screen_contains(&screen, "Commit number 0 "));
        assert!(!screen_contains(&screen, "Commit number 2 "));
        assert!(row_text(&screen, 4).contains("Commit number 3 "));
        assert!(row_text(&screen, 13).contains("Commit number 12"));
    }
}
