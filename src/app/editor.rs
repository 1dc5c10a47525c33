use crate::error::Result;
use crate::git::{CommitData, EditableField};
use crate::input::KeySource;
use crate::state::FormState;
use crate::ui::layout::ScreenLayout;
use crate::ui::widgets::{render_commit_form, render_hint, render_title_bar};
use crate::ui::Screen;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::backend::Backend;
use tracing::{debug, info};

const HINT: &str = "'enter' to save, 'esc' to exit";

/// How the editor was left
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The form was confirmed and written onto the commit
    Saved {
        /// Date fields that did not parse and were stored as the unset timestamp
        invalid_dates: Vec<EditableField>,
    },
    /// The form was dismissed; the commit is untouched
    Cancelled,
}

/// Edit the author and committer of `commit` in a six-field form
///
/// Enter writes the trimmed fields onto the commit, Escape leaves it as it
/// was.
pub fn edit_commit<B, K>(
    screen: &mut Screen<B>,
    keys: &mut K,
    commit: &mut CommitData,
) -> Result<EditOutcome>
where
    B: Backend,
    K: KeySource + ?Sized,
{
    let mut form = FormState::from_commit(commit);
    let title = format!("Edit Commit {}", commit.id.hex());

    loop {
        let summary = commit.summary.as_str();
        screen.draw(|frame, theme| {
            let layout = ScreenLayout::new(frame.area());
            render_title_bar(frame, layout.title, &title, theme);
            render_commit_form(frame, layout.panel, &form, summary, theme);
            render_hint(frame, layout.hint, HINT, theme);
        })?;

        let key = keys.next_key()?;
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                debug!(commit = %commit.id, "edit cancelled");
                return Ok(EditOutcome::Cancelled);
            }
            (KeyCode::Enter, _) => {
                let invalid_dates = form.write_to(commit);
                info!(
                    commit = %commit.id,
                    author = %commit.author.format_full(),
                    committer = %commit.committer.format_full(),
                    "edit saved"
                );
                return Ok(EditOutcome::Saved { invalid_dates });
            }

            // Field navigation
            (KeyCode::Down | KeyCode::Tab, _) => form.focus_next(),
            (KeyCode::Up | KeyCode::BackTab, _) => form.focus_prev(),

            // Cursor movement
            (KeyCode::Left, _) => form.focused_mut().move_left(),
            (KeyCode::Right, _) => form.focused_mut().move_right(),
            (KeyCode::Home, _) => form.focused_mut().move_home(),
            (KeyCode::End, _) => form.focused_mut().move_end(),

            // Text editing
            (KeyCode::Backspace, _) => form.focused_mut().backspace(),
            (KeyCode::Delete, _) => form.focused_mut().delete(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                form.focused_mut().insert(c);
            }

            _ => {}
        }
    }
}
