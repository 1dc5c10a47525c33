//! Interactive session: pick a commit, edit it, persist it, report.

mod editor;
mod notifier;
mod picker;

pub use editor::{edit_commit, EditOutcome};
pub use notifier::show_result;
pub use picker::pick_commit;

use crate::error::{GltError, Result};
use crate::git::{describe_changes, rewrite_history, CommitData, CommitId, Repository};
use crate::input::KeySource;
use crate::ui::Screen;
use ratatui::backend::Backend;
use tracing::{info, warn};

/// What a finished session changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// "Author", "Committer", "Author and Committer" or empty
    pub description: String,
    /// New id of the edited commit when history was rewritten
    pub rewritten: Option<CommitId>,
}

/// Run the picker, the editor and the result dialog over `commits`
///
/// Returns `None` when the user backs out of the picker or the editor. A
/// changed commit is written back to the repository unless `dry_run` is set.
pub fn run_session<B, K>(
    screen: &mut Screen<B>,
    keys: &mut K,
    repo: &Repository,
    commits: &[CommitData],
    dry_run: bool,
) -> Result<Option<SessionOutcome>>
where
    B: Backend,
    K: KeySource + ?Sized,
{
    let Some(original) = pick_commit(screen, keys, commits)? else {
        return Ok(None);
    };

    let mut edited = original.clone();
    let invalid_dates = match edit_commit(screen, keys, &mut edited)? {
        EditOutcome::Saved { invalid_dates } => invalid_dates,
        EditOutcome::Cancelled => return Ok(None),
    };

    let description = describe_changes(original, &edited);
    let mut notes: Vec<String> = invalid_dates
        .iter()
        .map(|field| format!("{} was reset.", field.display_name()))
        .collect();

    let mut rewritten = None;
    if description.is_empty() {
        info!(commit = %original.id, "nothing changed");
    } else if dry_run {
        info!(commit = %original.id, changed = %description, "dry run, history left alone");
        notes.push("Dry run: history not rewritten.".to_string());
    } else {
        let (new_id, persist_notes) = apply_edit(repo, commits, &edited)?;
        rewritten = Some(new_id);
        notes.extend(persist_notes);
    }

    show_result(screen, keys, &description, &notes)?;

    Ok(Some(SessionOutcome {
        description,
        rewritten,
    }))
}

/// Rewrite history with the edited commit, then back up the old branch tip
///
/// Returns the new id of the edited commit and notes for the result dialog.
fn apply_edit(
    repo: &Repository,
    commits: &[CommitData],
    edited: &CommitData,
) -> Result<(CommitId, Vec<String>)> {
    let mut notes = Vec::new();

    let branch_name = repo.current_branch_name()?;
    let old_tip = commits
        .first()
        .map(|c| c.id)
        .ok_or(GltError::NoCommits)?;

    let new_id = rewrite_history(repo.inner(), commits, edited)?;

    if branch_name == "HEAD" {
        warn!("HEAD is detached, no backup ref written");
    } else {
        match repo.create_backup_ref(&branch_name, old_tip) {
            Ok(backup) => notes.push(format!("Backup: {backup}")),
            Err(e) => {
                warn!(error = %e, old_tip = %old_tip, "could not write backup ref");
                notes.push(format!("No backup ref, old tip was {}.", old_tip.hex()));
            }
        }
    }

    match repo.has_upstream() {
        Ok(true) => notes.push("Branch has upstream - force push needed.".to_string()),
        Ok(false) => {}
        Err(e) => warn!(error = %e, "could not check for an upstream branch"),
    }

    Ok((new_id, notes))
}
