use crate::error::{GltError, Result};
use crate::git::commit::{CommitData, CommitId, Person};
use git2::{Repository as Git2Repository, Signature, Time};
use std::collections::HashMap;
use tracing::{debug, info};

/// Persist an edited commit by rewriting it and every newer loaded commit
///
/// Commits are recreated from oldest to newest so each one can point at the
/// rewritten id of its parent. Trees, messages and the signatures of the
/// other commits are reused untouched; only the edited commit receives new
/// signatures. A message that is not UTF-8 fails the rewrite before any
/// commit is written.
///
/// # Arguments
/// * `repo` - The git repository
/// * `commits` - Loaded commits in display order (newest first, HEAD at 0)
/// * `edited` - The edited version of one of `commits`
///
/// # Returns
/// The new id of the edited commit. HEAD (the branch it points to, or HEAD
/// itself when detached) is moved to the rewritten tip.
pub fn rewrite_history(
    repo: &Git2Repository,
    commits: &[CommitData],
    edited: &CommitData,
) -> Result<CommitId> {
    let position = commits
        .iter()
        .position(|c| c.id == edited.id)
        .ok_or_else(|| GltError::CommitNotFound(edited.id.hex()))?;

    // Nothing is written unless every message carries over unchanged
    let sources: Vec<git2::Commit<'_>> = commits[..=position]
        .iter()
        .rev()
        .map(|c| repo.find_commit(c.id.0))
        .collect::<std::result::Result<_, _>>()?;
    for source in &sources {
        preserved_message(source)?;
    }

    // Map from old commit OID to new commit OID
    let mut commit_map: HashMap<git2::Oid, git2::Oid> = HashMap::new();

    // Only the edited commit and the ones above it change
    for (original, source) in commits[..=position].iter().rev().zip(&sources) {
        let parent_oids: Vec<git2::Oid> = original
            .parent_ids
            .iter()
            .map(|p| *commit_map.get(&p.0).unwrap_or(&p.0))
            .collect();

        let parents: Vec<git2::Commit<'_>> = parent_oids
            .iter()
            .map(|oid| repo.find_commit(*oid))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

        let tree = repo.find_tree(original.tree_id)?;
        let message = preserved_message(source)?;

        let new_oid = if original.id == edited.id {
            let author = build_signature(&edited.author)?;
            let committer = build_signature(&edited.committer)?;
            repo.commit(None, &author, &committer, message, &tree, &parent_refs)?
        } else {
            // Raw signatures keep non-UTF-8 names and a "-0000" offset
            repo.commit(
                None,
                &source.author(),
                &source.committer(),
                message,
                &tree,
                &parent_refs,
            )?
        };

        debug!(old = %original.id, new = %CommitId(new_oid), "rewrote commit");
        commit_map.insert(original.id.0, new_oid);
    }

    let newest = &commits[0];
    let new_head = *commit_map
        .get(&newest.id.0)
        .ok_or_else(|| GltError::RewriteFailed("Failed to find new HEAD commit".to_string()))?;

    move_head(repo, newest.id, new_head)?;

    let new_id = commit_map
        .get(&edited.id.0)
        .copied()
        .map(CommitId)
        .ok_or_else(|| GltError::RewriteFailed("Edited commit was not rewritten".to_string()))?;

    info!(
        old = %edited.id,
        new = %new_id,
        rewritten = position + 1,
        "history rewritten"
    );
    Ok(new_id)
}

/// Point HEAD's branch (or a detached HEAD) at the rewritten tip
fn move_head(repo: &Git2Repository, expected_tip: CommitId, new_tip: git2::Oid) -> Result<()> {
    let head = repo.head()?;
    let current = head.peel_to_commit()?.id();
    if current != expected_tip.0 {
        return Err(GltError::RewriteFailed(format!(
            "HEAD moved to {} while editing",
            CommitId(current)
        )));
    }

    if head.is_branch() {
        let ref_name = head
            .name()
            .ok_or_else(|| GltError::RewriteFailed("Branch name is not UTF-8".to_string()))?
            .to_string();
        repo.reference(&ref_name, new_tip, true, "glt: rewrite commit metadata")?;
    } else {
        repo.set_head_detached(new_tip)?;
    }

    Ok(())
}

/// The commit message, if it can be written back byte for byte
fn preserved_message<'c>(commit: &'c git2::Commit<'_>) -> Result<&'c str> {
    let id = CommitId(commit.id());
    if let Some(encoding) = commit.message_encoding() {
        if !encoding.eq_ignore_ascii_case("UTF-8") {
            return Err(GltError::RewriteFailed(format!(
                "Commit {id} uses the {encoding} encoding"
            )));
        }
    }
    commit.message_raw().ok_or_else(|| {
        GltError::RewriteFailed(format!("Message of commit {id} is not valid UTF-8"))
    })
}

/// Build a git2 Signature from a person and their timestamp
fn build_signature(person: &Person) -> Result<Signature<'static>> {
    let offset_minutes = person.when.offset().local_minus_utc() / 60;
    let time = Time::new(person.when.timestamp(), offset_minutes);
    Signature::new(&person.name, &person.email, &time).map_err(GltError::Git)
}
