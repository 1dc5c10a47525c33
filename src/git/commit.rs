use chrono::{DateTime, FixedOffset, Offset, Utc};
use git2::Oid;
use std::fmt;

/// Number of hex characters shown for a commit in the picker menu
pub const MENU_HASH_LEN: usize = 16;

/// Unique identifier for a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommitId(pub Oid);

impl CommitId {
    /// Full hex representation of the id
    #[must_use]
    pub fn hex(&self) -> String {
        self.0.to_string()
    }

    /// First `len` hex characters of the id
    #[must_use]
    pub fn prefix(&self, len: usize) -> String {
        self.hex().chars().take(len).collect()
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix(7))
    }
}

/// Represents a person (author or committer) together with the time they
/// signed the commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub when: DateTime<FixedOffset>,
}

impl Person {
    pub fn new(name: impl Into<String>, email: impl Into<String>, when: DateTime<FixedOffset>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            when,
        }
    }

    /// Format as "Name <email>"
    #[must_use]
    pub fn format_full(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    fn from_signature(sig: &git2::Signature<'_>) -> Self {
        Self::new(
            sig.name().unwrap_or("Unknown"),
            sig.email().unwrap_or("unknown@example.com"),
            git_time_to_datetime(&sig.when()),
        )
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A commit with all its metadata
///
/// Only `author` and `committer` are ever edited; the id, message and the
/// relationships describe the commit as it was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitData {
    /// Original commit ID
    pub id: CommitId,

    pub author: Person,
    pub committer: Person,

    // Commit message
    pub message: String,
    /// First line of message for menu display
    pub summary: String,

    // Relationships (not editable)
    pub parent_ids: Vec<CommitId>,
    pub tree_id: Oid,
}

impl CommitData {
    /// Create `CommitData` from a `git2::Commit`
    pub fn from_git2_commit(commit: &git2::Commit<'_>) -> Self {
        let message = commit.message().unwrap_or("").to_string();
        let summary = first_line(&message).to_string();

        let parent_ids: Vec<CommitId> = commit.parent_ids().map(CommitId).collect();

        Self {
            id: CommitId(commit.id()),
            author: Person::from_signature(&commit.author()),
            committer: Person::from_signature(&commit.committer()),
            message,
            summary,
            parent_ids,
            tree_id: commit.tree_id(),
        }
    }

    /// Committer date as shown in the picker ("MM-DD HH:MM:SS")
    #[must_use]
    pub fn menu_date(&self) -> String {
        self.committer.when.format("%m-%d %H:%M:%S").to_string()
    }
}

/// First line of a commit message
#[must_use]
pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

/// Convert `git2::Time` to `chrono::DateTime<FixedOffset>`
pub(crate) fn git_time_to_datetime(time: &git2::Time) -> DateTime<FixedOffset> {
    let utc = Utc.fix();
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or(utc);
    DateTime::from_timestamp(time.seconds(), 0)
        .unwrap_or_default()
        .with_timezone(&offset)
}

/// Describe which identities differ between two versions of a commit
///
/// Returns "Author", "Committer", "Author and Committer", or an empty
/// string when nothing changed.
#[must_use]
pub fn describe_changes(before: &CommitData, after: &CommitData) -> String {
    let author = before.author != after.author;
    let committer = before.committer != after.committer;

    match (author, committer) {
        (true, true) => "Author and Committer".to_string(),
        (true, false) => "Author".to_string(),
        (false, true) => "Committer".to_string(),
        (false, false) => String::new(),
    }
}

/// Fields that can be edited on a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    AuthorName,
    AuthorEmail,
    AuthorDate,
    CommitterName,
    CommitterEmail,
    CommitterDate,
}

impl EditableField {
    /// Get all editable fields in form order
    #[must_use]
    pub fn all() -> &'static [EditableField] {
        &[
            EditableField::AuthorName,
            EditableField::AuthorEmail,
            EditableField::AuthorDate,
            EditableField::CommitterName,
            EditableField::CommitterEmail,
            EditableField::CommitterDate,
        ]
    }

    /// Position of the field in the form
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            EditableField::AuthorName => 0,
            EditableField::AuthorEmail => 1,
            EditableField::AuthorDate => 2,
            EditableField::CommitterName => 3,
            EditableField::CommitterEmail => 4,
            EditableField::CommitterDate => 5,
        }
    }

    /// Get display name for the field
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            EditableField::AuthorName => "Author Name",
            EditableField::AuthorEmail => "Author Email",
            EditableField::AuthorDate => "Author Date",
            EditableField::CommitterName => "Committer Name",
            EditableField::CommitterEmail => "Committer Email",
            EditableField::CommitterDate => "Committer Date",
        }
    }

    /// Label printed in front of the input, padded so the colons line up
    #[must_use]
    pub fn form_label(&self) -> String {
        format!("{:<15}:", self.display_name())
    }

    /// Get next field (for Tab/Down navigation)
    #[must_use]
    pub fn next(&self) -> EditableField {
        match self {
            EditableField::AuthorName => EditableField::AuthorEmail,
            EditableField::AuthorEmail => EditableField::AuthorDate,
            EditableField::AuthorDate => EditableField::CommitterName,
            EditableField::CommitterName => EditableField::CommitterEmail,
            EditableField::CommitterEmail => EditableField::CommitterDate,
            EditableField::CommitterDate => EditableField::AuthorName,
        }
    }

    /// Get previous field (for Shift+Tab/Up navigation)
    #[must_use]
    pub fn prev(&self) -> EditableField {
        match self {
            EditableField::AuthorName => EditableField::CommitterDate,
            EditableField::AuthorEmail => EditableField::AuthorName,
            EditableField::AuthorDate => EditableField::AuthorEmail,
            EditableField::CommitterName => EditableField::AuthorDate,
            EditableField::CommitterEmail => EditableField::CommitterName,
            EditableField::CommitterDate => EditableField::CommitterEmail,
        }
    }
}
