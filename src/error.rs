use thiserror::Error;

/// All possible errors that can occur in glt
#[derive(Error, Debug)]
pub enum GltError {
    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid date format: {0}. Expected: YYYY-MM-DD HH:MM:SS [+/-]HHMM ZONE")]
    InvalidDate(String),

    #[error("No commits found in repository")]
    NoCommits,

    #[error("Cannot rewrite history: {0}")]
    RewriteFailed(String),

    #[error("Rebase in progress - complete or abort first")]
    RebaseInProgress,

    #[error("Merge in progress - complete or abort first")]
    MergeInProgress,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Commit not found: {0}")]
    CommitNotFound(String),

    #[error("Input closed before a key was read")]
    InputClosed,

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, GltError>;
