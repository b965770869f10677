use colored::Colorize;

/// A change in the working directory that is not staged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileChange {
    Modified,
    Deleted,
}

impl From<&FileChange> for &str {
    fn from(change: &FileChange) -> Self {
        match change {
            FileChange::Modified => "modified",
            FileChange::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, " ({})", label.red())
    }
}
