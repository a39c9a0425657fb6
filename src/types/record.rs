/// One commit reachable in the analyzed range, normalized from `git log`.
///
/// `file_count` is the number of distinct file paths touched;
/// `additions`/`deletions` are sums over those paths, with binary-file
/// change markers already coerced to zero by the ingestion layer.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub id: String,
    /// Ordered parent ids: 0 for a root commit, 1 for an ordinary
    /// commit, 2 or more for a merge.
    pub parent_ids: Vec<String>,
    pub author_name: String,
    #[allow(dead_code)]
    pub author_email: String,
    /// ISO-8601 with explicit offset, as emitted by `--date=iso-strict`.
    pub timestamp: String,
    pub subject: String,
    pub body: String,
    pub file_count: usize,
    pub additions: u64,
    pub deletions: u64,
}

impl CommitRecord {
    pub fn is_merge(&self) -> bool {
        self.parent_ids.len() >= 2
    }

    /// Subject and body concatenated and lower-cased. This is the only
    /// text the detectors inspect.
    pub fn search_text(&self) -> String {
        format!("{}\n{}", self.subject, self.body)
            .trim()
            .to_lowercase()
    }

    pub fn line_changes(&self) -> u64 {
        self.additions + self.deletions
    }
}

/// One reference-log line: where a reference pointed after an operation,
/// independent of commit history.
#[derive(Debug, Clone)]
pub struct ReflogEntry {
    pub id: String,
    /// Reference+index label, e.g. `HEAD@{3}`.
    pub selector: String,
    /// Operation description, e.g. `rebase (finish): ...`.
    pub message: String,
    pub timestamp: String,
}
