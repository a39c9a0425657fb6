use crate::types::record::{CommitRecord, ReflogEntry};

// Each record starts with a record separator so numstat lines attach to
// the commit they belong to; fields are split on the unit separator.
pub const RECORD_SEPARATOR: char = '\u{1e}';
pub const FIELD_SEPARATOR: char = '\u{1f}';

/// Pretty format for `git log --numstat`; see [`parse_commits`].
pub const COMMIT_FORMAT: &str = "%x1e%H%x1f%P%x1f%an%x1f%ae%x1f%ad%x1f%s%x1f%b%x1f";

/// Pretty format for `git reflog`; see [`parse_reflog`].
pub const REFLOG_FORMAT: &str = "%x1e%H%x1f%gd%x1f%gs%x1f%ad";

pub fn parse_commits(output: &str) -> Vec<CommitRecord> {
    output
        .split(RECORD_SEPARATOR)
        .filter(|chunk| !chunk.trim().is_empty())
        .filter_map(parse_commit_chunk)
        .collect()
}

/// One chunk is the eight US-separated header fields followed by the
/// commit's numstat block. The body field may span lines; the trailing
/// separator after it keeps the split unambiguous.
fn parse_commit_chunk(chunk: &str) -> Option<CommitRecord> {
    let mut fields = chunk.splitn(8, FIELD_SEPARATOR);
    let id = fields.next()?.trim().to_string();
    if id.is_empty() {
        return None;
    }
    let parent_ids = fields
        .next()
        .unwrap_or("")
        .split_whitespace()
        .map(|parent| parent.to_string())
        .collect();
    let author_name = fields.next().unwrap_or("").to_string();
    let author_email = fields.next().unwrap_or("").to_string();
    let timestamp = fields.next().unwrap_or("").to_string();
    let subject = fields.next().unwrap_or("").to_string();
    let body = fields.next().unwrap_or("").trim().to_string();
    let numstat = fields.next().unwrap_or("");

    let mut file_count = 0;
    let mut additions = 0u64;
    let mut deletions = 0u64;
    for line in numstat.lines() {
        let mut columns = line.split('\t');
        let (Some(added), Some(deleted), Some(_path)) =
            (columns.next(), columns.next(), columns.next())
        else {
            continue;
        };
        file_count += 1;
        additions += parse_change_count(added);
        deletions += parse_change_count(deleted);
    }

    Some(CommitRecord {
        id,
        parent_ids,
        author_name,
        author_email,
        timestamp,
        subject,
        body,
        file_count,
        additions,
        deletions,
    })
}

/// Binary files show `-` instead of a count; coerce that (and anything
/// else non-numeric) to zero rather than failing the run.
fn parse_change_count(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

pub fn parse_reflog(output: &str) -> Vec<ReflogEntry> {
    output
        .split(RECORD_SEPARATOR)
        .filter(|chunk| !chunk.trim().is_empty())
        .filter_map(|chunk| {
            let mut fields = chunk.splitn(4, FIELD_SEPARATOR);
            let id = fields.next()?.trim().to_string();
            if id.is_empty() {
                return None;
            }
            Some(ReflogEntry {
                id,
                selector: fields.next().unwrap_or("").to_string(),
                message: fields.next().unwrap_or("").to_string(),
                timestamp: fields.next().unwrap_or("").trim_end().to_string(),
            })
        })
        .collect()
}
