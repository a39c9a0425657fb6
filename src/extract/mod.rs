pub mod git_cli;
pub mod parse;

use crate::error::{AuditError, Result};
use crate::types::config::AuditConfig;
use crate::types::record::{CommitRecord, ReflogEntry};
use git_cli::run_git;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything the detectors look at for one analysis run: the full
/// commit set, the first-parent mainline set, and the reference log.
#[derive(Debug, Clone)]
pub struct HistoryModel {
    pub root: PathBuf,
    pub mainline_ref: String,
    pub range: String,
    pub commits: Vec<CommitRecord>,
    pub mainline_commits: Vec<CommitRecord>,
    pub reflog: Vec<ReflogEntry>,
}

/// Data-source collaborator over the local `git` binary.
pub struct GitSource {
    root: PathBuf,
}

impl GitSource {
    pub fn open(path: &Path) -> Result<Self> {
        let inside = run_git(path, &["rev-parse", "--is-inside-work-tree"])
            .map_err(|_| AuditError::NotGitRepo(path.display().to_string()))?;
        if inside.trim() != "true" {
            return Err(AuditError::NotGitRepo(path.display().to_string()));
        }
        let root = PathBuf::from(run_git(path, &["rev-parse", "--show-toplevel"])?);
        Ok(Self { root })
    }

    /// Mainline resolution: the remote-tracked default branch when one
    /// is known, else the current branch, else a bare HEAD symbol.
    pub fn mainline_ref(&self) -> String {
        for args in [
            ["symbolic-ref", "-q", "--short", "refs/remotes/origin/HEAD"],
            ["symbolic-ref", "-q", "--short", "HEAD"],
        ] {
            if let Ok(reference) = run_git(&self.root, &args) {
                if !reference.is_empty() {
                    return reference;
                }
            }
        }
        "HEAD".to_string()
    }

    pub fn commits(
        &self,
        range: &str,
        max_commits: usize,
        first_parent: bool,
    ) -> Result<Vec<CommitRecord>> {
        let format = format!("--pretty=format:{}", parse::COMMIT_FORMAT);
        let max_count = format!("--max-count={max_commits}");
        let mut args = vec!["log", "--date=iso-strict", format.as_str(), "--numstat"];
        if first_parent {
            args.insert(1, "--first-parent");
        }
        args.push(max_count.as_str());
        args.push(range);
        let output = run_git(&self.root, &args)?;
        Ok(parse::parse_commits(&output))
    }

    pub fn reflog(&self, limit: usize) -> Result<Vec<ReflogEntry>> {
        let format = format!("--pretty=format:{}", parse::REFLOG_FORMAT);
        let count = limit.to_string();
        let args = [
            "reflog",
            "--date=iso-strict",
            format.as_str(),
            "-n",
            count.as_str(),
        ];
        let output = run_git(&self.root, &args)?;
        Ok(parse::parse_reflog(&output))
    }

    /// Extracts the full record set for one run. The range defaults to
    /// the resolved mainline reference.
    pub fn discover(&self, range: Option<&str>, config: &AuditConfig) -> Result<HistoryModel> {
        let mainline_ref = self.mainline_ref();
        let range = range.unwrap_or(&mainline_ref).to_string();

        let commits = self.commits(&range, config.limits.max_commits, false)?;
        let mainline_commits = self.commits(&range, config.limits.max_commits, true)?;
        let reflog = self.reflog(config.limits.reflog_limit)?;
        debug!(
            commits = commits.len(),
            mainline = mainline_commits.len(),
            reflog = reflog.len(),
            %range,
            "extracted history"
        );

        Ok(HistoryModel {
            root: self.root.clone(),
            mainline_ref,
            range,
            commits,
            mainline_commits,
            reflog,
        })
    }
}
