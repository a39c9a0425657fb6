use crate::error::{AuditError, Result};
use std::path::Path;
use std::process::Command;

/// Runs one git subcommand and returns trimmed stdout. A non-zero exit
/// surfaces git's own stderr message when there is one.
pub fn run_git(root: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(args)
        .output()
        .map_err(|e| AuditError::Git(format!("git {}: {}", args.join(" "), e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.trim();
        let message = if detail.is_empty() {
            format!("git {} exited with {}", args.join(" "), output.status)
        } else {
            detail.to_string()
        };
        return Err(AuditError::Git(message));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}
