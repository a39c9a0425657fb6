use crate::types::report::{AiStatus, AuditReport};

pub fn to_markdown(report: &AuditReport) -> String {
    let mut output = String::new();
    output.push_str("# Git Integrity Report\n\n");
    output.push_str(&format!("**Repository:** {}\n", report.metadata.repo_path));
    output.push_str(&format!(
        "**Mainline reference:** {}\n",
        report.metadata.mainline_ref
    ));
    output.push_str(&format!("**Analyzed range:** {}\n", report.metadata.range));
    output.push_str(&format!(
        "**Commits analyzed:** {}\n",
        report.metadata.commit_count
    ));
    output.push_str(&format!(
        "**Overall risk:** {} (score {})\n\n",
        report.scoring.level, report.scoring.total
    ));

    output.push_str("## Detected Events\n\n");
    if report.events.is_empty() {
        output.push_str("No risk events detected.\n");
    } else {
        for event in &report.events {
            let mut line = format!("- **{}** ({})", event.kind, event.severity.as_str());
            if let Some(subject) = &event.message {
                line.push(' ');
                line.push_str(subject);
            }
            output.push_str(&line);
            output.push('\n');
            if let Some(commit) = &event.commit {
                output.push_str(&format!("  - Commit: `{commit}`\n"));
            }
            if let Some(commits) = &event.commits {
                output.push_str(&format!("  - Commits: {}\n", commits.join(", ")));
            }
            if let Some(author) = &event.author {
                output.push_str(&format!("  - Author: {author}\n"));
            }
            if let Some(date) = &event.date {
                output.push_str(&format!("  - Date: {date}\n"));
            }
            let evidence = serde_json::to_string(&event.details).unwrap_or_default();
            output.push_str(&format!("  - Details: `{evidence}`\n"));
        }
    }

    output.push_str("\n## Scoring\n\n```json\n");
    output.push_str(&serde_json::to_string_pretty(&report.scoring).unwrap_or_default());
    output.push_str("\n```\n");

    output.push_str("\n## Narrative\n\n");
    match report.ai.status {
        AiStatus::Ok => {
            output.push_str(report.ai.response.as_deref().unwrap_or(""));
            output.push('\n');
        }
        AiStatus::Skipped => {
            output.push_str(
                "Narrative skipped. Provide credentials and pass `--ai` to enable it.\n",
            );
        }
        AiStatus::Error => {
            output.push_str(&format!(
                "Narrative unavailable: {}\n",
                report.ai.error.as_deref().unwrap_or("unknown error")
            ));
        }
    }

    output
}
