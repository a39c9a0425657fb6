use crate::error::AuditError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Tunable analysis policy. Every table and field is optional in the
/// TOML file; omitted values fall back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub limits: Limits,
    pub thresholds: SizeThresholds,
    pub patterns: Patterns,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_commits: usize,
    pub reflog_limit: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_commits: 200,
            reflog_limit: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SizeThresholds {
    pub large_files: usize,
    pub large_lines: u64,
    pub huge_files: usize,
    pub huge_lines: u64,
}

impl Default for SizeThresholds {
    fn default() -> Self {
        Self {
            large_files: 20,
            large_lines: 500,
            huge_files: 50,
            huge_lines: 1500,
        }
    }
}

/// Keyword lists matched as substrings against lower-cased text, so
/// configure them in lower case.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Patterns {
    pub suspicious: Vec<String>,
    pub conflict: Vec<String>,
    pub rebase: Vec<String>,
    pub reset: Vec<String>,
    pub force_push: Vec<String>,
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            suspicious: to_strings(&["fix", "hotfix", "urgent", "temp", "wip", "hack"]),
            conflict: to_strings(&[
                "conflict",
                "conflicts",
                "resolve conflict",
                "resolved conflict",
            ]),
            rebase: to_strings(&["rebase"]),
            reset: to_strings(&["reset --hard", "reset: moving to"]),
            force_push: to_strings(&["forced-update", "force push", "push --force"]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    #[serde(default = "default_weights")]
    pub weights: BTreeMap<String, u32>,
    pub levels: LevelThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: default_weights(),
            levels: LevelThresholds::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelThresholds {
    pub medium: u32,
    pub high: u32,
    pub critical: u32,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            medium: 8,
            high: 20,
            critical: 35,
        }
    }
}

fn default_weights() -> BTreeMap<String, u32> {
    let mut weights = BTreeMap::new();
    weights.insert("direct_commit_mainline".to_string(), 3);
    weights.insert("merge_commit".to_string(), 2);
    weights.insert("merge_conflict".to_string(), 4);
    weights.insert("large_commit".to_string(), 3);
    weights.insert("huge_commit".to_string(), 4);
    weights.insert("suspicious_message".to_string(), 3);
    weights.insert("chained_revert".to_string(), 4);
    weights.insert("history_rewrite".to_string(), 4);
    weights
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl AuditConfig {
    /// Per-key fallback: an overridden table only replaces the keys it
    /// names, and types unknown to both tables score 1 so the
    /// aggregator never fails on an unrecognized type.
    pub fn weight_for(&self, kind: &str) -> u32 {
        if let Some(weight) = self.scoring.weights.get(kind) {
            return *weight;
        }
        default_weights().get(kind).copied().unwrap_or(1)
    }

    pub fn validate(&self) -> Result<(), AuditError> {
        if self.thresholds.large_files > self.thresholds.huge_files
            || self.thresholds.large_lines > self.thresholds.huge_lines
        {
            return Err(AuditError::ConfigParse(
                "size thresholds: large must not exceed huge".to_string(),
            ));
        }
        let levels = &self.scoring.levels;
        if levels.medium > levels.high || levels.high > levels.critical {
            return Err(AuditError::ConfigParse(format!(
                "scoring.levels must be ordered medium <= high <= critical (found {}/{}/{})",
                levels.medium, levels.high, levels.critical
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_policy() {
        let config = AuditConfig::default();
        assert_eq!(config.limits.max_commits, 200);
        assert_eq!(config.thresholds.large_files, 20);
        assert_eq!(config.thresholds.huge_lines, 1500);
        assert_eq!(config.scoring.levels.critical, 35);
        assert_eq!(config.weight_for("merge_conflict"), 4);
        assert!(config.patterns.suspicious.contains(&"wip".to_string()));
    }

    #[test]
    fn unknown_event_type_weights_one() {
        let config = AuditConfig::default();
        assert_eq!(config.weight_for("not_a_known_type"), 1);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config: AuditConfig = toml::from_str(
            r#"
[thresholds]
large_files = 10

[scoring.weights]
merge_commit = 9
"#,
        )
        .expect("config should parse");

        assert_eq!(config.thresholds.large_files, 10);
        assert_eq!(config.thresholds.large_lines, 500);
        assert_eq!(config.weight_for("merge_commit"), 9);
        assert_eq!(config.weight_for("merge_conflict"), 4);
        assert_eq!(config.scoring.levels.medium, 8);
    }

    #[test]
    fn validate_rejects_inverted_levels() {
        let mut config = AuditConfig::default();
        config.scoring.levels.high = 40;
        let error = config.validate().expect_err("inverted levels should fail");
        assert!(error.to_string().contains("scoring.levels"));
    }

    #[test]
    fn validate_rejects_large_above_huge() {
        let mut config = AuditConfig::default();
        config.thresholds.large_lines = 2000;
        assert!(config.validate().is_err());
    }
}
