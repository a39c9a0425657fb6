use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gitaudit",
    version,
    about = "Git history integrity auditing and risk scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Analyze(AnalyzeCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Repository to audit
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Git range to analyze (e.g. base..HEAD); defaults to the detected
    /// mainline reference
    #[arg(long)]
    pub range: Option<String>,

    /// Maximum number of commits to analyze
    #[arg(long)]
    pub max_commits: Option<usize>,

    /// File-count threshold for large commits
    #[arg(long)]
    pub large_files: Option<usize>,

    /// Line-count threshold for large commits
    #[arg(long)]
    pub large_lines: Option<u64>,

    /// File-count threshold for huge commits
    #[arg(long)]
    pub huge_files: Option<usize>,

    /// Line-count threshold for huge commits
    #[arg(long)]
    pub huge_lines: Option<u64>,

    /// Report format printed to stdout
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Write the JSON report to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the Markdown report to this path
    #[arg(long)]
    pub markdown: Option<PathBuf>,

    /// Write both reports into this directory
    #[arg(long, conflicts_with_all = ["json", "markdown"])]
    pub output_dir: Option<PathBuf>,

    /// Request a narrative explanation of the findings (uses OPENAI_API_KEY)
    #[arg(long)]
    pub ai: bool,

    /// Narrative provider
    #[arg(long, value_enum, default_value = "openai")]
    pub ai_provider: AiProvider,

    /// Narrative model (defaults to OPENAI_MODEL or the built-in default)
    #[arg(long)]
    pub ai_model: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AiProvider {
    None,
    Openai,
}
