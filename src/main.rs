mod ai;
mod cli;
mod config;
mod detect;
mod error;
mod extract;
mod report;
mod scoring;
mod types;

use crate::error::AuditError;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, AuditError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match cli.command {
        cli::Commands::Analyze(cmd) => analyze(cmd),
    }
}

fn analyze(cmd: cli::AnalyzeCommand) -> Result<i32, AuditError> {
    if !cmd.path.exists() {
        return Err(AuditError::PathNotFound(cmd.path.display().to_string()));
    }

    let mut audit_config = config::load_config(&cmd.path)?.unwrap_or_default();
    apply_cli_overrides(&mut audit_config, &cmd);
    audit_config.validate()?;

    let source = extract::GitSource::open(&cmd.path)?;
    let model = source.discover(cmd.range.as_deref(), &audit_config)?;
    info!(
        repo = %model.root.display(),
        mainline = %model.mainline_ref,
        commits = model.commits.len(),
        "analyzing repository"
    );

    let events = detect::detect_all(&model, &audit_config);
    let scoring_report = scoring::aggregate(&events, &audit_config);

    let repo_path = model.root.display().to_string();
    let ai_options = ai::AiOptions {
        enabled: cmd.ai,
        provider: match cmd.ai_provider {
            cli::AiProvider::None => ai::Provider::None,
            cli::AiProvider::Openai => ai::Provider::OpenAi,
        },
        api_key: std::env::var("OPENAI_API_KEY").ok(),
        model: cmd
            .ai_model
            .clone()
            .or_else(|| std::env::var("OPENAI_MODEL").ok())
            .unwrap_or_else(|| ai::DEFAULT_MODEL.to_string()),
    };
    let ai_section = ai::request_explanation(
        &events,
        &scoring_report,
        &model.mainline_ref,
        &repo_path,
        &ai_options,
    );

    let metadata = types::report::RunMetadata {
        repo_path,
        mainline_ref: model.mainline_ref.clone(),
        range: model.range.clone(),
        commit_count: model.commits.len(),
        analyzed_at: chrono::Utc::now().to_rfc3339(),
    };
    let audit_report = report::assemble(metadata, scoring_report, events, ai_section);

    let json_path = output_path(&cmd.output_dir, "git-integrity-report.json", &cmd.json);
    let markdown_path = output_path(&cmd.output_dir, "git-integrity-report.md", &cmd.markdown);
    if let Some(dir) = &cmd.output_dir {
        fs::create_dir_all(dir)?;
    }

    let mut wrote_file = false;
    if let Some(path) = json_path {
        fs::write(
            &path,
            report::render(&audit_report, report::OutputFormat::Json)?,
        )?;
        println!("JSON report written: {}", path.display());
        wrote_file = true;
    }
    if let Some(path) = markdown_path {
        fs::write(
            &path,
            report::render(&audit_report, report::OutputFormat::Md)?,
        )?;
        println!("Markdown report written: {}", path.display());
        wrote_file = true;
    }

    if wrote_file {
        println!(
            "Risk level: {} (score {})",
            audit_report.scoring.level, audit_report.scoring.total
        );
    } else {
        let format = match cmd.format {
            cli::ReportFormat::Json => report::OutputFormat::Json,
            cli::ReportFormat::Md => report::OutputFormat::Md,
        };
        println!("{}", report::render(&audit_report, format)?);
    }

    Ok(exit_code::SUCCESS)
}

fn apply_cli_overrides(config: &mut types::config::AuditConfig, cmd: &cli::AnalyzeCommand) {
    if let Some(max_commits) = cmd.max_commits {
        config.limits.max_commits = max_commits;
    }
    if let Some(large_files) = cmd.large_files {
        config.thresholds.large_files = large_files;
    }
    if let Some(large_lines) = cmd.large_lines {
        config.thresholds.large_lines = large_lines;
    }
    if let Some(huge_files) = cmd.huge_files {
        config.thresholds.huge_files = huge_files;
    }
    if let Some(huge_lines) = cmd.huge_lines {
        config.thresholds.huge_lines = huge_lines;
    }
}

fn output_path(
    output_dir: &Option<PathBuf>,
    file_name: &str,
    explicit: &Option<PathBuf>,
) -> Option<PathBuf> {
    match output_dir {
        Some(dir) => Some(dir.join(file_name)),
        None => explicit.clone(),
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
