use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use merge_release_notes::cli::{run_merge_workflow, MergeWorkflowArgs, WorkflowOutcome};
use merge_release_notes::config;
use merge_release_notes::domain::VersionRange;
use merge_release_notes::github::{parse_repository, GitHubClient};
use merge_release_notes::ui;

#[derive(clap::Parser)]
#[command(
    name = "merge-release-notes",
    version,
    about = "Merge the release notes of a version range into one document"
)]
struct Args {
    #[arg(help = "Repository URL or owner/repo shorthand")]
    repository: String,

    #[arg(help = "Version to start after (exclusive)")]
    start: String,

    #[arg(help = "Last version to include (inclusive)")]
    end: String,

    #[arg(short, long, help = "Write the document to this file instead of stdout")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Number of releases fetched (single page, max 100)")]
    per_page: Option<u32>,

    #[arg(long, help = "Leave pre-releases out of the merged document")]
    exclude_prereleases: bool,

    #[arg(short, long, help = "Overwrite the output file without asking")]
    force: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(per_page) = args.per_page {
        config.github.per_page = per_page;
    }
    if args.exclude_prereleases {
        config.releases.include_prereleases = false;
    }

    let repository = parse_repository(&args.repository)?;
    let workflow_args = MergeWorkflowArgs {
        repository,
        range: VersionRange::new(args.start, args.end),
        now: chrono::Utc::now(),
    };

    let client = GitHubClient::new(&config.github);
    let mut sink = ui::TerminalSink::new();

    ui::display_status(&format!(
        "Merging releases of {} in {}",
        workflow_args.repository, workflow_args.range
    ));
    let outcome = run_merge_workflow(&workflow_args, &config.releases, &client, &mut sink).await?;

    match &outcome {
        WorkflowOutcome::Rendered { tags, .. } => {
            let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
            ui::display_selected_tags(&tags);
        }
        WorkflowOutcome::Empty { message } => ui::display_status(message),
    }

    match args.output.or(config.output.path) {
        Some(path) => {
            if path.exists()
                && !args.force
                && !ui::confirm_action(&format!("Overwrite {}?", path.display()))?
            {
                println!("Operation cancelled by user.");
                return Ok(());
            }
            let mut file = fs::File::create(&path)?;
            outcome.write_to(&mut file)?;
            ui::display_success(&format!(
                "Wrote {} release(s) to {}",
                outcome.release_count(),
                path.display()
            ));
        }
        None => outcome.write_to(&mut io::stdout().lock())?,
    }

    Ok(())
}
