use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git2changelog::domain::KeywordFilter;
use git2changelog::git::GitRepository;
use git2changelog::{config, ui, ChangelogError, RunConfiguration, RunOptions};

mod exit_codes;

#[derive(clap::Parser)]
#[command(
    name = "git2changelog",
    version,
    about = "Convert git history into an RPM spec file changelog"
)]
struct Args {
    #[arg(short, long, default_value = ".", help = "Git repository to read")]
    repo: String,

    #[arg(short, long, help = "Start tag (exclusive)")]
    start: String,

    #[arg(short, long, help = "End reference (inclusive) [default: HEAD]")]
    end: Option<String>,

    #[arg(
        short = 't',
        long = "search",
        help = "Comma-separated keywords; only matching commits are listed"
    )]
    search: Option<String>,

    #[arg(short = 'n', long = "name", help = "Release name for an untagged HEAD")]
    release_name: Option<String>,

    #[arg(short, long, help = "Output format (rpm)")]
    format: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(err) = run(args) {
        ui::display_error(&format!("{:#}", err));

        let code = match err.downcast_ref::<ChangelogError>() {
            Some(changelog_err) => {
                if let Some(hint) = ui::hint_for(changelog_err) {
                    ui::display_hint(hint);
                }
                exit_codes::for_error(changelog_err)
            }
            None => exit_codes::ERROR,
        };
        std::process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    let file_config = config::load_config(args.config.as_deref())?;

    let mut options = RunOptions::new(args.repo, args.start);
    options.end = args.end;
    options.release_name = args.release_name;
    options.format = args.format;
    if let Some(joined) = args.search.as_deref() {
        options.search_terms = KeywordFilter::from_joined(joined).terms().to_vec();
    }
    let options = options.with_defaults(&file_config);

    let repo = GitRepository::open(&options.repo)?;
    let run_config = RunConfiguration::with_source(options, &repo)?;
    let lines = git2changelog::generate(&run_config, &repo)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{}", line).context("Failed to write changelog")?;
    }
    out.flush()?;

    Ok(())
}

/// Console logging controlled by RUST_LOG (default: warn), written to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
