use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use kirchenblatt::settings::Settings;
use kirchenblatt::{extract_events, scan_lines, Error, ExtractOptions};

#[derive(Parser)]
#[command(name = "kirchenblatt", about = "Today's Masses from a parish bulletin's extracted text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Extracted text files, joined in order (default: stdin)
    #[arg(short, long)]
    input: Vec<PathBuf>,
    /// Target day as YYYY-MM-DD (default: today in the configured zone)
    #[arg(short, long)]
    date: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the target day's services and write them as JSON
    Extract {
        #[command(flatten)]
        source: SourceArgs,
        /// Output file (default: settings `output`, else stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show how each schedule line was handled
    Lines {
        #[command(flatten)]
        source: SourceArgs,
        /// Also list lines that are not schedule lines
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;
    info!(settings = ?settings, "Starting bulletin extraction");

    match cli.command {
        Commands::Extract { source, output } => {
            let (text, opts) = prepare(&source, &settings)?;
            let events = extract_events(&text, &opts);
            let json = serde_json::to_string_pretty(&events)?;

            match output.or(settings.output) {
                Some(path) => {
                    write_output(&path, &json)?;
                    eprintln!("Wrote {} items -> {}", events.len(), path.display());
                }
                None => println!("{}", json),
            }
        }
        Commands::Lines { source, all } => {
            let (text, opts) = prepare(&source, &settings)?;
            let outcomes = scan_lines(&text, &opts);

            println!("{:>5} | {:<18} | {}", "Line", "Outcome", "Text");
            println!("{}", "-".repeat(90));
            let mut shown = 0usize;
            for o in outcomes.iter().filter(|o| all || o.is_schedule_line()) {
                let status = match &o.result {
                    Ok(e) => format!("event {}", e.start.format("%H:%M")),
                    Err(reason) => truncate(&reason.to_string(), 18),
                };
                println!("{:>5} | {:<18} | {}", o.line_no, status, truncate(&o.line, 60));
                shown += 1;
            }
            let emitted = outcomes.iter().filter(|o| o.result.is_ok()).count();
            println!("\n{} lines shown | {} events for {}", shown, emitted, opts.day);
        }
    }

    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}

fn prepare(source: &SourceArgs, settings: &Settings) -> Result<(String, ExtractOptions)> {
    let tz = settings.tz()?;
    let now = Utc::now().with_timezone(&tz);
    let day = match &source.date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| Error::TargetDay(s.clone()))?,
        None => now.date_naive(),
    };
    let text = read_input(&source.input)?;

    let opts = ExtractOptions {
        tz,
        day,
        now,
        kanton: settings.kanton.clone(),
        source: settings.source.clone(),
    };
    Ok((text, opts))
}

/// Concatenate page/bulletin texts with a line break between them.
fn read_input(paths: &[PathBuf]) -> Result<String> {
    if paths.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }

    let mut pages = Vec::with_capacity(paths.len());
    for path in paths {
        let page = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        pages.push(page);
    }
    Ok(pages.join("\n"))
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
