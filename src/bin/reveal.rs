use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use reveal::SectionComposer as _;

#[derive(Parser, Debug)]
#[command(name = "reveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the reveal delay and duration of every unit on a page.
    Plan(PlanArgs),
    /// Run a page under a simulated frame loop and report every trigger and transition.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the page frame rate (frames per second).
    #[arg(long)]
    fps: Option<u32>,

    /// Print the full report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_page_json(path: &Path) -> anyhow::Result<reveal::Page> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open page '{}'", path.display()))?;
    let page: reveal::Page = serde_json::from_str(&text).with_context(|| "parse page JSON")?;
    page.validate()?;
    Ok(page)
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let page = read_page_json(&args.in_path)?;

    let mut rows = Vec::new();
    for (idx, section) in page.sections.iter().enumerate() {
        let plan = section
            .plan(&page.motion)
            .with_context(|| format!("plan section {idx}"))?;
        rows.push((plan.name.clone(), plan.delays()));
    }

    if args.json {
        let json: Vec<_> = rows
            .iter()
            .map(|(name, delays)| serde_json::json!({ "section": name, "units": delays }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    for (name, delays) in &rows {
        println!("{name}");
        for d in delays {
            println!(
                "  {:<10} {:<28} delay {:>6.3}s  duration {:>6.3}s",
                d.group,
                d.unit,
                d.delay.get(),
                d.duration.get()
            );
        }
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut page = read_page_json(&args.in_path)?;
    if let Some(fps) = args.fps {
        page.fps = reveal::Fps::new(fps, 1)?;
    }

    let report = reveal::PageSession::mount(page)?.run();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for event in &report.events {
        match event {
            reveal::SessionEvent::Entered { at, element } => {
                println!("{:>7.3}s  entered     element {}", at.get(), element.0);
            }
            reveal::SessionEvent::Transition(t) => {
                println!(
                    "{:>7.3}s  {:<10}  {} / {} / {}: {:?} -> {:?}",
                    t.at.get(),
                    "transition",
                    t.section,
                    t.group,
                    t.unit,
                    t.from,
                    t.to
                );
            }
            reveal::SessionEvent::Unmounted {
                at,
                section,
                summary,
            } => {
                println!(
                    "{:>7.3}s  unmounted   {section} (pending triggers {}, interrupted {})",
                    at.get(),
                    summary.pending_triggers,
                    summary.interrupted
                );
            }
        }
    }

    eprintln!("simulated {} frames", report.frames);
    for section in &report.sections {
        let revealed = section
            .units
            .iter()
            .filter(|u| u.phase == reveal::RevealPhase::Revealed)
            .count();
        eprintln!(
            "{}: {}/{} revealed{}",
            section.name,
            revealed,
            section.units.len(),
            if section.mounted { "" } else { " (unmounted)" }
        );
    }
    Ok(())
}
