// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::{ Result, WrapErr };
use log::LevelFilter;

use roadtrip::cli::{ Cli, CliProgress };
use roadtrip::teams::TeamList;
use roadtrip::{ log as filelog, runner };

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = filelog::init(filelog::DEFAULT_LOG_FILE, level) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let teams = match &cli.teams {
        Some(path) => TeamList::load(path)
            .wrap_err_with(|| format!("loading team list {}", path.display()))?,
        None => TeamList::mlb(),
    };

    if cli.list_teams {
        for (pos, team) in teams.iter().enumerate() {
            println!("{},{}", pos, team.name);
        }
        return Ok(());
    }

    let options = cli.to_options(&teams)?;
    log::info!("CLI: {:?}", options.search);

    let mut progress = CliProgress::new();
    let summary = runner::run_with(&options, &teams, Some(&mut progress))
        .wrap_err("planning failed")?;

    println!(
        "Wrote {} trips from {} orderings to {}",
        summary.trips,
        summary.orderings,
        summary.file_written.display()
    );
    Ok(())
}
