//! Terminal demo: plan a danger-aware route and print the map.
//!
//! Run: cargo run --bin tactic-route -- classic
//!      cargo run --bin tactic-route -- --admissible random --seed 7

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tactic_demos::{RandomParams, Scenario, run};
use tactic_field::{Overlay, PlannerConfig, render};

#[derive(Parser)]
#[command(name = "tactic-route")]
#[command(version)]
#[command(about = "Least-cost routing across hazard and cover fields")]
struct Cli {
    /// Scale the heuristic by the cheapest step so routes are optimal
    #[arg(long)]
    admissible: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// The fixed 15x10 demonstration map
    Classic,
    /// A seeded random map
    Random {
        #[arg(long, default_value = "42")]
        seed: u64,

        #[arg(long, default_value = "30")]
        width: i32,

        #[arg(long, default_value = "15")]
        height: i32,

        /// Number of vertical wall segments
        #[arg(long, default_value = "6")]
        walls: usize,

        /// Number of cover cells
        #[arg(long, default_value = "12")]
        cover: usize,

        /// Number of hazard sources
        #[arg(long, default_value = "4")]
        hazards: usize,

        #[arg(long, default_value = "2.0")]
        min_radius: f64,

        #[arg(long, default_value = "5.0")]
        max_radius: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let scenario = match cli.command.unwrap_or(Commands::Classic) {
        Commands::Classic => Scenario::classic(),
        Commands::Random {
            seed,
            width,
            height,
            walls,
            cover,
            hazards,
            min_radius,
            max_radius,
        } => {
            let params = RandomParams {
                width,
                height,
                walls,
                cover,
                hazards,
                min_radius,
                max_radius,
            };
            params.validate()?;
            Scenario::random(seed, &params)
        }
    }
    .context("building scenario")?;

    let config = if cli.admissible {
        PlannerConfig::admissible()
    } else {
        PlannerConfig::default()
    };

    let markers = Overlay {
        route: None,
        start: Some(scenario.start),
        goal: Some(scenario.goal),
    };
    println!("=== MAP BEFORE SEARCH ===\n");
    print!("{}", render(&scenario.field, markers));

    let report = run(&scenario, config).context("planning route")?;
    if report.route.is_empty() {
        if scenario.start == scenario.goal {
            println!("\nAlready at the goal.");
        } else {
            println!("\nNo path found.");
        }
        return Ok(());
    }

    println!("\n=== MAP WITH PATH ===\n");
    print!(
        "{}",
        render(
            &scenario.field,
            Overlay {
                route: Some(&report.route),
                ..markers
            }
        )
    );

    println!("\nPath length : {}", report.route.len());
    println!("Danger sum  : {:.2}", report.danger_sum);
    println!("Total cost  : {:.2}", report.total_cost);
    log::debug!("nodes expanded: {}", report.expanded);
    Ok(())
}
