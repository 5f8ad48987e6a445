use starsim::{animate_system, barnes_hut, bench_forces, images_to_gif, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D Barnes-Hut galaxy simulator")]
struct Args {
    /// Seed for the random galaxy generators
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Jupiter and the Galilean moons, read from data/jupiter_moons.txt
    Jupiter,
    /// A single spinning galaxy of 500 stars
    Galaxy,
    /// Two galaxies on a collision course
    Collision,
    /// A scenario described by a YAML file
    Custom { file: PathBuf },
    /// Compare direct-sum and tree force evaluation timings
    Bench,
}

// load here to keep main clean
fn load_scenario(command: Command, seed: u64) -> Result<Scenario> {
    let scenario = match command {
        Command::Jupiter => {
            println!("Running Jupiter moon simulation...");
            Scenario::jupiter("data/jupiter_moons.txt")
                .context("failed to load data/jupiter_moons.txt")?
        }
        Command::Galaxy => {
            println!("Running galaxy simulation...");
            Scenario::galaxy(seed)
        }
        Command::Collision => {
            println!("Running galaxy collision simulation...");
            Scenario::collision(seed)
        }
        Command::Custom { file } => {
            println!("Running custom simulation from {}...", file.display());
            let reader = BufReader::new(
                File::open(&file).with_context(|| format!("failed to open {}", file.display()))?,
            );
            let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            Scenario::from_config(cfg)?
        }
        Command::Bench => unreachable!("bench is dispatched before scenario loading"),
    };
    Ok(scenario)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Command::Bench = args.command {
        bench_forces();
        return Ok(());
    }

    let scenario = load_scenario(args.command, args.seed)?;
    let Scenario {
        name,
        universe,
        num_gens,
        dt,
        theta,
        canvas_width,
        frequency,
        scaling_factor,
    } = scenario;

    println!("Simulating with the Barnes-Hut algorithm...");
    let time_points = barnes_hut(universe, num_gens, dt, theta);

    println!("Simulation complete. Drawing frames...");
    let frames = animate_system(&time_points, canvas_width, frequency, scaling_factor);

    let out = format!("{name}.gif");
    images_to_gif(frames, &out).with_context(|| format!("failed to write {out}"))?;

    println!("GIF generated successfully: {out}");
    Ok(())
}
