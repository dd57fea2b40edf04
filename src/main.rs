#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::{fs, path::PathBuf};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use fleetgrid::{
    init_logging, ship_class_by_name, Grid, GridState, PlacementEngine, ShipClass, CELL_SIZE,
    FLEET, GRID_HEIGHT, GRID_WIDTH,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Lay out a battleship grid", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Place a fleet at random and print the grid.
    Random {
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = GRID_WIDTH)]
        width: i32,
        #[arg(long, default_value_t = GRID_HEIGHT)]
        height: i32,
        #[arg(long = "ship", help = "Ship class to place, repeatable (default: standard fleet)")]
        ships: Vec<String>,
        #[arg(long, help = "Write a bincode snapshot of the grid to this file")]
        save: Option<PathBuf>,
    },
    /// Load a saved snapshot and print it.
    Show { file: PathBuf },
}

#[cfg(feature = "std")]
fn fleet(names: &[String]) -> anyhow::Result<Vec<ShipClass>> {
    if names.is_empty() {
        return Ok(FLEET.to_vec());
    }
    names
        .iter()
        .map(|n| ship_class_by_name(n).with_context(|| format!("unknown ship class {:?}", n)))
        .collect()
}

#[cfg(feature = "std")]
fn print_grid(grid: &Grid) {
    println!("{}", grid);
    let sunk = grid.ships().iter().filter(|s| s.is_sunk()).count();
    println!(
        "{} ships, {} sunk{}",
        grid.ships().len(),
        sunk,
        if grid.all_ships_sunk() { " (fleet destroyed)" } else { "" }
    );
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Random {
            seed,
            width,
            height,
            ships,
            save,
        } => {
            let classes = fleet(&ships)?;
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut grid = Grid::new(width, height, CELL_SIZE)?;
            PlacementEngine::new().place_fleet(&mut grid, &classes, &mut rng)?;
            print_grid(&grid);

            if let Some(path) = save {
                let bytes = bincode::serialize(&GridState::from(&grid))?;
                fs::write(&path, bytes)
                    .with_context(|| format!("writing snapshot to {}", path.display()))?;
                println!("saved to {}", path.display());
            }
        }
        Commands::Show { file } => {
            let bytes = fs::read(&file)
                .with_context(|| format!("reading snapshot from {}", file.display()))?;
            let state: GridState = bincode::deserialize(&bytes)?;
            let grid = Grid::try_from(state)
                .with_context(|| format!("restoring snapshot from {}", file.display()))?;
            print_grid(&grid);
        }
    }
    Ok(())
}
