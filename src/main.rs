//! Torus Life CLI - Run a universe from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::io;
use std::path::PathBuf;

use torus_life::{
    compute::Universe,
    render::{SleepClock, TextRenderer},
    schema::{Seed, UniverseConfig},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run Conway's Game of Life on a toroidal grid.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to universe configuration file");
        eprintln!("  generations  Override the configured generation count (0 = forever)");
        eprintln!();
        eprintln!("The seed is read from <config>.seed.json when present (default: FivePoint).");
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let mut config: UniverseConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Some(generations) = args.get(2) {
        config.generations = generations.parse().unwrap_or_else(|e| {
            eprintln!("Invalid generation count {:?}: {}", generations, e);
            std::process::exit(1);
        });
    }

    // Load or default seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    let mut universe = Universe::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());

    match universe.run(
        &seed,
        config.termination(),
        config.interval(),
        &mut renderer,
        &mut SleepClock,
    ) {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            eprintln!("Run aborted: {}", e);
            std::process::exit(1);
        }
    }

    if let Some(store_path) = &config.store_path {
        if let Err(e) = universe.store_to_file(store_path) {
            log::error!("Unable to store final grid: {}", e);
        }
    }
}

fn print_example_config() {
    let config = UniverseConfig {
        load_path: Some(PathBuf::from("gosper_glider_gun.bin")),
        store_path: Some(PathBuf::from("gosper_glider_gun.bin")),
        ..Default::default()
    };
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
    println!();
    println!("Example seed (config.seed.json):");
    match serde_json::to_string_pretty(&seed) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing seed: {}", e),
    }
}
