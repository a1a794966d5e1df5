//! Caliber CLI.
//!
//! Provides three modes of operation:
//! - `view`: open the interactive 3D movement viewer (default)
//! - `catalog`: print the part catalog
//! - `info`: print workspace crate versions

use bevy::prelude::*;
use clap::{Parser, Subcommand};

use caliber_core::prelude::*;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Interactive 3D mechanical watch movement.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive viewer.
    View {
        /// Path to a TOML configuration file.
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Start with the animation paused.
        #[arg(long)]
        paused: bool,

        /// Initial speed multiplier (0.1 to 5.0).
        #[arg(short, long)]
        speed: Option<f32>,

        /// Initial explode factor (0.0 to 2.0).
        #[arg(short, long)]
        explode: Option<f32>,

        /// Hide part labels at startup.
        #[arg(long)]
        no_labels: bool,
    },

    /// Print the part catalog.
    Catalog,

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_view(
    config_path: Option<std::path::PathBuf>,
    paused: bool,
    speed: Option<f32>,
    explode: Option<f32>,
    no_labels: bool,
) {
    let mut config = match config_path {
        Some(path) => match CaliberConfig::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load {}: {err}", path.display());
                std::process::exit(1);
            }
        },
        None => CaliberConfig::default(),
    };

    // CLI flags override the config file.
    if paused {
        config.start_running = false;
    }
    if let Some(speed) = speed {
        config.speed = speed;
    }
    if let Some(explode) = explode {
        config.explode = explode;
    }
    if no_labels {
        config.show_labels = false;
    }
    if let Err(err) = config.validate() {
        eprintln!("invalid configuration: {err}");
        std::process::exit(1);
    }

    let clock = MovementClock::new(config.start_running, config.speed);

    let mut view = ViewState::default();
    view.set_explode(config.explode);
    view.set_labels_visible(config.show_labels);

    let [width, height] = config.window.resolution;
    let title = config.window.title.clone();

    println!("Caliber - mechanical watch movement");
    println!("  Camera: left-drag orbit, right-drag pan, scroll zoom");
    println!("  Controls: side panel (speed, explode, labels, part list)");

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title,
                resolution: (width, height).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(caliber_core::CaliberCorePlugin)
        .add_plugins(caliber_viz::CaliberVizPlugin)
        .insert_resource(config)
        .insert_resource(clock)
        .insert_resource(view)
        .run();
}

fn run_catalog() {
    println!("{:<14} {:<18} description", "id", "name");
    for entry in catalog() {
        println!("{:<14} {:<18} {}", entry.id, entry.name, entry.description);
    }
}

fn run_info() {
    println!("caliber v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  caliber-core       {}", env!("CARGO_PKG_VERSION"));
    println!("  caliber-kinematics {}", env!("CARGO_PKG_VERSION"));
    println!("  caliber-geometry   {}", env!("CARGO_PKG_VERSION"));
    println!("  caliber-assembly   {}", env!("CARGO_PKG_VERSION"));
    println!("  caliber-viz        {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("edition: 2024");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::View {
            config,
            paused,
            speed,
            explode,
            no_labels,
        }) => run_view(config, paused, speed, explode, no_labels),
        Some(Commands::Catalog) => run_catalog(),
        Some(Commands::Info) => run_info(),
        None => run_view(None, false, None, None, false),
    }
}
