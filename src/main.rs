//! Landgen CLI - colony-world terrain generator.
//!
//! Generate a classified terrain grid from a seed and inspect it as an
//! ASCII map, raw altitude dump, or exported PNG images.

use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use landgen::export::{
    ascii, export_altitude_png, export_land_type_png, AltitudeLayer, MapView, PngExportOptions,
};
use landgen::pipeline::standard_pipeline;
use landgen::terrain::{LandType, World, WorldConfig};

/// Procedural colony-world terrain generator.
#[derive(Parser)]
#[command(name = "landgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a world and print it as an ASCII map.
    Generate {
        /// Grid width in tiles.
        #[arg(long, default_value = "50")]
        width: usize,

        /// Grid height in tiles.
        #[arg(long, default_value = "50")]
        height: usize,

        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<u64>,

        /// View to print: glyph map or raw altitudes.
        #[arg(short, long, value_enum, default_value = "map")]
        view: ViewArg,

        /// Directory for PNG exports (omit to skip image output).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Base name for exported files.
        #[arg(short, long, default_value = "world")]
        name: String,

        /// Inset from every grid edge for peak placement.
        #[arg(long, default_value = "8")]
        edge_buffer: usize,

        /// Minimum distance between mountain anchors (tiles).
        #[arg(long, default_value = "20.0")]
        min_peak_separation: f64,

        /// Plateau-mask value above which tiles flatten into plateaus.
        #[arg(long, default_value = "0.58")]
        plateau_threshold: f64,

        /// Altitude cap on valley detection.
        #[arg(long, default_value = "0.7")]
        valley_max_altitude: f64,

        /// Optional altitude ceiling (terrain is unclamped when omitted).
        #[arg(long)]
        altitude_clamp: Option<f64>,
    },

    /// Print the land-type glyph legend.
    Legend,
}

/// ASCII view selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    /// Land-type glyphs.
    Map,
    /// Signed two-decimal finished altitudes.
    Altitude,
    /// Signed two-decimal noise-only altitudes.
    Base,
}

impl From<ViewArg> for MapView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Map => MapView::LandTypes,
            ViewArg::Altitude => MapView::Altitude,
            ViewArg::Base => MapView::BaseAltitude,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate {
            width,
            height,
            seed,
            view,
            output,
            name,
            edge_buffer,
            min_peak_separation,
            plateau_threshold,
            valley_max_altitude,
            altitude_clamp,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            let config = WorldConfig {
                width,
                height,
                seed,
                edge_buffer,
                min_peak_separation,
                plateau_threshold,
                valley_max_altitude,
                altitude_clamp,
                ..Default::default()
            };
            run_generate(config, view.into(), output, &name)
        }
        Commands::Legend => {
            print!("{}", ascii::legend());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_generate(
    config: WorldConfig,
    view: MapView,
    output: Option<PathBuf>,
    name: &str,
) -> Result<(), Box<dyn Error>> {
    println!(
        "Generating {}x{} world (seed {})...",
        config.width, config.height, config.seed
    );

    let start = Instant::now();
    let mut world = World::new(config);
    standard_pipeline().run_with_callbacks(
        &mut world,
        |stage, i, total| println!("  [{}/{}] {}...", i + 1, total, stage),
        |_, _, _| {},
    )?;
    println!("Done in {:.2?}", start.elapsed());

    let placement = &world.placement;
    println!(
        "Peaks: {} placed of {} requested",
        placement.placed(),
        placement.requested
    );
    for peak in &placement.peaks {
        println!("  anchor at ({}, {})", peak.x, peak.y);
    }

    let (min, max) = world.grid.altitude_range();
    println!("Altitude range: {min:+.2} to {max:+.2}");
    for land in LandType::ALL {
        let count = world.grid.count_land_type(land);
        if count > 0 {
            println!("  {:>12}: {count}", land.name());
        }
    }

    println!();
    print!("{}", ascii::render(&world.grid, view));

    if let Some(dir) = output {
        std::fs::create_dir_all(&dir)?;

        let altitude_path = dir.join(format!("{name}_altitude.png"));
        let options = PngExportOptions::auto_range(&world.grid, AltitudeLayer::Final);
        export_altitude_png(&world.grid, AltitudeLayer::Final, &altitude_path, &options)?;

        let base_path = dir.join(format!("{name}_base.png"));
        let base_options = PngExportOptions::auto_range(&world.grid, AltitudeLayer::Base);
        export_altitude_png(&world.grid, AltitudeLayer::Base, &base_path, &base_options)?;

        let land_path = dir.join(format!("{name}_landtypes.png"));
        export_land_type_png(&world.grid, &land_path)?;

        println!();
        println!("Exported:");
        println!("  {}", altitude_path.display());
        println!("  {}", base_path.display());
        println!("  {}", land_path.display());
    }

    Ok(())
}
