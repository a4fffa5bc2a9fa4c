use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use midcircle::config::CircleSet;
use midcircle::interior::interior_points;
use midcircle::validate::{parse_pair, parse_radius};
use midcircle::{Circle, Point, Raster};

/// Midpoint circle rasterization CLI — prints grid points as JSON
#[derive(Parser)]
#[command(name = "midcircle", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Rasterize one circle's perimeter, optionally with its fill
    Points {
        /// Circle center as "X,Y"
        #[arg(long, allow_hyphen_values = true)]
        center: String,
        /// Circle radius
        #[arg(long, allow_hyphen_values = true)]
        radius: String,
        /// Append the interior points after the perimeter
        #[arg(long)]
        fill: bool,
    },
    /// List the grid points of a closed disk, row by row
    Interior {
        /// Disk center as "X,Y"
        #[arg(long, allow_hyphen_values = true)]
        center: String,
        /// Disk radius
        #[arg(long, allow_hyphen_values = true)]
        radius: String,
    },
    /// Rasterize every [[circle]] entry of a TOML circle-set file
    Batch {
        /// Path to the circle-set file
        file: String,
    },
}

#[derive(Serialize)]
struct OutputCircle {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    center: [i64; 2],
    radius: i64,
    fill: bool,
    perimeter_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    fill_radius: Option<i64>,
    points: Vec<[i64; 2]>,
}

#[derive(Serialize)]
struct OutputDisk {
    center: [i64; 2],
    radius: i64,
    points: Vec<[i64; 2]>,
}

impl OutputCircle {
    fn new(name: Option<String>, circle: &Circle, raster: Raster) -> Self {
        OutputCircle {
            name,
            center: circle.center.into(),
            radius: circle.radius,
            fill: circle.fill,
            perimeter_len: raster.perimeter_len,
            fill_radius: raster.fill_radius,
            points: to_pairs(raster.points),
        }
    }
}

fn to_pairs(points: Vec<Point>) -> Vec<[i64; 2]> {
    points.into_iter().map(<[i64; 2]>::from).collect()
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match cli.command {
        Command::Points {
            center,
            radius,
            fill,
        } => cmd_points(&center, &radius, fill, cli.pretty),
        Command::Interior { center, radius } => cmd_interior(&center, &radius, cli.pretty),
        Command::Batch { file } => cmd_batch(&file, cli.pretty),
    }
}

fn parse_circle_args(center: &str, radius: &str) -> Result<(Point, i64)> {
    let center = parse_pair("center", center).context("invalid --center")?;
    let radius = parse_radius(radius).context("invalid --radius")?;
    Ok((center, radius))
}

fn cmd_points(center: &str, radius: &str, fill: bool, pretty: bool) -> Result<()> {
    let (center, radius) = parse_circle_args(center, radius)?;
    let circle = Circle::new(center, radius).filled(fill);
    let raster = circle.rasterize();
    tracing::info!(
        "circle at {} r={}: {} perimeter points, {} total",
        center,
        radius,
        raster.perimeter_len,
        raster.points.len()
    );
    print_json(&OutputCircle::new(None, &circle, raster), pretty)
}

fn cmd_interior(center: &str, radius: &str, pretty: bool) -> Result<()> {
    let (center, radius) = parse_circle_args(center, radius)?;
    let points = interior_points(center, radius);
    tracing::info!("disk at {} r={}: {} points", center, radius, points.len());
    let output = OutputDisk {
        center: center.into(),
        radius,
        points: to_pairs(points),
    };
    print_json(&output, pretty)
}

fn cmd_batch(path: &str, pretty: bool) -> Result<()> {
    let toml_str =
        std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let set = CircleSet::from_toml(&toml_str)
        .with_context(|| format!("parsing circle set from {path}"))?;
    tracing::info!("loaded {} circles from {}", set.entries.len(), path);

    let rasters = set
        .rasterize_all()
        .with_context(|| format!("validating circles in {path}"))?;
    for named in rasters {
        let output = OutputCircle::new(named.name, &named.circle, named.raster);
        print_json(&output, pretty)?;
    }
    Ok(())
}
