//! points-demo CLI
//!
//! Build, clear and render points from the command line.
//!
//! Usage:
//!     points-demo new --x 1 --y 2 --z -3.5
//!     points-demo new --x 1 --clear --json
//!     points-demo parse "Point(1.0, 2.0, -3.5)"

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use points_demo::core::{parse_coordinate, Point, PointConfig, PointResult};

/// points-demo - A 3D point, from Rust to Python
#[derive(Parser)]
#[command(name = "points-demo")]
#[command(version)]
#[command(about = "Construct, clear and render 3D points", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Construct a point and print it
    New {
        /// X position (default: 0)
        #[arg(long, allow_hyphen_values = true, value_parser = coordinate_parser("x"))]
        x: Option<f64>,

        /// Y position (default: 0)
        #[arg(long, allow_hyphen_values = true, value_parser = coordinate_parser("y"))]
        y: Option<f64>,

        /// Z position (default: 0)
        #[arg(long, allow_hyphen_values = true, value_parser = coordinate_parser("z"))]
        z: Option<f64>,

        /// Reset the point to the origin before printing
        #[arg(long)]
        clear: bool,

        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Parse a point from "Point(x, y, z)" or "x, y, z" and print it
    Parse {
        /// Textual point
        text: String,

        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn coordinate_parser(name: &'static str) -> impl Fn(&str) -> PointResult<f64> + Clone {
    move |text: &str| parse_coordinate(name, text)
}

fn render(point: &Point, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string(point)
    } else {
        Ok(point.to_text())
    }
}

fn cmd_new(config: PointConfig, clear: bool, json: bool) -> Result<String, Box<dyn std::error::Error>> {
    let mut point = config.build();
    log::info!("constructed {}", point);

    if clear {
        point.clear();
    }

    Ok(render(&point, json)?)
}

fn cmd_parse(text: &str, json: bool) -> Result<String, Box<dyn std::error::Error>> {
    let point: Point = text.parse()?;
    Ok(render(&point, json)?)
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New { x, y, z, clear, json } => {
            let config = PointConfig { x, y, z };
            cmd_new(config, clear, json)
        }
        Commands::Parse { text, json } => cmd_parse(&text, json),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
