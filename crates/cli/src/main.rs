mod selection;

use crate::selection::{Outcome, Selection};
use anyhow::{anyhow, Context};
use config::{Config, File};
use hexpath::{Grid, GridConfig, Layout, Point2, Seed, TilePoint};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// Build a hexagon grid and replay pointer clicks against it. The first
/// click on a tile selects it as the start, a click on another tile finds a
/// path there, and a click on the start again clears the selection.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexpath")]
struct Opt {
    /// Path to a config file that defines the grid. Supported formats: JSON,
    /// TOML. If not given, the default config is used
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Override the seed from the config. Any integer or string works
    #[structopt(long)]
    seed: Option<Seed>,

    /// Override the layout from the config: horizontal or vertical
    #[structopt(long)]
    layout: Option<Layout>,

    /// A click position in pixels, as `X,Y`. Can be given multiple times,
    /// and clicks are replayed in order
    #[structopt(long = "click", number_of_values = 1)]
    clicks: Vec<Click>,

    /// How to print the result of each click. Supported formats:
    ///
    /// text - One human-readable line per click
    ///
    /// json - One JSON object per click
    #[structopt(short = "f", long, default_value = "text")]
    format: OutputFormat,

    /// Print the full config used for the grid, in TOML format
    #[structopt(long)]
    dump_config: bool,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for `--format`!
    Text,
    Json,
}

/// A pointer position given on the command line
#[derive(Copy, Clone, Debug, PartialEq)]
struct Click(Point2);

impl FromStr for Click {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected X,Y but got {:?}", s))?;
        let x = x.trim().parse().context("invalid x coordinate")?;
        let y = y.trim().parse().context("invalid y coordinate")?;
        Ok(Self(Point2::new(x, y)))
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Render one click outcome in the requested format
fn format_outcome(
    format: OutputFormat,
    outcome: &Outcome,
) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string(outcome)?,
        OutputFormat::Text => match outcome {
            Outcome::Ignored { point } => format!("ignored click at {}", point),
            Outcome::Selected {
                start,
                neighborhood,
            } => format!(
                "selected {}, nearby: {}",
                start,
                join_points(neighborhood)
            ),
            Outcome::Cleared { start } => format!("cleared {}", start),
            Outcome::Path { start, goal, path } if path.is_empty() => {
                format!("no path from {} to {}", start, goal)
            }
            Outcome::Path { path, .. } => {
                format!("path: {}", join_points(path))
            }
        },
    };
    Ok(output)
}

fn join_points(points: &[TilePoint]) -> String {
    points
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => GridConfig::default(),
    };
    if let Some(seed) = opt.seed {
        config.seed = seed;
    }
    if let Some(layout) = opt.layout {
        config.layout = layout;
    }

    if opt.dump_config {
        // Panics only if the config format isn't serializable (a bug)
        print!(
            "{}",
            toml::to_string_pretty(&config)
                .expect("error serializing config")
        );
    }

    let grid = Grid::build(config)?;
    info!(
        "Grid has {} tiles in {} columns and {} rows",
        grid.len(),
        grid.columns(),
        grid.rows()
    );

    let mut selection = Selection::default();
    for Click(point) in opt.clicks {
        let outcome = selection.click(&grid, point)?;
        println!("{}", format_outcome(opt.format, &outcome)?);
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
