//! Logical Grid CLI
//!
//! Usage:
//!   logical-grid [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --columns <N>        Override the form's column count
//!   -o, --orientation <DIR>  Override the fill order (horizontal, vertical)
//!   -m, --map                Print a text map of the grid
//!   -w, --cell-width <N>     Characters per column in the map
//!   -v, --verbose            Log layout decisions to stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use logical_grid::{render_map, render_table, Form, FormError, Orientation, TextConfig};

#[derive(Parser)]
#[command(name = "logical-grid")]
#[command(about = "Place form fields in a fixed-column grid")]
struct Cli {
    /// Form description in TOML (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Override the form's column count
    #[arg(short, long)]
    columns: Option<i32>,

    /// Override the form's fill order
    #[arg(short, long, value_enum)]
    orientation: Option<FillOrder>,

    /// Print a text map of the grid after the placement table
    #[arg(short, long)]
    map: bool,

    /// Characters per column in the text map
    #[arg(short = 'w', long, default_value_t = 10)]
    cell_width: usize,

    /// Log layout decisions to stderr (RUST_LOG overrides the level)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FillOrder {
    Horizontal,
    Vertical,
}

impl From<FillOrder> for Orientation {
    fn from(order: FillOrder) -> Self {
        match order {
            FillOrder::Horizontal => Orientation::Horizontal,
            FillOrder::Vertical => Orientation::Vertical,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "logical_grid=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("{}: {}", path.display(), FormError::from(e));
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut form = match Form::from_str(&source) {
        Ok(form) => form,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    if let Some(columns) = cli.columns {
        form.grid.column_count = columns;
    }
    if let Some(order) = cli.orientation {
        form.grid.orientation = order.into();
    }

    let layout = match form.layout() {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let labels = form.labels();
    println!("{}", render_table(&layout, &labels));
    if cli.map {
        let config = TextConfig::new().with_cell_width(cli.cell_width);
        println!();
        println!("{}", render_map(&layout, &labels, &config));
    }
}
