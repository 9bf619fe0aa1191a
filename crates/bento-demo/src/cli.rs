#![forbid(unsafe_code)]

//! Command-line argument parsing for the bento demo.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `BENTO_DEMO_*` prefix; explicit flags win.

use std::env;
use std::path::PathBuf;
use std::process;

use bento_layout::Axis;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Bento Demo: colored tiles arranged by a split tree

USAGE:
    bento-demo [OPTIONS]

OPTIONS:
    --width=N            Proposed width in cells, 0 = unbounded (default: 60)
    --height=N           Proposed height in cells, 0 = unbounded (default: 24)
    --spacing=N          Gap between siblings at every level (default: 1)
    --items=N            Number of tiles to create (default: 10)
    --remove=I,J,...     Remove tiles by id before layout
    --axis=AXIS          Root axis: 'vertical' (default) or 'horizontal'
    --tree=PATH          Load a split tree snapshot (JSON) instead of the sample
    --json               Print placements as JSON instead of a canvas
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    BENTO_DEMO_WIDTH      Override --width
    BENTO_DEMO_HEIGHT     Override --height
    BENTO_DEMO_SPACING    Override --spacing
    BENTO_DEMO_ITEMS      Override --items
    BENTO_DEMO_AXIS       Override --axis
    BENTO_DEMO_TREE       Override --tree
    BENTO_LOG             Log filter (default: warn), e.g. bento_layout=debug";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Proposed width; 0 means unbounded.
    pub width: u16,
    /// Proposed height; 0 means unbounded.
    pub height: u16,
    pub spacing: u16,
    pub items: usize,
    /// Tile ids to drop before layout.
    pub remove: Vec<usize>,
    pub axis: Axis,
    pub tree: Option<PathBuf>,
    pub json: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            width: 60,
            height: 24,
            spacing: 1,
            items: 10,
            remove: Vec::new(),
            axis: Axis::Vertical,
            tree: None,
            json: false,
        }
    }
}

/// Result of parsing: either options to run with, or an informational exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse process arguments and environment, exiting on `--help`,
    /// `--version`, or invalid input.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(|key| env::var(key).ok(), &args) {
            Ok(Parsed::Run(opts)) => opts,
            Ok(Parsed::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Parsed::Version) => {
                println!("bento-demo {VERSION}");
                process::exit(0);
            }
            Err(message) => {
                eprintln!("{message}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse from an environment lookup and an argument list.
    ///
    /// Environment values that fail to parse are ignored; invalid flags
    /// are errors.
    pub fn parse_from<F>(lookup: F, args: &[String]) -> Result<Parsed, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(n) = lookup("BENTO_DEMO_WIDTH").and_then(|v| v.parse().ok()) {
            opts.width = n;
        }
        if let Some(n) = lookup("BENTO_DEMO_HEIGHT").and_then(|v| v.parse().ok()) {
            opts.height = n;
        }
        if let Some(n) = lookup("BENTO_DEMO_SPACING").and_then(|v| v.parse().ok()) {
            opts.spacing = n;
        }
        if let Some(n) = lookup("BENTO_DEMO_ITEMS").and_then(|v| v.parse().ok()) {
            opts.items = n;
        }
        if let Some(axis) = lookup("BENTO_DEMO_AXIS").and_then(|v| v.parse().ok()) {
            opts.axis = axis;
        }
        if let Some(path) = lookup("BENTO_DEMO_TREE") {
            opts.tree = Some(PathBuf::from(path));
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Parsed::Help),
                "--version" | "-V" => return Ok(Parsed::Version),
                "--json" => opts.json = true,
                other => {
                    if let Some(val) = other.strip_prefix("--width=") {
                        opts.width = parse_value("--width", val)?;
                    } else if let Some(val) = other.strip_prefix("--height=") {
                        opts.height = parse_value("--height", val)?;
                    } else if let Some(val) = other.strip_prefix("--spacing=") {
                        opts.spacing = parse_value("--spacing", val)?;
                    } else if let Some(val) = other.strip_prefix("--items=") {
                        opts.items = parse_value("--items", val)?;
                    } else if let Some(val) = other.strip_prefix("--axis=") {
                        opts.axis = val.parse()?;
                    } else if let Some(val) = other.strip_prefix("--tree=") {
                        opts.tree = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--remove=") {
                        opts.remove = val
                            .split(',')
                            .filter(|part| !part.is_empty())
                            .map(|part| parse_value::<usize>("--remove", part))
                            .collect::<Result<_, _>>()?;
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }

        Ok(Parsed::Run(opts))
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, val: &str) -> Result<T, String> {
    val.parse()
        .map_err(|_| format!("Invalid {flag} value: {val}"))
}
