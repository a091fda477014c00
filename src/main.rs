//! CLI entry point for argsof

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::info;

use argsof::file_utils::{read_source_file, read_source_stdin, set_max_file_size};
use argsof::{OutputConfig, ParameterFormatter, ReadError, Shape, ShapeConfig, create, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "argsof")]
#[command(about = "Print the declared parameters of a JavaScript function, arrow function or class")]
#[command(version)]
struct Args {
    /// File holding the callable's source, starting at the declaration
    /// (reads standard input when omitted or "-")
    path: Option<PathBuf>,

    /// Recognise arrow functions
    #[arg(long)]
    arrow: bool,

    /// Recognise class constructors
    #[arg(long)]
    class: bool,

    /// Recognise `function` declarations
    /// (with none of --arrow, --class, --regular every shape is recognised)
    #[arg(long)]
    regular: bool,

    /// Output in JSON format, including the matched shape
    #[arg(long)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Maximum input size (default: 1MB). Use suffixes: K, M, G (e.g., 5M for 5MB)
    #[arg(long = "max-file-size", value_name = "SIZE")]
    max_file_size: Option<String>,
}

impl Args {
    /// Shape flags as a config; `None` when no flag was given.
    fn shape_config(&self) -> Option<ShapeConfig> {
        let config = ShapeConfig {
            arrow: self.arrow,
            class: self.class,
            regular: self.regular,
        };
        config.any_enabled().then_some(config)
    }
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size too large: {}", s))
}

fn read_input(path: Option<&PathBuf>) -> Result<String, ReadError> {
    match path {
        Some(path) if path.as_os_str() != "-" => read_source_file(path),
        _ => read_source_stdin(std::io::stdin().lock()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(ref size_str) = args.max_file_size {
        match parse_file_size(size_str) {
            Ok(size) => set_max_file_size(size),
            Err(e) => {
                eprintln!("argsof: invalid --max-file-size '{}': {}", size_str, e);
                process::exit(1);
            }
        }
    }

    let source = read_input(args.path.as_ref()).unwrap_or_else(|e| {
        eprintln!("argsof: {}", e);
        process::exit(1);
    });

    let extractor = create(args.shape_config());
    let signature = extractor.inspect(source.as_str());
    match signature.shape {
        Some(shape) => info!("recognised {} callable", shape),
        None => info!(
            "no callable recognised with shapes [{}]",
            extractor
                .config()
                .enabled_shapes()
                .map(Shape::name)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }

    let result = if args.json {
        print_json(&signature)
    } else {
        let formatter = ParameterFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
        });
        formatter.print(&signature.parameters)
    };

    if let Err(e) = result {
        eprintln!("argsof: error writing output: {}", e);
        process::exit(1);
    }
}
