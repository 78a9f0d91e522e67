//! canvas-flow CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing::Level;

use canvas_flow::{CanvasError, OutputFormat, RenderConfig, render_canvas};

/// Render a canvas document as a linear top-to-bottom flow.
#[derive(Parser, Debug)]
#[command(
    name = "canvas-flow",
    version = env!("CANVAS_FLOW_VERSION"),
    about = "Render a canvas document as a linear top-to-bottom flow"
)]
struct Cli {
    /// Input .canvas file (reads from stdin if not provided)
    input: Option<String>,

    /// Folder prefix to strip from file paths (e.g. the canvas' own folder)
    #[arg(short = 'r', long = "root-folder")]
    root_folder: Option<String>,

    /// Output format (html, json)
    #[arg(short = 'f', long = "format", default_value = "html")]
    format: String,

    /// Page title for HTML output
    #[arg(short = 't', long = "title")]
    title: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Log ordering decisions to stderr
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let format: OutputFormat = match cli.format.parse() {
        Ok(f) => f,
        Err(e) => fail(e),
    };

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(source) => fail(CanvasError::Io {
                path: path.into(),
                source,
            }),
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(format!("cannot read stdin: {}", e));
        }
        buf
    };

    let config = RenderConfig {
        root_folder: cli.root_folder.clone(),
        format,
        title: cli.title.clone(),
    };
    let rendered = match render_canvas(&text, &config) {
        Ok(s) => s,
        Err(e) => fail(e),
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
