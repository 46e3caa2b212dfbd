//! edm-mindmap CLI entry point.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use edm_mindmap::{RenderConfig, config, generate};

/// Generate a radial mind map of the EDM paper landscape.
#[derive(Parser, Debug)]
#[command(name = "edm-mindmap", about = "Generate EDM paper mind map")]
struct Cli {
    /// Output image file (.png, or .svg for a vector document)
    #[arg(long = "output", default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Path to the paper catalogue
    #[arg(long = "yaml", default_value = config::DEFAULT_INPUT)]
    yaml: PathBuf,
}

fn setup_logging() {
    // RUST_LOG controls verbosity; quiet by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging();

    let config = RenderConfig::new().with_input(cli.yaml).with_output(cli.output);
    match generate(&config) {
        Ok(path) => println!("Mind map saved to: {}", path.display()),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
