use std::fs::File;
use std::io::{self, BufReader};

use tracing::debug;
use tracing_subscriber::EnvFilter;
use transit_registry::TransitRegistry;
use transit_registry::repl::{ReplConfig, run};

fn main() {
    // RUST_LOG controls verbosity; logs go to stderr so command output
    // on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut registry = TransitRegistry::new();

    match std::env::args().nth(1) {
        Some(path) => {
            debug!(path = %path, "executing command file");
            let file = File::open(&path).expect("Failed to open command file");
            let config = ReplConfig {
                echo: true,
                ..ReplConfig::default()
            };
            run(&mut registry, &config, BufReader::new(file), io::stdout())
                .expect("Failed to run command file");
        }
        None => {
            println!("Transit registry. Type `help` for commands, `quit` to exit.");
            let config = ReplConfig::default();
            run(&mut registry, &config, io::stdin().lock(), io::stdout())
                .expect("Failed to run interactive session");
        }
    }
}
