//! # Pedido Storefront Entry Point
//!
//! ## Usage
//! ```bash
//! # Defaults, or the platform config file if present
//! cargo run -p pedido-storefront
//!
//! # Explicit config file
//! cargo run -p pedido-storefront -- --config ./storefront.toml
//!
//! # Verbose logging
//! RUST_LOG=debug cargo run -p pedido-storefront
//! ```

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    eprintln!("--config needs a path");
                    return ExitCode::from(2);
                }
            }
            "--help" | "-h" => {
                println!("Pedido Storefront");
                println!();
                println!("Usage: pedido [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  Config file");
                println!("                       (default: $PEDIDO_CONFIG, then the platform config dir)");
                println!("  -h, --help           Show this help");
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                return ExitCode::from(2);
            }
        }
        i += 1;
    }

    pedido_storefront::init_tracing();

    match pedido_storefront::run(config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
