//! Print the os-release variables of this system (or of a root directory
//! given as the first argument).
//!
//! Set `RUST_LOG=osrel_core=debug` to see which files were tried.

use std::process::ExitCode;

use osrel_core::{InvalidValue, OsRelease, ReadOptions};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let root = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let options = match std::env::var("OSREL_SKIP_INVALID") {
        Ok(_) => ReadOptions::new().invalid_value(InvalidValue::Skip),
        Err(_) => ReadOptions::new(),
    };

    match OsRelease::load_from_root_with(&root, &options) {
        Ok(Some(osrel)) => {
            let mut vars: Vec<_> = osrel.iter().collect();
            vars.sort();
            for (variable, value) in vars {
                println!("{}={:?}", variable, value);
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("no os-release file below {}", root);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
