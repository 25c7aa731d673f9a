//! Starfield viewer.
//!
//! Usage: `starfield [config.json]`

use std::env;
use std::process::ExitCode;

use starfield::StarfieldConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args_os().nth(1) {
        Some(path) => match StarfieldConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}: {}", path.to_string_lossy(), e);
                return ExitCode::FAILURE;
            }
        },
        None => StarfieldConfig::default(),
    };

    match starfield::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
