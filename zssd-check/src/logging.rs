use env_logger::Target;
use log::LevelFilter;

/// Logs go to stderr; stdout carries only the result line. `RUST_LOG` overrides `verbosity`.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .target(Target::Stderr)
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
