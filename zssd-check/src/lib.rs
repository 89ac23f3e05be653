//! Checks whether every disk backing a ZFS pool is solid-state.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod logging;
pub mod parser;
pub mod resolver;
pub mod rotational;
pub mod status;

pub use classifier::{all_solid_state, summary_line, DiskClass, PoolChecker};
pub use config::CheckConfig;
pub use status::{PoolStatusProvider, ZpoolStatus};

use zssd_hal::LinuxHal;

/// Checks `cli.pool` against the live system.
pub fn run(cli: &cli::Cli) -> anyhow::Result<bool> {
    let config = CheckConfig::from(cli);
    log::debug!("config: {:?}", config);

    let status = ZpoolStatus::new(LinuxHal::new(), config.zpool_program.clone());
    let checker = PoolChecker::new(status, &config);
    Ok(checker.is_pure_solid_state(&cli.pool)?)
}
