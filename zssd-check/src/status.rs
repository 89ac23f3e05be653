//! `zpool status` invocation.

use std::time::Duration;
use zssd_error::{CheckError, CheckResult, HalError};
use zssd_hal::ProcessOps;

/// Default status command program.
pub const ZPOOL: &str = "zpool";

/// Source of raw pool status text.
pub trait PoolStatusProvider {
    /// Returns the status report for `pool`. `timeout: None` waits indefinitely.
    fn fetch(&self, pool: &str, timeout: Option<Duration>) -> CheckResult<String>;
}

impl<T: PoolStatusProvider + ?Sized> PoolStatusProvider for &T {
    fn fetch(&self, pool: &str, timeout: Option<Duration>) -> CheckResult<String> {
        (**self).fetch(pool, timeout)
    }
}

/// Runs `<program> status -P <pool>` through the HAL.
#[derive(Debug, Clone)]
pub struct ZpoolStatus<P> {
    hal: P,
    program: String,
}

impl<P: ProcessOps> ZpoolStatus<P> {
    pub fn new(hal: P, program: impl Into<String>) -> Self {
        Self {
            hal,
            program: program.into(),
        }
    }
}

impl<P: ProcessOps> PoolStatusProvider for ZpoolStatus<P> {
    fn fetch(&self, pool: &str, timeout: Option<Duration>) -> CheckResult<String> {
        validate_pool_name(pool)?;
        // A zero budget means "no timeout".
        let timeout = timeout.filter(|t| !t.is_zero());

        let output = self
            .hal
            .command_output(&self.program, &["status", "-P", pool], timeout)
            .map_err(|err| match err {
                HalError::CommandTimeout { timeout_secs, .. } => CheckError::Timeout {
                    pool: pool.to_string(),
                    timeout_secs,
                },
                other => CheckError::Hal(other),
            })?;

        if !output.status.success() {
            log::debug!(
                "{} status -P {} exited with {:?}: {}",
                self.program,
                pool,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(CheckError::PoolQueryFailed {
                pool: pool.to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| CheckError::Encoding {
            pool: pool.to_string(),
            source,
        })
    }
}

/// Rejects names the status command could not take as a single pool argument.
pub fn validate_pool_name(pool: &str) -> CheckResult<()> {
    let bad = pool.is_empty()
        || pool.starts_with('-')
        || pool.chars().any(|c| c == '\0' || c.is_whitespace());
    if bad {
        return Err(CheckError::InvalidArgument(pool.to_string()));
    }
    Ok(())
}
