//! Process execution helpers.
//!
//! External commands are considered "world-touching" and must go through the HAL so we can
//! test the pool check without spawning real processes.

use crate::HalResult;
use std::process::Output;
use std::time::Duration;

/// Process execution trait (external command runner).
pub trait ProcessOps {
    /// Run `program` with `args` and collect its output.
    ///
    /// `timeout: None` waits for the child indefinitely. When the limit is hit the child is
    /// killed and reaped, and `HalError::CommandTimeout` is returned. A non-zero exit is
    /// *not* an error here; callers inspect `Output::status`.
    fn command_output(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> HalResult<Output>;
}

impl<T: ProcessOps + ?Sized> ProcessOps for &T {
    fn command_output(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> HalResult<Output> {
        (**self).command_output(program, args, timeout)
    }
}
