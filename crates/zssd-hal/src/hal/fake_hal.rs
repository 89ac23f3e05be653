//! Fake HAL implementation for testing.
//!
//! This implementation records all commands without executing them and replays
//! scripted results, allowing CI-safe testing without ZFS or real hardware.

use super::ProcessOps;
use crate::{HalError, HalResult};
use std::collections::HashMap;
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Operation records for testing and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Command {
        program: String,
        args: Vec<String>,
        timeout_secs: Option<u64>,
    },
}

/// Scripted result for a program run through [`FakeHal`].
#[derive(Debug, Clone)]
pub enum FakeCommand {
    Exit {
        code: i32,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },
    /// Behaves as if the timeout elapsed, regardless of whether one was requested.
    Timeout,
    NotFound,
}

impl FakeCommand {
    pub fn success(stdout: impl Into<Vec<u8>>) -> Self {
        FakeCommand::Exit {
            code: 0,
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        FakeCommand::Exit {
            code,
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }
}

/// Shared state for FakeHal operations.
#[derive(Debug, Default)]
struct FakeHalState {
    /// All operations that were recorded
    operations: Vec<Operation>,
    /// Scripted results keyed by program name
    scripted: HashMap<String, FakeCommand>,
}

/// Fake HAL implementation that records operations without executing them.
///
/// Unscripted programs succeed with empty output.
#[derive(Debug, Clone, Default)]
pub struct FakeHal {
    state: Arc<Mutex<FakeHalState>>,
}

impl FakeHal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the result returned for every run of `program`.
    pub fn script(&self, program: &str, result: FakeCommand) -> &Self {
        self.lock().scripted.insert(program.to_string(), result);
        self
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<Operation> {
        self.lock().operations.clone()
    }

    /// Get the number of operations recorded.
    pub fn operation_count(&self) -> usize {
        self.lock().operations.len()
    }

    /// Clear all recorded operations.
    pub fn clear(&self) {
        self.lock().operations.clear();
    }

    fn lock(&self) -> MutexGuard<'_, FakeHalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw((code & 0xff) << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

impl ProcessOps for FakeHal {
    fn command_output(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> HalResult<Output> {
        let scripted = {
            let mut state = self.lock();
            state.operations.push(Operation::Command {
                program: program.to_string(),
                args: args.iter().map(|s| s.to_string()).collect(),
                timeout_secs: timeout.map(|t| t.as_secs()),
            });
            state.scripted.get(program).cloned()
        };
        log::info!("FAKE HAL: {} {}", program, args.join(" "));

        match scripted.unwrap_or_else(|| FakeCommand::success(Vec::<u8>::new())) {
            FakeCommand::Exit {
                code,
                stdout,
                stderr,
            } => Ok(Output {
                status: exit_status(code),
                stdout,
                stderr,
            }),
            FakeCommand::Timeout => Err(HalError::CommandTimeout {
                program: program.to_string(),
                timeout_secs: timeout.map(|t| t.as_secs()).unwrap_or_default(),
            }),
            FakeCommand::NotFound => Err(HalError::CommandNotFound(program.to_string())),
        }
    }
}
