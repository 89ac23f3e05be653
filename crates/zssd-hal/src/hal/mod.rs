//! HAL trait definitions and implementations.
//!
//! `LinuxHal` spawns real processes; `FakeHal` replays scripted results.

pub mod fake_hal;
pub mod linux_hal;
pub mod process_ops;

pub use fake_hal::{FakeCommand, FakeHal, Operation};
pub use linux_hal::LinuxHal;
pub use process_ops::ProcessOps;
