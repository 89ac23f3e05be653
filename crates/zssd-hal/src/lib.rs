//! zssd Hardware Abstraction Layer (HAL).
//!
//! External commands and sysfs reads go through this crate so the pool check
//! can be tested without an imported pool or real disks.

pub mod hal;
pub mod path;
pub mod sysfs;

pub use hal::{FakeCommand, FakeHal, LinuxHal, Operation, ProcessOps};
pub use path::{strip_partition_suffix, SuffixPolicy};
pub use zssd_error::{HalError, HalResult};
