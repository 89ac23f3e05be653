//! sysfs helpers.

pub mod block;
