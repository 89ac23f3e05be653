//! CLI argument parsing for zssd

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zssd")]
#[command(about = "Checks if a given pool consists only of non rotating drives")]
pub struct Cli {
    /// ZFS pool to check. Given pool must already be imported.
    #[arg(value_name = "POOL")]
    pub pool: String,

    /// Give up on `zpool status` after this many seconds (0 = wait forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Program used to query pool status
    #[arg(long, value_name = "PATH", default_value = "zpool")]
    pub zpool_bin: String,

    /// Filesystem root holding /dev and /sys (for chroots)
    #[arg(long, value_name = "DIR", default_value = "/")]
    pub root: PathBuf,

    /// Keep whole-disk names ending in a digit (nvme0n1, mmcblk0) intact
    #[arg(long)]
    pub partition_aware: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
