use std::path::PathBuf;
use std::time::Duration;
use zssd_hal::sysfs::block::SYS_BLOCK;
use zssd_hal::SuffixPolicy;

use crate::cli::Cli;
use crate::resolver::DiskResolver;
use crate::status::ZPOOL;

/// Runtime settings for one pool check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Status command program (`zpool`).
    pub zpool_program: String,
    /// Bound on the status query; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Filesystem root that `/dev` and `/sys` are resolved under.
    pub root: PathBuf,
    pub suffix_policy: SuffixPolicy,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            zpool_program: ZPOOL.to_string(),
            timeout: None,
            root: PathBuf::from("/"),
            suffix_policy: SuffixPolicy::Digits,
        }
    }
}

impl CheckConfig {
    pub fn sys_block_root(&self) -> PathBuf {
        self.root.join(SYS_BLOCK.trim_start_matches('/'))
    }

    pub fn resolver(&self) -> DiskResolver {
        DiskResolver::new(self.root.clone(), self.suffix_policy)
    }
}

impl From<&Cli> for CheckConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            zpool_program: cli.zpool_bin.clone(),
            timeout: cli
                .timeout
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            root: cli.root.clone(),
            suffix_policy: if cli.partition_aware {
                SuffixPolicy::PartitionAware
            } else {
                SuffixPolicy::Digits
            },
        }
    }
}
