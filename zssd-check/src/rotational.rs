//! Rotational vs. solid-state classification from sysfs.

use std::path::{Path, PathBuf};
use zssd_error::{CheckError, CheckResult};
use zssd_hal::sysfs::block::{read_first_char, rotational_flag_path};

use crate::resolver::DiskResolver;

/// The flag path is looked up for the given disk and, if missing, once more for its base disk.
const MAX_ATTEMPTS: usize = 2;

#[derive(Debug, Clone)]
pub struct RotationalClassifier {
    sys_block_root: PathBuf,
    resolver: DiskResolver,
}

impl RotationalClassifier {
    pub fn new(sys_block_root: impl Into<PathBuf>, resolver: DiskResolver) -> Self {
        Self {
            sys_block_root: sys_block_root.into(),
            resolver,
        }
    }

    /// `true` for spinning disks, `false` for solid-state ones.
    pub fn is_rotational(&self, disk: &Path) -> CheckResult<bool> {
        let mut device = disk.to_path_buf();
        let mut flag = rotational_flag_path(&self.sys_block_root, &device)?;

        for attempt in 1..=MAX_ATTEMPTS {
            if flag.exists() {
                return read_rotational_flag(&flag);
            }
            if attempt == MAX_ATTEMPTS {
                break;
            }

            // Maybe not the base block device yet.
            let parent = match self.resolver.base_disk(&device) {
                Ok(parent) => parent,
                Err(CheckError::PathNotFound(_)) => break,
                Err(err) => return Err(err),
            };
            if parent == device {
                break;
            }
            log::debug!(
                "{} missing, retrying with {}",
                flag.display(),
                parent.display()
            );
            flag = rotational_flag_path(&self.sys_block_root, &parent)?;
            device = parent;
        }

        Err(CheckError::DeviceMetadataNotFound { device, flag })
    }
}

/// Decodes a `queue/rotational` attribute: `1` rotational, `0` solid-state.
pub fn read_rotational_flag(flag: &Path) -> CheckResult<bool> {
    match read_first_char(flag)? {
        Some('1') => Ok(true),
        Some('0') => Ok(false),
        other => Err(CheckError::UnrecognizedDeviceFlag {
            flag: flag.to_path_buf(),
            content: other.map(String::from).unwrap_or_default(),
        }),
    }
}
