//! Helpers related to block devices in sysfs.

use crate::{HalError, HalResult};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Default location of per-disk sysfs directories.
pub const SYS_BLOCK: &str = "/sys/block";

pub fn device_basename(path: &Path) -> HalResult<String> {
    let name = path
        .file_name()
        .ok_or_else(|| HalError::InvalidDevicePath(path.to_path_buf()))?
        .to_string_lossy()
        .to_string();
    Ok(name)
}

/// Location of the rotational flag for `device`: `<sys_block_root>/<dev>/queue/rotational`.
pub fn rotational_flag_path(sys_block_root: &Path, device: &Path) -> HalResult<PathBuf> {
    let name = device_basename(device)?;
    Ok(sys_block_root.join(name).join("queue").join("rotational"))
}

/// Reads the first character of a sysfs attribute; `None` when the file is empty.
pub fn read_first_char(path: &Path) -> HalResult<Option<char>> {
    let mut buf = [0u8; 4];
    let n = File::open(path)?.read(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf[..n]).chars().next())
}
