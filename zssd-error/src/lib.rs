use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type HalResult<T> = Result<T, HalError>;
pub type CheckResult<T> = Result<T, CheckError>;

#[derive(Error, Debug)]
pub enum HalError {
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// `timeout_secs` is the limit truncated to whole seconds.
    #[error("Command timed out: {program} after {timeout_secs}s")]
    CommandTimeout { program: String, timeout_secs: u64 },

    #[error("Invalid device path: {0}")]
    InvalidDevicePath(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Hal(#[from] HalError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid pool name {0:?}")]
    InvalidArgument(String),

    #[error("zpool status command did not return in time ({timeout_secs}s) for pool \"{pool}\"")]
    Timeout { pool: String, timeout_secs: u64 },

    #[error("zpool status command did not return successfully for pool \"{pool}\". Does pool exist?")]
    PoolQueryFailed { pool: String },

    #[error("zpool status output for pool \"{pool}\" is not valid UTF-8")]
    Encoding {
        pool: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Device path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Could not find file {} for device {}", .flag.display(), .device.display())]
    DeviceMetadataNotFound { device: PathBuf, flag: PathBuf },

    #[error("Unknown value {content:?} in {}", .flag.display())]
    UnrecognizedDeviceFlag { flag: PathBuf, content: String },
}
