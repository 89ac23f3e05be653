//! Partition / symlink path → base disk path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zssd_error::{CheckError, CheckResult};
use zssd_hal::{strip_partition_suffix, SuffixPolicy};

/// Resolves device paths to their base disk under a filesystem root.
///
/// Device paths are always expressed as seen from inside `root` (e.g. `/dev/sda1`);
/// `root` is `/` outside of chroots and tests.
#[derive(Debug, Clone)]
pub struct DiskResolver {
    root: PathBuf,
    policy: SuffixPolicy,
}

impl Default for DiskResolver {
    fn default() -> Self {
        Self::new("/", SuffixPolicy::default())
    }
}

impl DiskResolver {
    pub fn new(root: impl Into<PathBuf>, policy: SuffixPolicy) -> Self {
        Self {
            root: root.into(),
            policy,
        }
    }

    /// Follows every symlink of `device` and returns the absolute canonical path.
    pub fn canonical(&self, device: &Path) -> CheckResult<PathBuf> {
        let host = if device.is_absolute() {
            self.root.join(device.strip_prefix("/").unwrap_or(device))
        } else {
            device.to_path_buf()
        };

        let resolved = fs::canonicalize(&host).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => CheckError::PathNotFound(device.to_path_buf()),
            _ => CheckError::Io(err),
        })?;
        let root = fs::canonicalize(&self.root)?;

        Ok(match resolved.strip_prefix(&root) {
            Ok(inside) => Path::new("/").join(inside),
            Err(_) => resolved,
        })
    }

    /// Canonicalizes `device` and removes its partition suffix.
    ///
    /// A missing path that carries no partition suffix is already a base disk name
    /// (possibly one produced by an earlier stripping) and is returned unchanged.
    pub fn base_disk(&self, device: &Path) -> CheckResult<PathBuf> {
        let canonical = match self.canonical(device) {
            Ok(path) => path,
            Err(CheckError::PathNotFound(missing))
                if strip_partition_suffix(&missing, self.policy) == missing =>
            {
                return Ok(missing);
            }
            Err(err) => return Err(err),
        };
        let base = strip_partition_suffix(&canonical, self.policy);
        log::debug!(
            "{} -> {} -> base disk {}",
            device.display(),
            canonical.display(),
            base.display()
        );
        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::symlink;
    use tempfile::tempdir;

    fn dev_tree(names: &[&str]) -> tempfile::TempDir {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("dev/disk/by-id")).unwrap();
        for name in names {
            fs::write(tmp.path().join("dev").join(name), "").unwrap();
        }
        tmp
    }

    #[test]
    fn partition_resolves_to_parent_disk() {
        let tmp = dev_tree(&["sda", "sda1"]);
        let resolver = DiskResolver::new(tmp.path(), SuffixPolicy::Digits);
        assert_eq!(
            resolver.base_disk(Path::new("/dev/sda1")).unwrap(),
            PathBuf::from("/dev/sda")
        );
    }

    #[test]
    fn symlinks_are_followed_before_stripping() {
        let tmp = dev_tree(&["sdb", "sdb2"]);
        symlink("../../sdb2", tmp.path().join("dev/disk/by-id/ata-WDC_WD40-part2")).unwrap();
        let resolver = DiskResolver::new(tmp.path(), SuffixPolicy::Digits);

        assert_eq!(
            resolver
                .base_disk(Path::new("/dev/disk/by-id/ata-WDC_WD40-part2"))
                .unwrap(),
            PathBuf::from("/dev/sdb")
        );
    }

    #[test]
    fn base_disk_is_idempotent() {
        let tmp = dev_tree(&["sda", "sda1", "sdc", "sdc12"]);
        let resolver = DiskResolver::new(tmp.path(), SuffixPolicy::Digits);
        for dev in ["/dev/sda1", "/dev/sda", "/dev/sdc12"] {
            let once = resolver.base_disk(Path::new(dev)).unwrap();
            let twice = resolver.base_disk(&once).unwrap();
            assert_eq!(once, twice, "{dev}");
        }
    }

    #[test]
    fn digits_policy_mangles_nvme_namespace() {
        let tmp = dev_tree(&["nvme0n1", "nvme0n1p1"]);
        let resolver = DiskResolver::new(tmp.path(), SuffixPolicy::Digits);
        assert_eq!(
            resolver.base_disk(Path::new("/dev/nvme0n1p1")).unwrap(),
            PathBuf::from("/dev/nvme0n1p")
        );
    }

    #[test]
    fn digits_policy_base_disk_is_idempotent_for_nvme() {
        let tmp = dev_tree(&["nvme0n1", "nvme0n1p1"]);
        let resolver = DiskResolver::new(tmp.path(), SuffixPolicy::Digits);
        let once = resolver.base_disk(Path::new("/dev/nvme0n1p1")).unwrap();
        assert_eq!(resolver.base_disk(&once).unwrap(), once);
    }

    #[test]
    fn missing_suffix_free_path_passes_through() {
        let tmp = dev_tree(&[]);
        let resolver = DiskResolver::new(tmp.path(), SuffixPolicy::Digits);
        assert_eq!(
            resolver.base_disk(Path::new("/dev/sdz")).unwrap(),
            PathBuf::from("/dev/sdz")
        );
    }

    #[test]
    fn partition_aware_policy_keeps_nvme_namespace() {
        let tmp = dev_tree(&["nvme0n1", "nvme0n1p1"]);
        let resolver = DiskResolver::new(tmp.path(), SuffixPolicy::PartitionAware);
        let base = resolver.base_disk(Path::new("/dev/nvme0n1p1")).unwrap();
        assert_eq!(base, PathBuf::from("/dev/nvme0n1"));
        assert_eq!(resolver.base_disk(&base).unwrap(), base);
    }

    #[test]
    fn missing_device_is_path_not_found() {
        let tmp = dev_tree(&[]);
        let resolver = DiskResolver::new(tmp.path(), SuffixPolicy::Digits);
        let err = resolver.base_disk(Path::new("/dev/sdz1")).unwrap_err();
        assert!(matches!(err, CheckError::PathNotFound(p) if p == Path::new("/dev/sdz1")));
    }

    #[test]
    fn host_root_resolves_real_paths() {
        let resolver = DiskResolver::default();
        assert_eq!(
            resolver.canonical(Path::new("/dev/null")).unwrap(),
            PathBuf::from("/dev/null")
        );
    }
}
