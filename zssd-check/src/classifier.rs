//! Pool-level orchestration: status → devices → base disks → classification.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use zssd_error::CheckResult;

use crate::config::CheckConfig;
use crate::parser::parse_device_paths;
use crate::resolver::DiskResolver;
use crate::rotational::RotationalClassifier;
use crate::status::PoolStatusProvider;

/// Classification of one base disk backing a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskClass {
    pub disk: PathBuf,
    pub rotational: bool,
}

/// `true` unless at least one disk is rotational. Vacuously `true` for no disks.
pub fn all_solid_state<I: IntoIterator<Item = bool>>(rotational: I) -> bool {
    !rotational.into_iter().any(|r| r)
}

pub struct PoolChecker<S> {
    status: S,
    resolver: DiskResolver,
    classifier: RotationalClassifier,
    timeout: Option<Duration>,
}

impl<S: PoolStatusProvider> PoolChecker<S> {
    pub fn new(status: S, config: &CheckConfig) -> Self {
        let resolver = config.resolver();
        let classifier = RotationalClassifier::new(config.sys_block_root(), resolver.clone());
        Self {
            status,
            resolver,
            classifier,
            timeout: config.timeout,
        }
    }

    /// Distinct base disks of every device listed for `pool`.
    pub fn base_disks(&self, pool: &str) -> CheckResult<BTreeSet<PathBuf>> {
        let status = self.status.fetch(pool, self.timeout)?;
        let devices = parse_device_paths(&status);
        log::debug!("pool {}: {} device line(s)", pool, devices.len());

        devices
            .iter()
            .map(|dev| self.resolver.base_disk(Path::new(dev)))
            .collect()
    }

    /// Rotational flag of every base disk of `pool`. Any failure aborts the whole report.
    pub fn disk_report(&self, pool: &str) -> CheckResult<Vec<DiskClass>> {
        self.base_disks(pool)?
            .into_iter()
            .map(|disk| -> CheckResult<DiskClass> {
                let rotational = self.classifier.is_rotational(&disk)?;
                log::info!(
                    "{}: {}",
                    disk.display(),
                    if rotational { "rotational" } else { "solid-state" }
                );
                Ok(DiskClass { disk, rotational })
            })
            .collect()
    }

    pub fn is_pure_solid_state(&self, pool: &str) -> CheckResult<bool> {
        let report = self.disk_report(pool)?;
        Ok(all_solid_state(report.iter().map(|d| d.rotational)))
    }
}

/// The single line printed on success.
pub fn summary_line(pure_solid_state: bool) -> String {
    format!(
        "Pool contains only SSD: {}",
        if pure_solid_state { "True" } else { "False" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{ZpoolStatus, ZPOOL};
    use std::fs;
    use tempfile::{tempdir, TempDir};
    use zssd_error::CheckError;
    use zssd_hal::{FakeCommand, FakeHal, SuffixPolicy};

    /// Builds a fake `/dev` + `/sys/block` tree and a config rooted at it.
    fn host(devices: &[&str], flags: &[(&str, &str)]) -> (TempDir, CheckConfig) {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("dev")).unwrap();
        for dev in devices {
            fs::write(tmp.path().join("dev").join(dev), "").unwrap();
        }
        for (disk, value) in flags {
            let queue = tmp.path().join("sys/block").join(disk).join("queue");
            fs::create_dir_all(&queue).unwrap();
            fs::write(queue.join("rotational"), value).unwrap();
        }
        let config = CheckConfig {
            root: tmp.path().to_path_buf(),
            ..CheckConfig::default()
        };
        (tmp, config)
    }

    fn zpool(stdout: &str) -> FakeHal {
        let hal = FakeHal::new();
        hal.script(ZPOOL, FakeCommand::success(stdout));
        hal
    }

    const MIRROR: &str = "\
  pool: tank
 state: ONLINE
config:

\tNAME          STATE     READ WRITE CKSUM
\ttank          ONLINE       0     0     0
\t  mirror-0    ONLINE       0     0     0
\t    /dev/sda1 ONLINE       0     0     0
\t    /dev/sda9 ONLINE       0     0     0
\t    /dev/sdb1 ONLINE       0     0     0

errors: No known data errors
";

    #[test]
    fn all_solid_state_aggregates() {
        assert!(all_solid_state([false, false]));
        assert!(!all_solid_state([true, false]));
        assert!(all_solid_state(std::iter::empty()));
    }

    #[test]
    fn partitions_collapse_to_distinct_base_disks() {
        let (_tmp, config) = host(&["sda", "sda1", "sda9", "sdb", "sdb1"], &[]);
        let hal = zpool(MIRROR);
        let checker = PoolChecker::new(ZpoolStatus::new(&hal, ZPOOL), &config);

        let disks: Vec<_> = checker.base_disks("tank").unwrap().into_iter().collect();
        assert_eq!(disks, vec![PathBuf::from("/dev/sda"), PathBuf::from("/dev/sdb")]);
    }

    #[test]
    fn ssd_only_pool_is_pure() {
        let (_tmp, config) = host(
            &["sda", "sda1", "sda9", "sdb", "sdb1"],
            &[("sda", "0\n"), ("sdb", "0\n")],
        );
        let hal = zpool(MIRROR);
        let checker = PoolChecker::new(ZpoolStatus::new(&hal, ZPOOL), &config);
        assert!(checker.is_pure_solid_state("tank").unwrap());
    }

    #[test]
    fn one_spinning_disk_taints_pool() {
        let (_tmp, config) = host(
            &["sda", "sda1", "sda9", "sdb", "sdb1"],
            &[("sda", "1\n"), ("sdb", "0\n")],
        );
        let hal = zpool(MIRROR);
        let checker = PoolChecker::new(ZpoolStatus::new(&hal, ZPOOL), &config);

        assert!(!checker.is_pure_solid_state("tank").unwrap());
        let report = checker.disk_report("tank").unwrap();
        assert_eq!(
            report,
            vec![
                DiskClass {
                    disk: PathBuf::from("/dev/sda"),
                    rotational: true
                },
                DiskClass {
                    disk: PathBuf::from("/dev/sdb"),
                    rotational: false
                },
            ]
        );
    }

    #[test]
    fn empty_device_list_is_vacuously_pure() {
        let (_tmp, config) = host(&[], &[]);
        let hal = zpool("  pool: tank\n state: ONLINE\n");
        let checker = PoolChecker::new(ZpoolStatus::new(&hal, ZPOOL), &config);
        assert!(checker.is_pure_solid_state("tank").unwrap());
    }

    #[test]
    fn failures_abort_the_whole_check() {
        let (_tmp, config) = host(&["sda", "sda1", "sda9", "sdb", "sdb1"], &[("sda", "0\n")]);
        let hal = zpool(MIRROR);
        let checker = PoolChecker::new(ZpoolStatus::new(&hal, ZPOOL), &config);

        let err = checker.is_pure_solid_state("tank").unwrap_err();
        assert!(matches!(err, CheckError::DeviceMetadataNotFound { .. }));
    }

    #[test]
    fn query_failure_propagates_unmodified() {
        let (_tmp, config) = host(&[], &[]);
        let hal = FakeHal::new();
        hal.script(ZPOOL, FakeCommand::failure(1, "cannot open 'ghost': no such pool"));
        let checker = PoolChecker::new(ZpoolStatus::new(&hal, ZPOOL), &config);

        let err = checker.is_pure_solid_state("ghost").unwrap_err();
        assert!(matches!(err, CheckError::PoolQueryFailed { .. }));
    }

    #[test]
    fn configured_timeout_reaches_the_provider() {
        let (_tmp, mut config) = host(&[], &[]);
        config.timeout = Some(Duration::from_secs(7));
        let hal = FakeHal::new();
        hal.script(ZPOOL, FakeCommand::Timeout);
        let checker = PoolChecker::new(ZpoolStatus::new(&hal, ZPOOL), &config);

        let err = checker.is_pure_solid_state("tank").unwrap_err();
        assert!(matches!(err, CheckError::Timeout { timeout_secs: 7, .. }));
    }

    #[test]
    fn partition_aware_policy_classifies_nvme() {
        let (_tmp, mut config) = host(&["nvme0n1", "nvme0n1p1"], &[("nvme0n1", "0\n")]);
        config.suffix_policy = SuffixPolicy::PartitionAware;
        let hal = zpool("\t/dev/nvme0n1p1  ONLINE  0 0 0\n");
        let checker = PoolChecker::new(ZpoolStatus::new(&hal, ZPOOL), &config);
        assert!(checker.is_pure_solid_state("fast").unwrap());
    }

    #[test]
    fn summary_line_uses_capitalized_booleans() {
        assert_eq!(summary_line(true), "Pool contains only SSD: True");
        assert_eq!(summary_line(false), "Pool contains only SSD: False");
    }
}
