//! The partition-suffix heuristic used to derive base disk paths.

use std::path::{Path, PathBuf};

/// How a trailing partition number is removed from a device path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuffixPolicy {
    /// Strip the maximal trailing run of decimal digits.
    ///
    /// Whole-disk names that end in a digit (`nvme0n1`, `mmcblk0`) lose it too.
    #[default]
    Digits,
    /// nvme/mmcblk devices only lose a `p<N>` suffix; everything else behaves like `Digits`.
    PartitionAware,
}

/// Removes the partition suffix from `path` according to `policy`.
///
/// Paths that are not valid UTF-8 are returned unchanged.
pub fn strip_partition_suffix(path: &Path, policy: SuffixPolicy) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };
    let stripped = match policy {
        SuffixPolicy::Digits => trim_digits(raw),
        SuffixPolicy::PartitionAware => strip_p_suffix(raw),
    };
    PathBuf::from(stripped)
}

fn uses_p_separator(name: &str) -> bool {
    name.contains("nvme") || name.contains("mmcblk")
}

fn trim_digits(raw: &str) -> &str {
    raw.trim_end_matches(|c: char| c.is_ascii_digit())
}

fn strip_p_suffix(raw: &str) -> &str {
    let name = raw.rsplit('/').next().unwrap_or(raw);
    if !uses_p_separator(name) {
        return trim_digits(raw);
    }
    let without_digits = trim_digits(raw);
    if without_digits.len() == raw.len() {
        return raw;
    }
    match without_digits.strip_suffix('p') {
        Some(base) if base.ends_with(|c: char| c.is_ascii_digit()) => base,
        _ => raw,
    }
}
