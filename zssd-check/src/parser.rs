//! Extracts device lines from `zpool status -P` output.
//!
//! A device line, after whitespace normalization, is exactly
//! `<path> <state> <read> <write> <cksum>`, with `<path>` under `/dev/`.
//! Headers, pool and vdev summary lines, and blank lines never match.

use std::fmt;
use std::str::FromStr;

/// Vdev state column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    Degraded,
    Faulted,
    Offline,
    Online,
    Removed,
    Unavail,
}

impl FromStr for DeviceState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEGRADED" => Ok(DeviceState::Degraded),
            "FAULTED" => Ok(DeviceState::Faulted),
            "OFFLINE" => Ok(DeviceState::Offline),
            "ONLINE" => Ok(DeviceState::Online),
            "REMOVED" => Ok(DeviceState::Removed),
            "UNAVAIL" => Ok(DeviceState::Unavail),
            other => Err(format!("unknown device state {other:?}")),
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceState::Degraded => "DEGRADED",
            DeviceState::Faulted => "FAULTED",
            DeviceState::Offline => "OFFLINE",
            DeviceState::Online => "ONLINE",
            DeviceState::Removed => "REMOVED",
            DeviceState::Unavail => "UNAVAIL",
        };
        f.write_str(s)
    }
}

/// READ / WRITE / CKSUM error counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorCounters {
    pub read: u64,
    pub write: u64,
    pub checksum: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub path: String,
    pub state: DeviceState,
    pub counters: ErrorCounters,
}

/// Collapses tab and space runs into a single space and trims every line.
pub fn normalize_status(text: &str) -> String {
    text.split('\n')
        .map(squash_blanks)
        .collect::<Vec<_>>()
        .join("\n")
}

/// All device lines in file order, duplicates preserved.
pub fn parse_device_entries(text: &str) -> Vec<DeviceEntry> {
    normalize_status(text)
        .lines()
        .filter_map(parse_device_line)
        .collect()
}

/// Device paths of [`parse_device_entries`].
pub fn parse_device_paths(text: &str) -> Vec<String> {
    parse_device_entries(text)
        .into_iter()
        .map(|entry| entry.path)
        .collect()
}

fn squash_blanks(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_run = false;
    for c in line.chars() {
        if c == ' ' || c == '\t' {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out.trim().to_string()
}

fn parse_device_line(line: &str) -> Option<DeviceEntry> {
    let mut fields = line.split(' ');
    let path = fields.next().filter(|p| is_device_path(p))?;
    let state: DeviceState = fields.next()?.parse().ok()?;
    let read = parse_counter(fields.next()?)?;
    let write = parse_counter(fields.next()?)?;
    let checksum = parse_counter(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }
    Some(DeviceEntry {
        path: path.to_string(),
        state,
        counters: ErrorCounters {
            read,
            write,
            checksum,
        },
    })
}

fn is_device_path(field: &str) -> bool {
    field.strip_prefix("/dev/").is_some_and(|rest| {
        rest.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-'))
    })
}

// Any digit run is a counter; values beyond u64 saturate.
fn parse_counter(field: &str) -> Option<u64> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(field.parse().unwrap_or(u64::MAX))
}
