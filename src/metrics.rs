//! Extraction of IPC and cache statistics from simulator logs
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr, sync::LazyLock};

/// A recognized line shape with numeric capture slots
pub struct LinePattern {
    pub name: &'static str,
    regex: Regex,
}

impl LinePattern {
    pub fn new(name: &'static str, pattern: &str) -> LinePattern {
        LinePattern {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    /// Capture slots of the first match, None per slot that did not
    /// participate; None overall if there is no match or a capture fails to parse
    pub fn find_slots<T: FromStr>(&self, text: &str) -> Option<Vec<Option<T>>> {
        let captures = self.regex.captures(text)?;
        captures
            .iter()
            .skip(1)
            .map(|group| match group {
                Some(group) => group.as_str().parse::<T>().ok().map(Some),
                None => Some(None),
            })
            .collect()
    }

    /// Captures of the first match, all slots required
    pub fn find<T: FromStr>(&self, text: &str) -> Option<Vec<T>> {
        self.find_slots(text)?.into_iter().collect()
    }
}

static IPC: LazyLock<LinePattern> =
    LazyLock::new(|| LinePattern::new("ipc", r"CPU 0 cumulative IPC:\s*([0-9.]+)"));

// MSHR_MERGE is only taken from the same line
static L1D_LOAD: LazyLock<LinePattern> = LazyLock::new(|| {
    LinePattern::new(
        "l1d_load",
        r"cpu0->cpu0_L1D\s+LOAD\s+ACCESS:\s*([0-9]+)\s+HIT:\s*([0-9]+)\s+MISS:\s*([0-9]+)(?:[ \t]+MSHR_MERGE:[ \t]*([0-9]+))?",
    )
});

static LLC_LOAD: LazyLock<LinePattern> = LazyLock::new(|| {
    LinePattern::new(
        "llc_load",
        r"cpu0->LLC\s+(?:CACHE\s+)?LOAD\s+ACCESS:\s*([0-9]+)\s+HIT:\s*([0-9]+)\s+MISS:\s*([0-9]+)",
    )
});

/// `numerator / denominator`, 0.0 when the denominator is zero
pub fn ratio_or_zero(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Load counters of one cache level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub access: u64,
    pub hit: u64,
    pub miss: u64,
    /// hit / access
    pub hit_rate: f64,
    /// miss / access
    pub miss_rate: f64,
}

impl CacheStats {
    pub fn new(access: u64, hit: u64, miss: u64) -> CacheStats {
        CacheStats {
            access,
            hit,
            miss,
            hit_rate: ratio_or_zero(hit, access),
            miss_rate: ratio_or_zero(miss, access),
        }
    }

    fn from_captures(captures: &[u64]) -> CacheStats {
        CacheStats::new(captures[0], captures[1], captures[2])
    }

    fn from_slots(slots: &[Option<u64>]) -> Option<CacheStats> {
        Some(CacheStats::new(slots[0]?, slots[1]?, slots[2]?))
    }
}

/// MSHR merges of L1D loads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MshrStats {
    pub merge: u64,
    /// merge / L1D load access
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimMetrics {
    /// cumulative IPC of cpu 0
    pub ipc: f64,
    pub l1d: CacheStats,
    pub llc: Option<CacheStats>,
    pub l1d_load_mshr: Option<MshrStats>,
}

/// Returns None unless both the IPC line and the L1D load line are present
pub fn parse_sim_metrics(text: &str) -> Option<SimMetrics> {
    let ipc = IPC.find::<f64>(text)?[0];
    let l1d_slots = L1D_LOAD.find_slots::<u64>(text)?;
    let l1d = CacheStats::from_slots(&l1d_slots)?;

    let llc = LLC_LOAD
        .find::<u64>(text)
        .map(|captures| CacheStats::from_captures(&captures));
    let l1d_load_mshr = l1d_slots[3].map(|merge| MshrStats {
        merge,
        rate: ratio_or_zero(merge, l1d.access),
    });

    Some(SimMetrics {
        ipc,
        l1d,
        llc,
        l1d_load_mshr,
    })
}

pub fn load_sim_metrics<P: AsRef<Path>>(path: P) -> Option<SimMetrics> {
    let path = path.as_ref();
    if !path.is_file() {
        log::debug!("Simulator log {} not found", path.display());
        return None;
    }
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("Failed to read {}: {}", path.display(), err);
            return None;
        }
    };

    let metrics = parse_sim_metrics(&text);
    if metrics.is_none() {
        log::info!(
            "Skipping {}: missing {} or {} line",
            path.display(),
            IPC.name,
            L1D_LOAD.name
        );
    }
    metrics
}
