use crate::LinePattern;
use serde::{Deserialize, Serialize};
use std::{path::Path, sync::LazyLock};

static TIME_NS: LazyLock<LinePattern> =
    LazyLock::new(|| LinePattern::new("time_ns", r"time_ns=([0-9]+)"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeSample {
    pub workload: String,
    /// wall clock time in milliseconds
    pub runtime_ms: f64,
}

pub fn parse_runtime_ms(text: &str) -> Option<f64> {
    let time_ns = TIME_NS.find::<u64>(text)?[0];
    Some(time_ns as f64 / 1_000_000.0)
}

/// Missing file and missing marker are both None
pub fn load_runtime_ms<P: AsRef<Path>>(path: P) -> Option<f64> {
    let path = path.as_ref();
    if !path.is_file() {
        log::debug!("Runtime log {} not found", path.display());
        return None;
    }
    match std::fs::read_to_string(path) {
        Ok(text) => parse_runtime_ms(&text),
        Err(err) => {
            log::warn!("Failed to read {}: {}", path.display(), err);
            None
        }
    }
}
