use anyhow::{Context, bail};
use regex::Regex;
use std::{collections::BTreeMap, path::Path, sync::LazyLock};

pub const DEFAULT_N: &str = "100000";

static WORKLOADS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"WORKLOADS=\(([^)]*)\)").unwrap());

/// Parsed bash-style workload configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Declared workloads, in order
    pub workloads: Vec<String>,
    /// Raw `key=value` pairs, e.g. `n_array_add=50000` or `stack_list_add_stack=1`
    pub params: BTreeMap<String, String>,
}

/// Typed parameters of one workload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadParams {
    /// sample count, kept as the string used in result folder names
    pub n: String,
    /// data structure lives on the stack
    pub stack: bool,
}

pub fn parse_config(text: &str) -> WorkloadConfig {
    let mut config = WorkloadConfig::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("WORKLOADS=") {
            // expect: WORKLOADS=(a b c)
            if let Some(captures) = WORKLOADS_RE.captures(line) {
                config.workloads = captures[1].split_whitespace().map(String::from).collect();
            }
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            config
                .params
                .insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    config
}

impl WorkloadConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<WorkloadConfig> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = parse_config(&text);
        if config.workloads.is_empty() {
            bail!("No WORKLOADS found in {}", path.display());
        }
        log::debug!(
            "Loaded {} workloads and {} parameters from {}",
            config.workloads.len(),
            config.params.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.workloads.iter().any(|w| w == name)
    }

    pub fn params_for(&self, name: &str) -> WorkloadParams {
        WorkloadParams {
            n: self
                .params
                .get(&format!("n_{}", name))
                .cloned()
                .unwrap_or_else(|| DEFAULT_N.to_string()),
            stack: self
                .params
                .get(&format!("stack_{}", name))
                .is_some_and(|value| value == "1"),
        }
    }
}
