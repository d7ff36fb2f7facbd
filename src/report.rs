//! Collect per-pair results and write the Markdown report
use crate::{
    Layout, MetricsRow, Pair, ResolvedWorkload, RunMode, RuntimeSample, WorkloadConfig,
    ipc_speedup, load_runtime_ms, load_sim_metrics, render_metrics_table, render_runtime_table,
    resolve_pairs, wall_clock_speedup,
};
use anyhow::Context;
use serde::Serialize;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

pub const NO_DATA_MESSAGE: &str = "No data found. Ensure traces/runs are present in results/.\n";

#[derive(Debug, Clone, Serialize)]
pub struct PairResult {
    pub pair: Pair,
    pub array: Option<MetricsRow>,
    pub list: Option<MetricsRow>,
    pub array_runtime: Option<RuntimeSample>,
    pub list_runtime: Option<RuntimeSample>,
    /// array IPC / list IPC
    pub ipc_speedup: Option<f64>,
    /// list runtime / array runtime
    pub wall_clock_speedup: Option<f64>,
}

impl PairResult {
    pub fn metrics_rows(&self) -> Vec<MetricsRow> {
        self.array.iter().chain(self.list.iter()).cloned().collect()
    }

    pub fn runtime_rows(&self) -> Vec<RuntimeSample> {
        self.array_runtime
            .iter()
            .chain(self.list_runtime.iter())
            .cloned()
            .collect()
    }

    pub fn has_data(&self) -> bool {
        self.array.is_some()
            || self.list.is_some()
            || self.array_runtime.is_some()
            || self.list_runtime.is_some()
    }

    /// metrics table, IPC speedup, then runtime table and wall-clock speedup if any runtime exists
    pub fn render(&self) -> String {
        let mut md =
            render_metrics_table(self.pair.title(), &self.metrics_rows(), self.ipc_speedup);
        let runtime_rows = self.runtime_rows();
        if !runtime_rows.is_empty() {
            md.push_str(&render_runtime_table(
                &format!("{} runtime", self.pair.title()),
                &runtime_rows,
                self.wall_clock_speedup,
            ));
        }
        md
    }
}

fn collect_metrics(layout: &Layout, workload: &ResolvedWorkload) -> Option<MetricsRow> {
    let metrics = load_sim_metrics(layout.sim_file_for(&workload.name, &workload.n))?;
    Some(MetricsRow {
        name: workload.name.clone(),
        metrics,
    })
}

fn collect_runtime(layout: &Layout, workload: &ResolvedWorkload) -> Option<RuntimeSample> {
    let runtime_ms = load_runtime_ms(layout.run_file_for(&workload.name, &workload.n))?;
    Some(RuntimeSample {
        workload: workload.name.clone(),
        runtime_ms,
    })
}

pub fn collect_pair(layout: &Layout, pair: &Pair) -> PairResult {
    let array = collect_metrics(layout, &pair.array);
    let list = collect_metrics(layout, &pair.list);
    let array_runtime = collect_runtime(layout, &pair.array);
    let list_runtime = collect_runtime(layout, &pair.list);

    let ipc_speedup = ipc_speedup(
        array.as_ref().map(|row| &row.metrics),
        list.as_ref().map(|row| &row.metrics),
    );
    let wall_clock_speedup = wall_clock_speedup(
        array_runtime.as_ref().map(|sample| sample.runtime_ms),
        list_runtime.as_ref().map(|sample| sample.runtime_ms),
    );

    PairResult {
        pair: pair.clone(),
        array,
        list,
        array_runtime,
        list_runtime,
        ipc_speedup,
        wall_clock_speedup,
    }
}

pub fn build_report(results: &[PairResult]) -> String {
    if !results.iter().any(PairResult::has_data) {
        return NO_DATA_MESSAGE.to_string();
    }
    let sections: Vec<String> = results.iter().map(PairResult::render).collect();
    format!("# Workload Metrics\n\n{}", sections.join("\n"))
}

/// Writes the whole document at once, returns its path
pub fn write_report(
    layout: &Layout,
    n_override: Option<&str>,
    document: &str,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(&layout.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            layout.output_dir.display()
        )
    })?;
    let path = layout.report_path(n_override);
    std::fs::write(&path, document)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    Ok(path)
}

pub fn write_json<P: AsRef<Path>>(path: P, results: &[PairResult]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), results)?;
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub mode: RunMode,
    /// sample count used for every workload instead of the configured one
    pub n_override: Option<String>,
}

/// Load config, resolve pairs, read logs, render and write the report
pub fn run(
    layout: &Layout,
    options: &ReportOptions,
) -> anyhow::Result<(PathBuf, Vec<PairResult>)> {
    let config = WorkloadConfig::load(&layout.config_path)?;
    let n_override = options.n_override.as_deref();

    let results: Vec<PairResult> = resolve_pairs(&config, options.mode, n_override)
        .iter()
        .map(|pair| collect_pair(layout, pair))
        .collect();
    log::info!("Collected {} pairs", results.len());

    let path = write_report(layout, n_override, &build_report(&results))?;
    Ok((path, results))
}
