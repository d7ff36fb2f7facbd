// results folder structure:
// {root}/
// |- config/
//    \- workloads.conf
// |- results/
//    |- {workload}_{n}/
//       \- sim.txt                  (legacy location of simulator logs)
//    |- trace/
//       \- {workload}_{n}/
//          \- sim.txt
//    \- native/
//       \- {workload}_{n}/
//          \- run.txt
// \- analysis/
//    \- metrics/
//       |- report.md
//       \- report_n{n}.md           (when --n is given)

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Layout {
    /// Workload configuration file
    pub config_path: PathBuf,
    /// Simulator logs
    pub results_dir: PathBuf,
    /// Older simulator logs, checked when the primary one is missing
    pub legacy_results_dir: PathBuf,
    /// Runtime logs of native (non-trace) runs
    pub runs_dir: PathBuf,
    /// Where the report is written
    pub output_dir: PathBuf,
}

impl Layout {
    pub fn new<P: AsRef<Path>>(root: P) -> Layout {
        let root = root.as_ref();
        Layout {
            config_path: root.join("config").join("workloads.conf"),
            results_dir: root.join("results").join("trace"),
            legacy_results_dir: root.join("results"),
            runs_dir: root.join("results").join("native"),
            output_dir: root.join("analysis").join("metrics"),
        }
    }

    pub fn sim_file_for(&self, workload: &str, n: &str) -> PathBuf {
        let dir_name = format!("{}_{}", workload, n);
        let primary = self.results_dir.join(&dir_name).join("sim.txt");
        if primary.is_file() {
            return primary;
        }
        // may not exist either, the extractor checks again
        self.legacy_results_dir.join(dir_name).join("sim.txt")
    }

    pub fn run_file_for(&self, workload: &str, n: &str) -> PathBuf {
        self.runs_dir
            .join(format!("{}_{}", workload, n))
            .join("run.txt")
    }

    pub fn report_path(&self, n_override: Option<&str>) -> PathBuf {
        match n_override {
            Some(n) => self.output_dir.join(format!("report_n{}.md", n)),
            None => self.output_dir.join("report.md"),
        }
    }
}
