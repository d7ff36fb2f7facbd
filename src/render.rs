//! Markdown rendering of metric and runtime tables
use crate::{RuntimeSample, SimMetrics};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRow {
    pub name: String,
    #[serde(flatten)]
    pub metrics: SimMetrics,
}

/// IPC ratio array / list, only when both are present and list IPC is non-zero
pub fn ipc_speedup(array: Option<&SimMetrics>, list: Option<&SimMetrics>) -> Option<f64> {
    match (array, list) {
        (Some(array), Some(list)) if list.ipc != 0.0 => Some(array.ipc / list.ipc),
        _ => None,
    }
}

/// Runtime ratio list / array: lower runtime is better, so > 1 still favors array
pub fn wall_clock_speedup(array_ms: Option<f64>, list_ms: Option<f64>) -> Option<f64> {
    match (array_ms, list_ms) {
        (Some(array_ms), Some(list_ms)) if array_ms != 0.0 => Some(list_ms / array_ms),
        _ => None,
    }
}

fn percent(rate: f64, precision: usize) -> String {
    format!("{:.*}%", precision, rate * 100.0)
}

fn no_data(title: &str) -> String {
    format!("### {}\n\n_No data found._\n\n", title)
}

pub fn render_metrics_table(title: &str, rows: &[MetricsRow], speedup: Option<f64>) -> String {
    if rows.is_empty() {
        return no_data(title);
    }

    let mut md = format!("### {}\n\n", title);
    md.push_str(
        "| workload | IPC | L1D load hit rate | L1D load miss rate | L1D load accesses \
         | LLC load hit rate | LLC load miss rate | L1D load MSHR merges | L1D load MSHR merge rate |\n",
    );
    md.push_str("|---|---:|---:|---:|---:|---:|---:|---:|---:|\n");
    for row in rows {
        let metrics = &row.metrics;
        let (llc_hit, llc_miss) = match &metrics.llc {
            Some(llc) => (percent(llc.hit_rate, 2), percent(llc.miss_rate, 2)),
            None => ("-".to_string(), "-".to_string()),
        };
        let (mshr_merge, mshr_rate) = match &metrics.l1d_load_mshr {
            Some(mshr) => (mshr.merge.to_string(), percent(mshr.rate, 4)),
            None => ("-".to_string(), "-".to_string()),
        };
        md.push_str(&format!(
            "| {} | {:.3} | {} | {} | {} | {} | {} | {} | {} |\n",
            row.name,
            metrics.ipc,
            percent(metrics.l1d.hit_rate, 2),
            percent(metrics.l1d.miss_rate, 2),
            metrics.l1d.access,
            llc_hit,
            llc_miss,
            mshr_merge,
            mshr_rate
        ));
    }
    md.push('\n');

    if let Some(speedup) = speedup {
        md.push_str(&format!("**IPC speedup (array / list):** {:.3}\n\n", speedup));
    }
    md
}

pub fn render_runtime_table(title: &str, rows: &[RuntimeSample], speedup: Option<f64>) -> String {
    if rows.is_empty() {
        return no_data(title);
    }

    let mut md = format!("### {}\n\n", title);
    md.push_str("| workload | runtime (ms) |\n");
    md.push_str("|---|---:|\n");
    for row in rows {
        md.push_str(&format!("| {} | {:.3} |\n", row.workload, row.runtime_ms));
    }
    md.push('\n');

    if let Some(speedup) = speedup {
        md.push_str(&format!(
            "**Wall-clock speedup (list / array):** {:.3}\n\n",
            speedup
        ));
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CacheStats, MshrStats};

    fn metrics(ipc: f64, access: u64, hit: u64) -> SimMetrics {
        SimMetrics {
            ipc,
            l1d: CacheStats::new(access, hit, access - hit),
            llc: None,
            l1d_load_mshr: None,
        }
    }

    #[test]
    fn test_ipc_speedup() {
        let array = metrics(2.0, 100, 80);
        let list = metrics(1.0, 100, 50);
        assert_eq!(ipc_speedup(Some(&array), Some(&list)), Some(2.0));
        assert_eq!(ipc_speedup(Some(&array), None), None);
        assert_eq!(ipc_speedup(None, Some(&list)), None);
        assert_eq!(ipc_speedup(Some(&array), Some(&metrics(0.0, 1, 1))), None);
    }

    #[test]
    fn test_wall_clock_speedup() {
        assert_eq!(wall_clock_speedup(Some(2.0), Some(5.0)), Some(2.5));
        assert_eq!(wall_clock_speedup(Some(0.0), Some(5.0)), None);
        assert_eq!(wall_clock_speedup(None, Some(5.0)), None);
        assert_eq!(wall_clock_speedup(Some(2.0), None), None);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render_metrics_table("Heap", &[], Some(1.0)),
            "### Heap\n\n_No data found._\n\n"
        );
        assert_eq!(
            render_runtime_table("Heap runtime", &[], None),
            "### Heap runtime\n\n_No data found._\n\n"
        );
    }

    #[test]
    fn test_render_metrics() {
        let mut full = metrics(0.5, 200, 150);
        full.llc = Some(CacheStats::new(50, 10, 40));
        full.l1d_load_mshr = Some(MshrStats {
            merge: 7,
            rate: 7.0 / 200.0,
        });
        let rows = vec![
            MetricsRow {
                name: "array_add".to_string(),
                metrics: metrics(1.5, 100, 80),
            },
            MetricsRow {
                name: "list_add".to_string(),
                metrics: full,
            },
        ];

        let md = render_metrics_table("Heap", &rows, Some(3.0));
        assert!(md.starts_with("### Heap\n\n| workload | IPC |"));
        assert!(md.contains("| array_add | 1.500 | 80.00% | 20.00% | 100 | - | - | - | - |\n"));
        assert!(md.contains(
            "| list_add | 0.500 | 75.00% | 25.00% | 200 | 20.00% | 80.00% | 7 | 3.5000% |\n"
        ));
        assert!(md.ends_with("\n\n**IPC speedup (array / list):** 3.000\n\n"));

        let md = render_metrics_table("Heap", &rows[..1], None);
        assert!(!md.contains("speedup"));
    }

    #[test]
    fn test_render_runtime() {
        let rows = vec![
            RuntimeSample {
                workload: "array_add_stack".to_string(),
                runtime_ms: 1.2345,
            },
            RuntimeSample {
                workload: "list_add_stack".to_string(),
                runtime_ms: 4.0,
            },
        ];
        let md = render_runtime_table("Stack runtime", &rows, Some(4.0 / 1.2345));
        assert_eq!(
            md,
            "### Stack runtime\n\n\
             | workload | runtime (ms) |\n\
             |---|---:|\n\
             | array_add_stack | 1.234 |\n\
             | list_add_stack | 4.000 |\n\n\
             **Wall-clock speedup (list / array):** 3.240\n\n"
        );
    }
}
