//! Compare array and list workloads from simulator and runtime logs
use clap::Parser;
use cli_table::{Cell, Table, print_stdout};
use std::path::PathBuf;
use workload_metrics::{Layout, ReportOptions, RunMode, run, write_json};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Include only heap workloads
    #[arg(long)]
    heap_only: bool,

    /// Include only stack workloads
    #[arg(long)]
    stack_only: bool,

    /// Sample count used for every workload, overriding the config
    #[arg(long)]
    n: Option<String>,

    /// Project root containing config/, results/ and analysis/
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Also dump collected results as json
    #[arg(long)]
    json_path: Option<PathBuf>,

    /// Print a speedup summary
    #[arg(long)]
    summary: bool,
}

fn format_speedup(speedup: Option<f64>) -> String {
    match speedup {
        Some(speedup) => format!("{:.3}", speedup),
        None => "-".to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let layout = Layout::new(&args.root);
    let options = ReportOptions {
        mode: RunMode::from_flags(args.heap_only, args.stack_only),
        n_override: args.n.clone(),
    };

    let (output_path, results) = run(&layout, &options)?;
    println!("Wrote {}", output_path.display());

    if let Some(json_path) = &args.json_path {
        write_json(json_path, &results)?;
        println!("Wrote {}", json_path.display());
    }

    if args.summary {
        let mut table = vec![];
        for result in &results {
            table.push(vec![
                result.pair.title().cell(),
                format!("{}_{}", result.pair.array.name, result.pair.array.n).cell(),
                format!("{}_{}", result.pair.list.name, result.pair.list.n).cell(),
                format_speedup(result.ipc_speedup).cell(),
                format_speedup(result.wall_clock_speedup).cell(),
            ]);
        }
        let table = table.table().title(vec![
            "Placement".cell(),
            "Array".cell(),
            "List".cell(),
            "IPC speedup".cell(),
            "Wall-clock speedup".cell(),
        ]);
        print_stdout(table)?;
    }

    Ok(())
}
