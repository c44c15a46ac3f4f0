use anyhow::Result;
use clap::Parser;

use parsweep::baseline::{none_of_parallel, none_of_sequential};
use parsweep::data::{generate_odd_values, DEFAULT_SEED};
use parsweep::parallel::{max_workers_for_host, parallel_none_of, FALLBACK_MAX_WORKERS};
use parsweep::report::{create_progress_bar, format_record, print_summary};
use parsweep::sweep::sweep_worker_counts;
use parsweep::timing::measure_ms;

#[derive(Parser, Debug)]
#[command(name = "parsweep")]
#[command(about = "Benchmark a thread-partitioned none-of query and sweep worker counts", long_about = None)]
struct Args {
    /// Number of integers to benchmark against
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    size: usize,

    /// Seed for the random input data
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Highest worker count to sweep (defaults to 2x the CPU count)
    #[arg(short = 'k', long)]
    max_workers: Option<usize>,

    /// Sweep ceiling used when the CPU count cannot be detected
    #[arg(long, default_value_t = FALLBACK_MAX_WORKERS)]
    fallback_workers: usize,

    /// Skip the sequential and rayon baseline measurements
    #[arg(long)]
    skip_baselines: bool,

    /// Disable progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.max_workers == Some(0) {
        anyhow::bail!("--max-workers must be at least 1");
    }

    if args.fallback_workers == 0 {
        anyhow::bail!("--fallback-workers must be at least 1");
    }

    let max_workers = args
        .max_workers
        .unwrap_or_else(|| max_workers_for_host(args.fallback_workers));

    println!(
        "Generating {} values with seed {} ({:.2} MB)",
        args.size,
        args.seed,
        (args.size * std::mem::size_of::<i32>()) as f64 / (1024.0 * 1024.0)
    );
    let values = generate_odd_values(args.size, args.seed);

    let is_even = |value: i32| value % 2 == 0;
    println!("none-of(is even) = {}", parallel_none_of(&values, 1, is_even));

    if !args.skip_baselines {
        let seq_ms = measure_ms(|| {
            none_of_sequential(&values, is_even);
        });
        let par_ms = measure_ms(|| {
            none_of_parallel(&values, is_even);
        });
        println!("Sequential none-of: {seq_ms:>9.3} ms");
        println!("Rayon none-of:      {par_ms:>9.3} ms");
    }

    println!("\nSweeping worker counts 1..={max_workers}");

    let progress = if !args.quiet {
        Some(create_progress_bar(max_workers))
    } else {
        None
    };

    let outcome = sweep_worker_counts(&values, is_even, max_workers, |record| {
        let line = format_record(record);
        match &progress {
            Some(pb) => {
                pb.println(line);
                pb.inc(1);
            }
            None => println!("{line}"),
        }
    });

    if let Some(ref pb) = progress {
        pb.finish_and_clear();
    }

    print_summary(&outcome, num_cpus::get());

    Ok(())
}
