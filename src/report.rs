use indicatif::{ProgressBar, ProgressStyle};

use crate::sweep::{SweepOutcome, SweepRecord};

pub fn create_progress_bar(total_counts: usize) -> ProgressBar {
    let pb = ProgressBar::new(total_counts as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} worker counts ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

pub fn format_record(record: &SweepRecord) -> String {
    format!("  {:>3} workers: {:>9.3} ms", record.workers, record.elapsed_ms)
}

pub fn print_summary(outcome: &SweepOutcome, hardware_threads: usize) {
    println!("\nBest worker count: {} ({:.3} ms)", outcome.best_workers, outcome.best_ms);
    println!(
        "Hardware threads: {} (best/hardware ratio: {:.2})",
        hardware_threads,
        outcome.best_workers as f64 / hardware_threads as f64
    );
}
