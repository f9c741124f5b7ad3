use std::path::Path;
use std::time::Instant;

use super::alloc::heap_allocated_bytes;
use crate::io::IoError;

/// Record-count tiers swept by every generator binary
pub const TIERS: [usize; 3] = [10_000, 100_000, 1_000_000];

const RULE_WIDTH: usize = 80;

/// Measurements for one generation run
#[derive(Debug, Clone, Copy)]
pub struct RunMetrics {
    pub records: usize,
    pub elapsed_secs: f64,
    pub memory_delta_mb: f64,
    /// Records per second
    pub throughput: f64,
}

/// Run one generation closure, sampling wall-clock time and heap-allocated
/// bytes before and after.
///
/// The closure returns the number of records it wrote; a failure propagates
/// so the caller can log it and continue with the next tier. The memory
/// delta is best-effort and may be negative.
pub fn measure<F>(f: F) -> Result<RunMetrics, IoError>
where
    F: FnOnce() -> Result<usize, IoError>,
{
    let mem_before = heap_allocated_bytes();
    let start = Instant::now();

    let records = f()?;

    let elapsed_secs = start.elapsed().as_secs_f64();
    let mem_after = heap_allocated_bytes();

    Ok(RunMetrics {
        records,
        elapsed_secs,
        memory_delta_mb: (mem_after - mem_before) as f64 / (1024.0 * 1024.0),
        throughput: records as f64 / elapsed_secs,
    })
}

/// Size of a generated file in MB
pub fn file_size_mb<P: AsRef<Path>>(path: P) -> Result<f64, IoError> {
    Ok(std::fs::metadata(path)?.len() as f64 / (1024.0 * 1024.0))
}

/// 80-dash rule separating table sections
pub fn print_rule() {
    println!("{}", "-".repeat(RULE_WIDTH));
}

/// Column header for the plain per-tier table
pub fn print_table_header() {
    println!(
        "{:<10} {:<15} {:<15} {:<15}",
        "Records", "Time (s)", "RAM (MB)", "Speed (rec/s)"
    );
    print_rule();
}

/// One row of the plain per-tier table
pub fn print_row(metrics: &RunMetrics) {
    println!(
        "{:<10} {:<15.2} {:<15.2} {:.2}",
        metrics.records, metrics.elapsed_secs, metrics.memory_delta_mb, metrics.throughput
    );
}

/// Column header for the strategy-comparison table
pub fn print_comparison_header() {
    println!(
        "{:<10} {:<15} {:<12} {:<12} {}",
        "Records", "Strategy", "Time (s)", "RAM (MB)", "Speed (rec/s)"
    );
    print_rule();
}

/// One row of the strategy-comparison table
pub fn print_comparison_row(label: &str, metrics: &RunMetrics) {
    println!(
        "{:<10} {:<15} {:<12.2} {:<12.2} {:.2}",
        metrics.records, label, metrics.elapsed_secs, metrics.memory_delta_mb, metrics.throughput
    );
}
