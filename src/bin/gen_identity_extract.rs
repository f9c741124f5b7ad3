use datagen::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, warn};

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator::new();

const CORPORATE_RATIO: f64 = 0.05;

/// Customer identity CSV comparing id-generation strategies at each tier:
/// ids drawn per record vs. a batch pregenerated up front. Reports output
/// file size alongside the usual timings, plus the per-tier speedup.
fn main() {
    init_tracing();
    let mut rng = StdRng::from_entropy();

    println!("\nPerformance Comparison:");
    println!(
        "{:<10} {:<15} {:<12} {:<12} {:<12} {}",
        "Records", "Strategy", "Time (s)", "RAM (MB)", "File (MB)", "Speed (rec/s)"
    );
    print_rule();

    for count in TIERS {
        let mut elapsed = [None, None];

        for (slot, strategy) in SynthesisStrategy::ALL.into_iter().enumerate() {
            // Fresh synthesizer per run so both strategies produce the same
            // id sequence positions
            let mut synth = IdentitySynthesizer::new();
            let path = identity_extract_name(strategy, count);

            let run = measure(|| {
                write_identity_extract(&mut synth, count, &path, CORPORATE_RATIO, strategy, &mut rng)
            });

            match run {
                Ok(metrics) => {
                    let size_mb = match file_size_mb(&path) {
                        Ok(size) => size,
                        Err(e) => {
                            warn!(%path, "could not stat output file: {e}");
                            0.0
                        }
                    };
                    println!(
                        "{:<10} {:<15} {:<12.2} {:<12.2} {:<12.2} {:.2}",
                        metrics.records,
                        strategy.label(),
                        metrics.elapsed_secs,
                        metrics.memory_delta_mb,
                        size_mb,
                        metrics.throughput
                    );
                    elapsed[slot] = Some(metrics.elapsed_secs);
                }
                Err(e) => error!(count, strategy = strategy.label(), "tier failed: {e}"),
            }
        }

        if let [Some(per_record), Some(precomputed)] = elapsed {
            println!("Speedup: {:.2}x", per_record / precomputed);
        }
        print_rule();
    }
}
