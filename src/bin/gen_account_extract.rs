use datagen::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::error;

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator::new();

const CORPORATE_RATIO: f64 = 0.05;

/// Customer account CSV comparing the per-record and precomputed synthesis
/// strategies at each tier. 5% corporate rows first, then individual.
fn main() {
    init_tracing();
    let mut rng = StdRng::from_entropy();
    let synth = CustomerSynthesizer::new();

    println!("\nPerformance Comparison Results:");
    print_comparison_header();

    for count in TIERS {
        for strategy in SynthesisStrategy::ALL {
            let path = account_extract_name(strategy, count);
            let run = measure(|| {
                write_account_extract(&synth, count, &path, CORPORATE_RATIO, strategy, &mut rng)
            });
            match run {
                Ok(metrics) => print_comparison_row(strategy.label(), &metrics),
                Err(e) => error!(count, strategy = strategy.label(), "tier failed: {e}"),
            }
        }
        print_rule();
    }
}
