use datagen::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::error;

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator::new();

const CORPORATE_RATIO: f64 = 0.05;

/// Customer profile CSV (union of corporate and individual columns) across
/// the record-count tiers. Profile ids stay sequential across tiers: the
/// synthesizer's counter is shared by the whole sweep.
fn main() {
    init_tracing();
    let mut rng = StdRng::from_entropy();
    let mut synth = CustomerSynthesizer::new();

    println!("Starting generate test data...");
    print_table_header();

    for count in TIERS {
        let path = profile_extract_name(count);
        match measure(|| {
            write_profile_extract(&mut synth, count, &path, CORPORATE_RATIO, &mut rng)
        }) {
            Ok(metrics) => print_row(&metrics),
            Err(e) => error!(count, "failed to generate profile extract: {e}"),
        }
    }

    print_rule();
}
