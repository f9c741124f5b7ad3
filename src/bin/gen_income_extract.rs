use datagen::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::error;

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator::new();

/// Three-column customer income CSV across the record-count tiers.
///
/// Files are named `Customer_extract_<yyyymmdd>_<count>.csv`; every row of a
/// run carries the same snapshot date.
fn main() {
    init_tracing();
    let mut rng = StdRng::from_entropy();
    let synth = CustomerSynthesizer::new();
    let date_stamp = synth.compact_date();

    println!("Starting generate test data...");
    print_table_header();

    for count in TIERS {
        let path = income_extract_name(&date_stamp, count);
        match measure(|| write_income_extract(&synth, count, &path, &mut rng)) {
            Ok(metrics) => print_row(&metrics),
            Err(e) => error!(count, "failed to generate income extract: {e}"),
        }
    }

    print_rule();
}
