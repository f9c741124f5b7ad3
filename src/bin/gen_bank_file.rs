use datagen::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::error;

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator::new();

/// Fixed-width bank transaction files across the record-count tiers.
///
/// 60% debits at base amount 1000; each tier writes
/// `SHARC.EDCMP.FCS3D01.RETAIL.DEBIT.TCB_<count>` into the working
/// directory. A failed tier is logged and skipped.
fn main() {
    init_tracing();
    let mut rng = StdRng::from_entropy();
    let writer = BankFileWriter::new(0.6, 1_000.0);

    println!("Starting generate test data...");
    print_table_header();

    for count in TIERS {
        let path = BankFileWriter::file_name(count);
        match measure(|| writer.write(count, &path, &mut rng).map(|s| s.records)) {
            Ok(metrics) => print_row(&metrics),
            Err(e) => error!(count, "failed to generate bank file: {e}"),
        }
    }

    print_rule();
}
