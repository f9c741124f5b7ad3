//! Prelude module for convenient imports
//!
//! Import everything you need with: `use datagen::prelude::*;`

// Domain types
pub use crate::domain::{
    BankTransaction, Cents, CustomerAccount, CustomerIdentity, CustomerIncome, CustomerKind,
    CustomerProfile, Operation, ReferenceData,
};

// Synthesizer types
pub use crate::synth::{
    CustomerSynthesizer, IdentitySynthesizer, SynthesisStrategy, TransactionSynthesizer,
    corporate_count,
};

// IO types
pub use crate::io::{
    BankFileWriter, IoError, LINE_WIDTH, WriteSummary, account_extract_name,
    identity_extract_name, income_extract_name, profile_extract_name, write_account_extract,
    write_identity_extract, write_income_extract, write_profile_extract,
};

// Report types
pub use crate::report::{
    CountingAllocator, RunMetrics, TIERS, file_size_mb, heap_allocated_bytes, measure,
    print_comparison_header, print_comparison_row, print_row, print_rule, print_table_header,
};

// App plumbing
pub use crate::logging::init_tracing;
