pub mod alloc;
pub mod harness;

// Re-export commonly used types
pub use alloc::{CountingAllocator, heap_allocated_bytes};
pub use harness::{
    RunMetrics, TIERS, file_size_mb, measure, print_comparison_header, print_comparison_row,
    print_row, print_rule, print_table_header,
};
