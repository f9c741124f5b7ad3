use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicI64, Ordering};

static HEAP_LIVE_BYTES: AtomicI64 = AtomicI64::new(0);

/// System allocator wrapper that keeps a live-byte count for the benchmark
/// report.
///
/// Install in a binary with `#[global_allocator]`. The count is best-effort:
/// it ignores allocator bookkeeping overhead, and a delta across a run can be
/// negative when the run frees more than it allocates. It is reported as
/// computed, with no correctness guarantee.
pub struct CountingAllocator;

impl CountingAllocator {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CountingAllocator {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            HEAP_LIVE_BYTES.fetch_add(layout.size() as i64, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        HEAP_LIVE_BYTES.fetch_sub(layout.size() as i64, Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            HEAP_LIVE_BYTES.fetch_add(new_size as i64 - layout.size() as i64, Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Current live heap bytes as tracked by [`CountingAllocator`].
///
/// Returns 0 when the allocator is not installed (library tests).
pub fn heap_allocated_bytes() -> i64 {
    HEAP_LIVE_BYTES.load(Ordering::Relaxed)
}
