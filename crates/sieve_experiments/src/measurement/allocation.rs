//! Heap accounting through a counting global allocator.
//!
//! [`TrackingAllocator`] forwards to [`System`] and keeps process-wide
//! counters of live heap bytes and their high-water mark. With the
//! `tracking-allocator` feature (on by default) this crate installs it as the
//! global allocator, and [`AllocationProbe`] reads the peak of live bytes
//! reached between `begin` and `finish`. Unlike resident-set sampling, freed
//! heap pages that the C allocator keeps mapped do not hide a later call's
//! allocations.
//!
//! The counters are shared by every thread, so allocations made concurrently
//! on other threads are attributed to the window as well.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::{MeasurementError, MemoryProbe};

static LIVE_BYTES: AtomicUsize = AtomicUsize::new(0);
static PEAK_BYTES: AtomicUsize = AtomicUsize::new(0);
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// [`System`] with live-byte and high-water-mark counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingAllocator;

impl TrackingAllocator {
    pub const fn new() -> Self {
        TrackingAllocator
    }
}

fn record_growth(bytes: usize) {
    if !INSTALLED.load(Ordering::Relaxed) {
        INSTALLED.store(true, Ordering::Relaxed);
    }
    let live = LIVE_BYTES.fetch_add(bytes, Ordering::Relaxed) + bytes;
    PEAK_BYTES.fetch_max(live, Ordering::Relaxed);
}

fn record_shrink(bytes: usize) {
    LIVE_BYTES.fetch_sub(bytes, Ordering::Relaxed);
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            record_growth(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            record_growth(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        record_shrink(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            let old_size = layout.size();
            if new_size > old_size {
                record_growth(new_size - old_size);
            } else {
                record_shrink(old_size - new_size);
            }
        }
        new_ptr
    }
}

/// Peak heap bytes allocated during the probe window, above the live bytes
/// at `begin`.
///
/// Requires [`TrackingAllocator`] to be the global allocator; otherwise
/// `begin` reports [`MeasurementError::ProbeUnavailable`].
#[derive(Debug, Default)]
pub struct AllocationProbe {
    baseline_bytes: Option<usize>,
}

impl AllocationProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`TrackingAllocator`] has served any allocation in this process.
    pub fn is_available() -> bool {
        INSTALLED.load(Ordering::Relaxed)
    }
}

impl MemoryProbe for AllocationProbe {
    fn begin(&mut self) -> Result<(), MeasurementError> {
        if !Self::is_available() {
            return Err(MeasurementError::ProbeUnavailable(
                "tracking allocator is not the global allocator".to_string(),
            ));
        }
        let live = LIVE_BYTES.load(Ordering::SeqCst);
        PEAK_BYTES.store(live, Ordering::SeqCst);
        self.baseline_bytes = Some(live);
        Ok(())
    }

    fn finish(&mut self) -> Result<u64, MeasurementError> {
        let baseline = self
            .baseline_bytes
            .take()
            .ok_or(MeasurementError::ProbeNotStarted)?;
        let peak = PEAK_BYTES.load(Ordering::SeqCst);
        Ok(peak.saturating_sub(baseline) as u64)
    }
}
