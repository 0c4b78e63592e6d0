//! Thread-safe metering state shared between the audio and UI threads.
//!
//! The audio thread only ever raises the peak and sets the clip latch; the
//! UI thread only ever reads both or clears both. Everything goes through
//! atomics, so neither side can block the other.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Full-scale amplitude. A single sample at or above this latches clipping.
pub const CLIP_THRESHOLD: f32 = 1.0;

/// Peak level and clip latch for one plugin instance.
///
/// The peak is an `f32` stored as its bit pattern in an `AtomicU32`,
/// matching how the rest of the metering path treats levels: linear
/// amplitude, never negative.
#[derive(Default)]
pub struct Meters {
    peak_bits: AtomicU32,
    clip_latched: AtomicBool,
}

/// One consistent-enough view of the meter state, taken on the UI thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterSnapshot {
    /// Maximum absolute sample magnitude observed since the last reset.
    pub peak: f32,
    /// True once any magnitude has reached [`CLIP_THRESHOLD`] since the
    /// last reset.
    pub clipped: bool,
}

impl Meters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the stored peak to `magnitude` and latch clipping if it is at
    /// or above full scale. Audio-thread side: no locks, no allocation.
    ///
    /// Non-negative `f32` bit patterns order the same as their values, so
    /// the compare is done on the floats and the swap on the raw bits.
    pub fn observe(&self, magnitude: f32) {
        let mut current = self.peak_bits.load(Ordering::Relaxed);
        while magnitude > f32::from_bits(current) {
            match self.peak_bits.compare_exchange_weak(
                current,
                magnitude.to_bits(),
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(seen) => current = seen,
            }
        }

        // The latch only ever goes false -> true between resets, so a plain
        // store is enough.
        if magnitude >= CLIP_THRESHOLD {
            self.clip_latched.store(true, Ordering::Relaxed);
        }
    }

    /// Clear the peak and the clip latch. UI-thread side.
    ///
    /// A peak that is concurrently in flight on the audio thread may land
    /// before or after the reset; either outcome is fine. Each field is a
    /// single atomic word, so no torn value is ever observable.
    pub fn reset(&self) {
        self.peak_bits.store(0.0f32.to_bits(), Ordering::Relaxed);
        self.clip_latched.store(false, Ordering::Relaxed);
    }

    /// Read both fields. The pair is "recent", not mutually synchronized;
    /// that is all the display needs.
    pub fn snapshot(&self) -> MeterSnapshot {
        MeterSnapshot {
            peak: f32::from_bits(self.peak_bits.load(Ordering::Relaxed)),
            clipped: self.clip_latched.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn peak_tracks_running_maximum() {
        let meters = Meters::new();
        for magnitude in [0.2, 0.9, 0.4, 0.85] {
            meters.observe(magnitude);
        }
        assert_eq!(meters.snapshot().peak, 0.9);
        assert!(!meters.snapshot().clipped);
    }

    #[test]
    fn peak_never_decreases_without_reset() {
        let meters = Meters::new();
        meters.observe(0.8);
        meters.observe(0.3);
        assert_eq!(meters.snapshot().peak, 0.8);
    }

    #[test]
    fn clip_latches_exactly_at_full_scale() {
        let meters = Meters::new();
        meters.observe(0.9999);
        assert!(!meters.snapshot().clipped);
        meters.observe(1.0);
        assert!(meters.snapshot().clipped);

        // The latch is sticky even when later blocks are quieter.
        meters.observe(0.1);
        assert!(meters.snapshot().clipped);
    }

    #[test]
    fn over_full_scale_is_kept_verbatim() {
        let meters = Meters::new();
        meters.observe(1.5);
        let snapshot = meters.snapshot();
        assert_eq!(snapshot.peak, 1.5);
        assert!(snapshot.clipped);
    }

    #[test]
    fn reset_clears_both_fields() {
        let meters = Meters::new();
        meters.observe(1.2);
        meters.reset();
        assert_eq!(
            meters.snapshot(),
            MeterSnapshot {
                peak: 0.0,
                clipped: false
            }
        );
    }

    #[test]
    fn reset_is_idempotent() {
        let meters = Meters::new();
        meters.observe(0.7);
        meters.reset();
        let first = meters.snapshot();
        meters.reset();
        assert_eq!(meters.snapshot(), first);
        assert_eq!(first.peak, 0.0);
        assert!(!first.clipped);
    }

    #[test]
    fn concurrent_observe_and_reset_never_tear() {
        let meters = Arc::new(Meters::new());

        let producer = {
            let meters = meters.clone();
            thread::spawn(move || {
                for _ in 0..200_000 {
                    meters.observe(1.0);
                }
            })
        };

        // The only values ever written are 0.0 and 1.0, so any other
        // observation would be a torn read.
        for round in 0..20_000 {
            if round % 2 == 0 {
                meters.reset();
            }
            let snapshot = meters.snapshot();
            assert!(
                snapshot.peak == 0.0 || snapshot.peak == 1.0,
                "torn peak value: {}",
                snapshot.peak
            );
        }

        producer.join().unwrap();
    }
}
