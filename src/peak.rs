//! Per-block peak tracking on the real-time audio path.

use std::sync::Arc;

use crate::meters::Meters;

/// Scans processed audio blocks and folds their peaks into the shared
/// meter state.
///
/// Runs inside the audio callback: a single bounded pass per block, one
/// atomic fold per channel, no allocation, no locks, no I/O. Anything else
/// here would be an audible dropout, not a performance bug.
pub struct PeakTracker {
    meters: Arc<Meters>,
}

impl PeakTracker {
    pub fn new(meters: Arc<Meters>) -> Self {
        Self { meters }
    }

    /// Fold one channel's block peak into the shared state.
    ///
    /// Called once per channel per block; the shared state takes the max
    /// across calls, so the result is the peak over all samples and
    /// channels. An empty block contributes nothing.
    pub fn process(&self, samples: &[f32]) {
        let peak = samples.iter().copied().map(f32::abs).fold(0.0_f32, f32::max);
        self.meters.observe(peak);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_sequence_folds_to_running_maximum() {
        let meters = Arc::new(Meters::new());
        let tracker = PeakTracker::new(meters.clone());

        tracker.process(&[0.1, -0.35, 0.2]);
        tracker.process(&[0.05, -0.05, 0.3]);

        let snapshot = meters.snapshot();
        assert_eq!(snapshot.peak, 0.35);
        assert!(!snapshot.clipped);
    }

    #[test]
    fn negative_excursions_count_by_magnitude() {
        let meters = Arc::new(Meters::new());
        let tracker = PeakTracker::new(meters.clone());

        tracker.process(&[-0.9, 0.1]);
        assert_eq!(meters.snapshot().peak, 0.9);
    }

    #[test]
    fn channels_share_one_fold() {
        let meters = Arc::new(Meters::new());
        let tracker = PeakTracker::new(meters.clone());

        // Two channels of the same block.
        tracker.process(&[0.2, 0.4]);
        tracker.process(&[0.6, 0.1]);

        assert_eq!(meters.snapshot().peak, 0.6);
    }

    #[test]
    fn single_full_scale_sample_latches_clip() {
        let meters = Arc::new(Meters::new());
        let tracker = PeakTracker::new(meters.clone());

        tracker.process(&[0.2, 1.0, 0.3]);

        let snapshot = meters.snapshot();
        assert_eq!(snapshot.peak, 1.0);
        assert!(snapshot.clipped);
    }

    #[test]
    fn empty_block_is_a_no_op() {
        let meters = Arc::new(Meters::new());
        let tracker = PeakTracker::new(meters.clone());

        tracker.process(&[0.5]);
        tracker.process(&[]);

        assert_eq!(meters.snapshot().peak, 0.5);
    }
}
