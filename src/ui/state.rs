//! State management for the GainDial editor
//!
//! This module contains the UI data model, the per-tick display frame, and
//! the meter events (refresh and user reset).

use crate::meters::{Meters, MeterSnapshot};
use crate::GainDialParams;
use nih_plug_vizia::vizia::prelude::*;
use std::sync::Arc;

/// Everything the meter widgets need for one paint. Recomputed from a
/// fresh snapshot on every refresh tick; never shared back to the audio
/// thread.
#[derive(Debug, Clone, Copy, PartialEq, Data)]
pub struct DisplayFrame {
    /// Peak level in dBFS; `f32::NEG_INFINITY` stands for silence.
    pub peak_db: f32,
    pub clip_active: bool,
}

impl DisplayFrame {
    pub fn cleared() -> Self {
        Self {
            peak_db: f32::NEG_INFINITY,
            clip_active: false,
        }
    }

    pub fn from_snapshot(snapshot: MeterSnapshot) -> Self {
        Self {
            peak_db: peak_to_db(snapshot.peak),
            clip_active: snapshot.clipped,
        }
    }
}

/// Linear peak to dBFS. Zero maps to the sentinel instead of reaching the
/// logarithm.
pub fn peak_to_db(peak: f32) -> f32 {
    if peak <= 0.0 {
        f32::NEG_INFINITY
    } else {
        20.0 * peak.log10()
    }
}

/// Readout text for the peak label.
pub fn format_peak_db(peak_db: f32) -> String {
    if peak_db == f32::NEG_INFINITY {
        "-Inf dB".to_string()
    } else {
        format!("{:.2} dB", peak_db)
    }
}

#[derive(Lens, Clone)]
pub struct GainDialData {
    pub params: Arc<GainDialParams>,
    pub meters: Arc<Meters>,
    pub frame: DisplayFrame,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeterEvent {
    /// A refresh tick delivered a freshly converted frame.
    Tick(DisplayFrame),
    /// The user clicked the peak readout or the clip lamp.
    Reset,
}

impl Model for GainDialData {
    fn event(&mut self, cx: &mut EventContext, event: &mut Event) {
        event.map(|meter_event, _| match meter_event {
            MeterEvent::Tick(frame) => {
                self.frame = *frame;
                cx.needs_redraw();
            }
            MeterEvent::Reset => {
                crate::dial_log!("meter reset");
                self.meters.reset();
                // Show the cleared state immediately rather than waiting
                // for the next tick.
                self.frame = DisplayFrame::cleared();
                cx.needs_redraw();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_maps_to_sentinel_not_log() {
        assert_eq!(peak_to_db(0.0), f32::NEG_INFINITY);
        assert_eq!(format_peak_db(f32::NEG_INFINITY), "-Inf dB");
    }

    #[test]
    fn unity_peak_reads_zero_db() {
        assert_eq!(format_peak_db(peak_to_db(1.0)), "0.00 dB");
    }

    #[test]
    fn half_scale_reads_minus_six_db() {
        assert_eq!(format_peak_db(peak_to_db(0.5)), "-6.02 dB");
    }

    #[test]
    fn frame_carries_snapshot_through_conversion() {
        let frame = DisplayFrame::from_snapshot(MeterSnapshot {
            peak: 1.0,
            clipped: true,
        });
        assert_eq!(frame.peak_db, 0.0);
        assert!(frame.clip_active);

        let silent = DisplayFrame::from_snapshot(MeterSnapshot {
            peak: 0.0,
            clipped: false,
        });
        assert_eq!(silent, DisplayFrame::cleared());
    }
}
