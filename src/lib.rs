mod debug;
pub mod meters;
pub mod peak;
mod ui;

use nih_plug::prelude::*;
use nih_plug_vizia::{create_vizia_editor, ViziaState, ViziaTheming};
use std::sync::Arc;

use crate::meters::Meters;
use crate::peak::PeakTracker;

// -----------------------------------------------------------------------------
// PARAMETERS
// -----------------------------------------------------------------------------
#[derive(Params)]
pub struct GainDialParams {
    #[id = "gain"]
    pub gain: FloatParam,
}

// Helper to format gain in dB
fn format_db(v: f32) -> String {
    format!("{:.1} dB", v)
}

// -----------------------------------------------------------------------------
// PLUGIN STRUCT
// -----------------------------------------------------------------------------
pub struct GainDialPlugin {
    params: Arc<GainDialParams>,
    editor_state: Arc<ViziaState>,

    // Metering
    meters: Arc<Meters>,
    peak_tracker: PeakTracker,
}

impl Default for GainDialPlugin {
    fn default() -> Self {
        let meters = Arc::new(Meters::new());

        Self {
            params: Arc::new(GainDialParams {
                gain: FloatParam::new(
                    "Gain",
                    0.0,
                    FloatRange::Linear {
                        min: -48.0,
                        max: 12.0,
                    },
                )
                .with_value_to_string(Arc::new(format_db)),
            }),
            editor_state: ViziaState::new(|| (400, 400)),
            peak_tracker: PeakTracker::new(meters.clone()),
            meters,
        }
    }
}

impl Plugin for GainDialPlugin {
    const NAME: &'static str = "GainDial";
    const VENDOR: &'static str = "GainDial Audio";
    const URL: &'static str = "";
    const EMAIL: &'static str = "";
    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    const AUDIO_IO_LAYOUTS: &'static [AudioIOLayout] = &[AudioIOLayout {
        main_input_channels: NonZeroU32::new(2),
        main_output_channels: NonZeroU32::new(2),
        ..AudioIOLayout::const_default()
    }];

    const MIDI_INPUT: MidiConfig = MidiConfig::None;
    const SAMPLE_ACCURATE_AUTOMATION: bool = true;

    type SysExMessage = ();
    type BackgroundTask = ();

    fn params(&self) -> Arc<dyn Params> {
        self.params.clone()
    }

    fn initialize(
        &mut self,
        _audio_io_layout: &AudioIOLayout,
        buffer_config: &BufferConfig,
        _context: &mut impl InitContext<Self>,
    ) -> bool {
        #[cfg(feature = "debug")]
        crate::debug::logger::init_logger();

        crate::dial_log!(
            "initialize: {} Hz, max block {}",
            buffer_config.sample_rate,
            buffer_config.max_buffer_size
        );

        true
    }

    fn editor(&mut self, _async_executor: AsyncExecutor<Self>) -> Option<Box<dyn Editor>> {
        let params = self.params.clone();
        let meters = self.meters.clone();
        create_vizia_editor(
            self.editor_state.clone(),
            ViziaTheming::default(),
            move |cx, gui_context| {
                ui::build_ui(cx, params.clone(), meters.clone(), gui_context);
            },
        )
    }

    fn process(
        &mut self,
        buffer: &mut Buffer,
        _aux: &mut AuxiliaryBuffers,
        _context: &mut impl ProcessContext<Self>,
    ) -> ProcessStatus {
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| self.process_internal(buffer)))
            .unwrap_or(ProcessStatus::Normal)
    }

    fn reset(&mut self) {
        // A host restart starts a fresh metering window.
        self.meters.reset();
    }
}

impl GainDialPlugin {
    fn process_internal(&mut self, buffer: &mut Buffer) -> ProcessStatus {
        let gain = util::db_to_gain(self.params.gain.value());

        for channel in buffer.as_slice() {
            for sample in channel.iter_mut() {
                *sample *= gain;
            }

            // Meter the post-gain signal: the clip lamp reflects what the
            // host receives.
            self.peak_tracker.process(channel);
        }

        ProcessStatus::Normal
    }
}

impl ClapPlugin for GainDialPlugin {
    const CLAP_ID: &'static str = "com.gaindial.gaindial";
    const CLAP_DESCRIPTION: Option<&'static str> =
        Some("Gain control with peak and clip metering");
    const CLAP_MANUAL_URL: Option<&'static str> = None;
    const CLAP_SUPPORT_URL: Option<&'static str> = None;
    const CLAP_FEATURES: &'static [ClapFeature] = &[
        ClapFeature::AudioEffect,
        ClapFeature::Utility,
        ClapFeature::Stereo,
    ];
}

impl Vst3Plugin for GainDialPlugin {
    const VST3_CLASS_ID: [u8; 16] = *b"GainDialRotary01";
    const VST3_SUBCATEGORIES: &'static [Vst3SubCategory] =
        &[Vst3SubCategory::Fx, Vst3SubCategory::Tools];
}

nih_export_clap!(GainDialPlugin);
nih_export_vst3!(GainDialPlugin);
