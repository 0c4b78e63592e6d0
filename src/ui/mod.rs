//! GainDial editor module
//!
//! Modular organization of the Vizia GUI:
//! - `state`: Data model, display frame, meter events
//! - `knob`: Rotary gain knob (geometry + widget)
//! - `meters`: Peak readout and clip lamp widgets
//! - `layout`: Top-level layout and the refresh timer

pub mod knob;
pub mod layout;
pub mod meters;
pub mod state;

// Main UI entry point
pub use layout::build_ui;
