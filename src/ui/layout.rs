//! Layout builders for the GainDial editor
//!
//! Builds the editor tree (header band, knob, meter column) and starts the
//! meter refresh loop: a fixed-period timer on the UI thread that polls the
//! shared meter state, converts it to display units, and repaints.

use std::sync::Arc;
use std::time::Duration;

use nih_plug::prelude::GuiContext;
use nih_plug_vizia::vizia::prelude::*;

use crate::meters::Meters;
use crate::ui::knob::gain_knob;
use crate::ui::meters::build_meter_panel;
use crate::ui::state::{DisplayFrame, GainDialData, MeterEvent};
use crate::GainDialParams;

/// Meter poll period. Display latency is bounded by one period plus render
/// time; each tick is one bounded unit of work that never waits on the
/// audio thread.
pub const METER_REFRESH_INTERVAL: Duration = Duration::from_millis(25);

// Include the CSS style
const STYLE: &str = include_str!("../ui.css");

pub fn build_ui(
    cx: &mut Context,
    params: Arc<GainDialParams>,
    meters: Arc<Meters>,
    _gui_context: Arc<dyn GuiContext>,
) {
    if let Err(e) = cx.add_stylesheet(STYLE) {
        panic!("embedded stylesheet failed to parse: {:?}", e);
    }

    crate::dial_log!("editor opened");

    GainDialData {
        params: params.clone(),
        meters: meters.clone(),
        frame: DisplayFrame::from_snapshot(meters.snapshot()),
    }
    .build(cx);

    // Meter refresh loop. The timer is owned by the vizia context, so it
    // dies with the editor window and cannot tick into torn-down UI state.
    let poll = meters.clone();
    let refresh = cx.add_timer(METER_REFRESH_INTERVAL, None, move |cx, action| {
        if let TimerAction::Tick(_) = action {
            cx.emit(MeterEvent::Tick(DisplayFrame::from_snapshot(
                poll.snapshot(),
            )));
        }
    });
    cx.start_timer(refresh);

    #[cfg(feature = "debug")]
    {
        let drain = cx.add_timer(Duration::from_millis(250), None, |_, action| {
            if let TimerAction::Tick(_) = action {
                crate::debug::logger::drain_to_file();
            }
        });
        cx.start_timer(drain);
    }

    VStack::new(cx, move |cx| {
        build_header(cx);

        HStack::new(cx, move |cx| {
            gain_knob(cx, params.clone());
            build_meter_panel(cx);
        })
        .class("body");
    })
    .class("app-root");
}

fn build_header(cx: &mut Context) -> Handle<'_, HStack> {
    HStack::new(cx, |cx| {
        Label::new(cx, "GAINDIAL").class("header-title");
    })
    .class("header")
}
