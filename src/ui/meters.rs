//! Meter display widgets: the numeric peak readout and the clip lamp.
//!
//! Both render purely from the latest `DisplayFrame` in the UI model, and
//! both double as reset targets: a click on either clears the shared
//! meter state.

use nih_plug_vizia::vizia::prelude::*;
use nih_plug_vizia::vizia::vg;

use crate::ui::state::{format_peak_db, GainDialData, MeterEvent};

/// Round indicator lamp with exactly two states: dim when idle, alert red
/// with a glow once clipping has latched.
pub struct ClipLamp {
    active: bool,
}

impl ClipLamp {
    pub fn new(cx: &mut Context, active: bool) -> Handle<'_, Self> {
        Self { active }.build(cx, |_| {})
    }
}

impl View for ClipLamp {
    fn element(&self) -> Option<&'static str> {
        Some("clip-lamp")
    }

    fn draw(&self, cx: &mut DrawContext, canvas: &mut Canvas) {
        let b = cx.bounds();
        let radius = (b.w.min(b.h)) * 0.5 - 1.0;
        let cx0 = b.x + b.w * 0.5;
        let cy0 = b.y + b.h * 0.5;

        let colour = if self.active {
            vg::Color::rgb(239, 68, 68)
        } else {
            vg::Color::rgb(70, 26, 26)
        };

        let mut lamp = vg::Path::new();
        lamp.circle(cx0, cy0, radius);
        canvas.fill_path(&lamp, &vg::Paint::color(colour));

        if self.active {
            canvas.global_composite_operation(vg::CompositeOperation::Lighter);
            let mut glow = vg::Path::new();
            glow.circle(cx0, cy0, radius * 1.5);
            canvas.fill_path(&glow, &vg::Paint::color(vg::Color::rgba(239, 68, 68, 100)));
            canvas.global_composite_operation(vg::CompositeOperation::SourceOver);
        }
    }
}

/// The meter column: "PEAK" header, dB readout, clip indicator.
pub fn build_meter_panel(cx: &mut Context) -> Handle<'_, VStack> {
    VStack::new(cx, |cx| {
        Label::new(cx, "PEAK").class("meter-header");

        Label::new(
            cx,
            GainDialData::frame.map(|frame| format_peak_db(frame.peak_db)),
        )
        .class("meter-readout")
        .on_mouse_down(|cx, button| {
            if button == MouseButton::Left {
                cx.emit(MeterEvent::Reset);
            }
        });

        Binding::new(
            cx,
            GainDialData::frame.map(|frame| frame.clip_active),
            |cx, lens| {
                let active = lens.get(cx);

                HStack::new(cx, move |cx| {
                    ClipLamp::new(cx, active).class("clip-lamp-body");
                    Label::new(cx, "CLIP")
                        .class(if active { "clip-text-active" } else { "clip-text" })
                        .hoverable(false);
                })
                .class("clip-row")
                .on_mouse_down(|cx, button| {
                    if button == MouseButton::Left {
                        cx.emit(MeterEvent::Reset);
                    }
                });
            },
        );
    })
    .class("meter-panel")
}
