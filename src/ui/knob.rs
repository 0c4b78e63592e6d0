//! The rotary gain knob: pure dial geometry plus the vizia widget that
//! draws it.
//!
//! All geometry is a function of the widget bounds and the current
//! normalized parameter value, recomputed on every paint. The fill arc
//! grows outward from the 12 o'clock centre of the sweep rather than from
//! one endpoint.

use nih_plug::params::Param;
use nih_plug_vizia::vizia::prelude::*;
use nih_plug_vizia::vizia::vg;
use nih_plug_vizia::widgets::param_base::ParamWidgetBase;
use nih_plug_vizia::widgets::ParamSlider;
use std::f32::consts::PI;
use std::sync::Arc;

use crate::ui::state::GainDialData;
use crate::GainDialParams;

/// Sweep of the dial, in femtovg's convention: radians from the positive
/// x axis, clockwise positive. -225 deg .. 45 deg puts the sweep centre at
/// 12 o'clock.
pub const START_ANGLE: f32 = -1.25 * PI;
pub const END_ANGLE: f32 = 0.25 * PI;

/// Inset from the dial square to the knob body.
pub const DIAL_INSET: f32 = 25.0;
/// Inset from the dial square to the arc track.
pub const ARC_INSET: f32 = 15.0;

pub const POINTER_THICKNESS: f32 = 4.0;
/// Radius where the pointer leaves the hub.
pub const POINTER_HUB_RADIUS: f32 = 55.0;
/// Gap between the pointer tip and the arc track.
pub const POINTER_TIP_INSET: f32 = 10.0;

/// Concentric dial measurements for a widget bounding box. Position only
/// moves the centre; every radius depends on `min(w, h)` alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub centre_x: f32,
    pub centre_y: f32,
    pub body_radius: f32,
    pub arc_radius: f32,
}

pub fn dial_geometry(x: f32, y: f32, w: f32, h: f32) -> DialGeometry {
    let diameter = w.min(h);
    DialGeometry {
        centre_x: x + w * 0.5,
        centre_y: y + h * 0.5,
        body_radius: (diameter * 0.5 - DIAL_INSET).max(0.0),
        arc_radius: (diameter * 0.5 - ARC_INSET).max(0.0),
    }
}

/// Pointer angle for a normalized position.
pub fn pointer_angle(t: f32) -> f32 {
    START_ANGLE + t.clamp(0.0, 1.0) * (END_ANGLE - START_ANGLE)
}

/// Centre of the sweep; the value fill is anchored here.
pub fn centre_angle() -> f32 {
    (START_ANGLE + END_ANGLE) * 0.5
}

/// Endpoints of the value-fill arc, ordered so the sweep direction matches
/// the background arc. Degenerates to a zero-length arc at `t = 0.5`.
pub fn fill_arc(t: f32) -> (f32, f32) {
    let pointer = pointer_angle(t);
    let centre = centre_angle();
    if pointer >= centre {
        (centre, pointer)
    } else {
        (pointer, centre)
    }
}

/// Corners of the pointer rectangle, rotated about the dial centre by
/// `angle`. Computed with cos/sin so the path is the same on every host at
/// the same size.
pub fn pointer_corners(geometry: &DialGeometry, angle: f32) -> [[f32; 2]; 4] {
    let inner = POINTER_HUB_RADIUS.min(geometry.arc_radius);
    let outer = (geometry.arc_radius - POINTER_TIP_INSET).max(inner);
    let (sin, cos) = angle.sin_cos();
    let half = POINTER_THICKNESS * 0.5;

    // Unit vector along the pointer and its perpendicular.
    let (dx, dy) = (cos, sin);
    let (px, py) = (-sin, cos);
    let cx = geometry.centre_x;
    let cy = geometry.centre_y;

    [
        [cx + dx * inner - px * half, cy + dy * inner - py * half],
        [cx + dx * outer - px * half, cy + dy * outer - py * half],
        [cx + dx * outer + px * half, cy + dy * outer + py * half],
        [cx + dx * inner + px * half, cy + dy * inner + py * half],
    ]
}

pub struct KnobVisuals {
    params: Arc<GainDialParams>,
}

impl KnobVisuals {
    pub fn new(cx: &mut Context, params: Arc<GainDialParams>) -> Handle<'_, Self> {
        Self { params }.build(cx, |_| {})
    }
}

impl View for KnobVisuals {
    fn element(&self) -> Option<&'static str> {
        Some("knob-visuals")
    }

    fn draw(&self, cx: &mut DrawContext, canvas: &mut Canvas) {
        let b = cx.bounds();
        let geometry = dial_geometry(b.x, b.y, b.w, b.h);
        let t = self
            .params
            .gain
            .modulated_normalized_value()
            .clamp(0.0, 1.0);

        // Knob body
        let mut body = vg::Path::new();
        body.circle(geometry.centre_x, geometry.centre_y, geometry.body_radius);
        canvas.fill_path(&body, &vg::Paint::color(vg::Color::rgb(85, 85, 85)));

        // Background arc over the full sweep
        let mut track = vg::Path::new();
        track.arc(
            geometry.centre_x,
            geometry.centre_y,
            geometry.arc_radius,
            START_ANGLE,
            END_ANGLE,
            vg::Solidity::Hole,
        );
        canvas.stroke_path(
            &track,
            &vg::Paint::color(vg::Color::rgb(59, 59, 59)).with_line_width(10.0),
        );

        // Value fill, anchored at 12 o'clock
        let (from, to) = fill_arc(t);
        if to - from > f32::EPSILON {
            let mut fill = vg::Path::new();
            fill.arc(
                geometry.centre_x,
                geometry.centre_y,
                geometry.arc_radius,
                from,
                to,
                vg::Solidity::Hole,
            );
            canvas.stroke_path(
                &fill,
                &vg::Paint::color(vg::Color::rgb(14, 167, 181)).with_line_width(4.0),
            );
        }

        // Inner rim
        let mut rim = vg::Path::new();
        rim.circle(
            geometry.centre_x,
            geometry.centre_y,
            (geometry.body_radius - 6.0).max(0.0),
        );
        canvas.stroke_path(
            &rim,
            &vg::Paint::color(vg::Color::rgba(59, 59, 59, 178)).with_line_width(4.0),
        );

        // Pointer
        let corners = pointer_corners(&geometry, pointer_angle(t));
        let mut pointer = vg::Path::new();
        pointer.move_to(corners[0][0], corners[0][1]);
        for corner in &corners[1..] {
            pointer.line_to(corner[0], corner[1]);
        }
        pointer.close();
        canvas.fill_path(&pointer, &vg::Paint::color(vg::Color::rgb(14, 167, 181)));
    }
}

/// The complete knob: caption, custom visuals, value readout, and an
/// invisible `ParamSlider` on top for the actual gesture handling.
pub fn gain_knob(cx: &mut Context, params: Arc<GainDialParams>) -> Handle<'_, VStack> {
    VStack::new(cx, move |cx| {
        Label::new(cx, "GAIN").class("knob-label");

        ZStack::new(cx, move |cx| {
            KnobVisuals::new(cx, params.clone()).class("fill-both");

            ParamSlider::new(cx, GainDialData::params, |params| &params.gain)
                .class("fill-both")
                .class("input-hidden")
                .z_index(1);
        })
        .class("knob-visual");

        let lens = ParamWidgetBase::make_lens(
            GainDialData::params,
            |params| &params.gain,
            |param| param.normalized_value_to_string(param.unmodulated_normalized_value(), true),
        );
        Label::new(cx, lens).class("knob-value").hoverable(false);
    })
    .class("knob-container")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_angle_spans_the_sweep() {
        assert!((pointer_angle(0.0) - START_ANGLE).abs() < 1e-6);
        assert!((pointer_angle(1.0) - END_ANGLE).abs() < 1e-6);
        assert!((pointer_angle(0.5) - centre_angle()).abs() < 1e-6);
    }

    #[test]
    fn centre_angle_points_straight_up() {
        // -90 degrees in this convention.
        assert!((centre_angle() + 0.5 * PI).abs() < 1e-6);
    }

    #[test]
    fn fill_arc_degenerates_at_the_midpoint() {
        let (from, to) = fill_arc(0.5);
        assert!((to - from).abs() < 1e-6);
    }

    #[test]
    fn fill_arc_is_ordered_on_both_sides() {
        let (from, to) = fill_arc(0.0);
        assert!((from - START_ANGLE).abs() < 1e-6);
        assert!((to - centre_angle()).abs() < 1e-6);

        let (from, to) = fill_arc(1.0);
        assert!((from - centre_angle()).abs() < 1e-6);
        assert!((to - END_ANGLE).abs() < 1e-6);
    }

    #[test]
    fn geometry_depends_only_on_the_shorter_side() {
        let square = dial_geometry(0.0, 0.0, 400.0, 400.0);
        assert_eq!(square.centre_x, 200.0);
        assert_eq!(square.centre_y, 200.0);
        assert_eq!(square.body_radius, 175.0);
        assert_eq!(square.arc_radius, 185.0);

        // A wider box keeps the same radii.
        let wide = dial_geometry(0.0, 0.0, 640.0, 400.0);
        assert_eq!(wide.body_radius, square.body_radius);
        assert_eq!(wide.arc_radius, square.arc_radius);
    }

    #[test]
    fn geometry_translates_with_the_bounds() {
        let at_origin = dial_geometry(0.0, 0.0, 300.0, 300.0);
        let moved = dial_geometry(50.0, 30.0, 300.0, 300.0);
        assert_eq!(moved.centre_x - at_origin.centre_x, 50.0);
        assert_eq!(moved.centre_y - at_origin.centre_y, 30.0);
        assert_eq!(moved.body_radius, at_origin.body_radius);
        assert_eq!(moved.arc_radius, at_origin.arc_radius);
    }

    #[test]
    fn pointer_is_vertical_at_the_midpoint() {
        let geometry = dial_geometry(0.0, 0.0, 400.0, 400.0);
        let corners = pointer_corners(&geometry, pointer_angle(0.5));

        for corner in &corners {
            assert!((corner[0] - geometry.centre_x).abs() <= POINTER_THICKNESS * 0.5 + 1e-4);
            // Above the centre: smaller y.
            assert!(corner[1] < geometry.centre_y);
        }

        let min_y = corners.iter().map(|c| c[1]).fold(f32::INFINITY, f32::min);
        let max_y = corners
            .iter()
            .map(|c| c[1])
            .fold(f32::NEG_INFINITY, f32::max);
        assert!((max_y - (geometry.centre_y - POINTER_HUB_RADIUS)).abs() < 1e-4);
        assert!(
            (min_y - (geometry.centre_y - (geometry.arc_radius - POINTER_TIP_INSET))).abs() < 1e-4
        );
    }
}
