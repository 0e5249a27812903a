use std::cell::Cell;
use std::rc::Rc;

use gtk4::gdk;
use gtk4::prelude::*;

use crate::app::{AppEvent, GestureVisuals, PointerSource};
use crate::library::RECENT_TRANSCRIPTIONS;

const ACCENT: (f64, f64, f64) = (0.208, 0.518, 0.894);

/// Handles returned from building the Home view.
pub struct HomeWidgets {
    pub root: gtk4::Box,
    pub status_label: gtk4::Label,
    pub lock_hint: gtk4::Box,
    pub record_area: gtk4::DrawingArea,
    pub timer_label: gtk4::Label,
    /// Gesture snapshot rendered by the draw func; the event handler
    /// updates it and queues a redraw.
    pub visuals: Rc<Cell<GestureVisuals>>,
    pub pulse_phase: Rc<Cell<f64>>,
}

/// Map the controller's input device to the gesture's pointer source tag.
fn pointer_source<C: IsA<gtk4::EventController>>(controller: &C) -> PointerSource {
    match controller.current_event_device().map(|d| d.source()) {
        Some(gdk::InputSource::Touchscreen) => PointerSource::Touch,
        _ => PointerSource::Mouse,
    }
}

/// Build the Home view: title, record control, recent transcriptions.
pub fn build_home(sender: async_channel::Sender<AppEvent>) -> HomeWidgets {
    let root = gtk4::Box::new(gtk4::Orientation::Vertical, 0);

    let title = gtk4::Label::new(Some("Voice Transcription"));
    title.add_css_class("title-2");
    title.set_margin_top(32);
    root.append(&title);

    let status_label = gtk4::Label::new(Some(crate::app::STATUS_IDLE));
    status_label.add_css_class("dim-label");
    status_label.set_margin_top(8);
    root.append(&status_label);

    // "Release to lock" affordance; opacity follows the drag distance.
    let lock_hint = gtk4::Box::new(gtk4::Orientation::Vertical, 4);
    lock_hint.set_halign(gtk4::Align::Center);
    lock_hint.set_margin_top(20);
    lock_hint.set_opacity(0.0);
    let lock_icon = gtk4::Image::from_icon_name("changes-prevent-symbolic");
    lock_icon.set_pixel_size(28);
    lock_icon.add_css_class("accent");
    let lock_label = gtk4::Label::new(Some("Release to lock"));
    lock_label.add_css_class("accent");
    lock_hint.append(&lock_icon);
    lock_hint.append(&lock_label);
    root.append(&lock_hint);

    let visuals: Rc<Cell<GestureVisuals>> = Rc::new(Cell::new(GestureVisuals {
        lock_hint_opacity: 0.0,
        lift: 0.0,
        scale: 1.0,
        pulsing: false,
    }));
    let pulse_phase: Rc<Cell<f64>> = Rc::new(Cell::new(0.0));

    let record_area = gtk4::DrawingArea::new();
    record_area.set_content_height(300);
    record_area.set_hexpand(true);
    record_area.set_vexpand(true);

    let visuals_for_draw = visuals.clone();
    let pulse_for_draw = pulse_phase.clone();
    record_area.set_draw_func(move |_area, cr, width, height| {
        draw_record_control(cr, width, height, visuals_for_draw.get(), pulse_for_draw.get());
    });

    // Press / drag / release drive the gesture controller via the channel.
    let drag = gtk4::GestureDrag::new();
    {
        let sender = sender.clone();
        drag.connect_drag_begin(move |gesture, _x, y| {
            let source = pointer_source(gesture);
            let _ = sender.try_send(AppEvent::RecordPressed { source, y });
        });
    }
    {
        let sender = sender.clone();
        drag.connect_drag_update(move |gesture, _dx, dy| {
            if let Some((_, start_y)) = gesture.start_point() {
                let source = pointer_source(gesture);
                let _ = sender.try_send(AppEvent::RecordDragged {
                    source,
                    y: start_y + dy,
                });
            }
        });
    }
    {
        let sender = sender.clone();
        drag.connect_drag_end(move |_, _, _| {
            let _ = sender.try_send(AppEvent::RecordReleased);
        });
    }
    record_area.add_controller(drag);

    // Taps stop a locked recording; the dispatcher ignores them otherwise.
    let click = gtk4::GestureClick::new();
    {
        let sender = sender.clone();
        click.connect_released(move |_, _, _, _| {
            let _ = sender.try_send(AppEvent::StopTapped);
        });
    }
    record_area.add_controller(click);

    root.append(&record_area);

    let timer_label = gtk4::Label::new(Some("\u{25CF} 00:00"));
    timer_label.add_css_class("recording-timer");
    timer_label.set_visible(false);
    timer_label.set_margin_bottom(12);
    root.append(&timer_label);

    root.append(&build_recents());

    HomeWidgets {
        root,
        status_label,
        lock_hint,
        record_area,
        timer_label,
        visuals,
        pulse_phase,
    }
}

/// Recent-transcriptions strip at the bottom of Home.
fn build_recents() -> gtk4::Box {
    let panel = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    panel.add_css_class("recents-panel");
    panel.set_margin_start(16);
    panel.set_margin_end(16);
    panel.set_margin_bottom(16);

    let heading = gtk4::Label::new(Some("Recent Transcriptions"));
    heading.add_css_class("heading");
    heading.set_xalign(0.0);
    panel.append(&heading);

    let flow = gtk4::FlowBox::new();
    flow.set_selection_mode(gtk4::SelectionMode::None);
    flow.set_min_children_per_line(2);
    flow.set_max_children_per_line(2);
    flow.set_column_spacing(8);
    flow.set_row_spacing(8);
    flow.set_homogeneous(true);

    for record in RECENT_TRANSCRIPTIONS {
        let chip = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);
        chip.add_css_class("recent-chip");

        let title = gtk4::Label::new(Some(record.title));
        title.set_ellipsize(gtk4::pango::EllipsizeMode::End);
        title.set_hexpand(true);
        title.set_xalign(0.0);
        chip.append(&title);

        let date = gtk4::Label::new(Some(record.date));
        date.add_css_class("dim-label");
        date.add_css_class("caption");
        chip.append(&date);

        flow.insert(&chip, -1);
    }
    panel.append(&flow);

    panel
}

fn draw_record_control(
    cr: &gtk4::cairo::Context,
    width: i32,
    height: i32,
    visuals: GestureVisuals,
    phase: f64,
) {
    use std::f64::consts::TAU;

    let cx = width as f64 / 2.0;
    let radius = 80.0 * visuals.scale;
    let cy = height as f64 - 110.0 - visuals.lift;

    if visuals.pulsing {
        // Expanding ring plus a soft halo around the disc.
        let ring = radius * (1.0 + 0.35 * phase);
        cr.set_source_rgba(ACCENT.0, ACCENT.1, ACCENT.2, 0.3 * (1.0 - phase));
        cr.arc(cx, cy, ring, 0.0, TAU);
        let _ = cr.fill();

        cr.set_source_rgba(ACCENT.0, ACCENT.1, ACCENT.2, 0.2);
        cr.arc(cx, cy, radius * 1.12, 0.0, TAU);
        let _ = cr.fill();
    }

    let disc_alpha = if visuals.pulsing { 1.0 } else { 0.1 };
    cr.set_source_rgba(ACCENT.0, ACCENT.1, ACCENT.2, disc_alpha);
    cr.arc(cx, cy, radius, 0.0, TAU);
    let _ = cr.fill();

    let glyph = if visuals.pulsing {
        (1.0, 1.0, 1.0)
    } else {
        ACCENT
    };
    draw_mic_glyph(cr, cx, cy, radius * 0.5, glyph);
}

/// Microphone glyph: capsule body, pickup bow, stem and base.
fn draw_mic_glyph(cr: &gtk4::cairo::Context, cx: f64, cy: f64, size: f64, rgb: (f64, f64, f64)) {
    use std::f64::consts::{PI, TAU};

    cr.set_source_rgb(rgb.0, rgb.1, rgb.2);

    let body_r = size * 0.28;
    let body_top = cy - size * 0.9;
    let body_bottom = cy + size * 0.15;

    cr.arc(cx, body_top + body_r, body_r, PI, TAU);
    cr.line_to(cx + body_r, body_bottom - body_r);
    cr.arc(cx, body_bottom - body_r, body_r, 0.0, PI);
    cr.close_path();
    let _ = cr.fill();

    cr.set_line_width(size * 0.12);
    cr.set_line_cap(gtk4::cairo::LineCap::Round);
    cr.arc(cx, body_bottom - body_r, size * 0.62, 0.0, PI);
    let _ = cr.stroke();

    cr.move_to(cx, body_bottom - body_r + size * 0.62);
    cr.line_to(cx, cy + size * 0.85);
    cr.move_to(cx - size * 0.35, cy + size * 0.85);
    cr.line_to(cx + size * 0.35, cy + size * 0.85);
    let _ = cr.stroke();
}
