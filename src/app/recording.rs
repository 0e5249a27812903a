use std::cell::RefCell;
use std::rc::Rc;

use gtk4::glib;

use super::state::{AppEvent, AppState};

pub const STATUS_IDLE: &str = "Hold microphone to start recording";
pub const STATUS_HOLDING: &str = "Hold to record or swipe up to lock";
pub const STATUS_LOCKED: &str = "Recording... (Tap to stop)";

/// Start the recording feedback session: elapsed timer, pulse tick, status
/// line. The gesture controller has already moved to Holding.
pub fn start_feedback(state: &Rc<RefCell<AppState>>) {
    log::info!("Recording started");

    {
        let mut s = state.borrow_mut();
        s.recording_start = Some(std::time::Instant::now());
        if let Some(ref shell) = s.shell {
            shell.home.status_label.set_text(STATUS_HOLDING);
            shell.home.timer_label.set_text("\u{25CF} 00:00");
            shell.home.timer_label.set_visible(true);
        }
    }
    sync_visuals(state);

    // 80ms tick for the pulse animation and elapsed timer.
    let sender = state.borrow().event_sender.clone();
    let source = glib::timeout_add_local(std::time::Duration::from_millis(80), move || {
        let _ = sender.try_send(AppEvent::RecordingTick);
        glib::ControlFlow::Continue
    });
    state.borrow_mut().tick_source = Some(source);
}

/// Tear down the recording feedback and return the status line to idle.
pub fn stop_feedback(state: &Rc<RefCell<AppState>>) {
    log::info!("Recording stopped");

    {
        let mut s = state.borrow_mut();
        if let Some(source) = s.tick_source.take() {
            source.remove();
        }
        s.recording_start = None;
        if let Some(ref shell) = s.shell {
            shell.home.status_label.set_text(STATUS_IDLE);
            shell.home.timer_label.set_visible(false);
        }
    }
    sync_visuals(state);
}

/// One recording tick: advance the pulse phase and refresh the timer.
pub fn on_tick(state: &Rc<RefCell<AppState>>) {
    let s = state.borrow();
    let (Some(start), Some(ref shell)) = (s.recording_start, &s.shell) else {
        return;
    };

    let elapsed = start.elapsed().as_secs();
    let mins = elapsed / 60;
    let secs = elapsed % 60;
    shell
        .home
        .timer_label
        .set_text(&format!("\u{25CF} {mins:02}:{secs:02}"));

    let phase = shell.home.pulse_phase.get();
    shell.home.pulse_phase.set((phase + 0.08) % 1.0);
    shell.home.record_area.queue_draw();
}

/// Push the gesture controller's visual snapshot into the Home widgets.
pub fn sync_visuals(state: &Rc<RefCell<AppState>>) {
    let s = state.borrow();
    let visuals = s.gesture.visuals();
    if let Some(ref shell) = s.shell {
        shell.home.visuals.set(visuals);
        shell.home.lock_hint.set_opacity(visuals.lock_hint_opacity);
        shell.home.record_area.queue_draw();
    }
}
