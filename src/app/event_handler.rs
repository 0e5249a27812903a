use std::cell::RefCell;
use std::rc::Rc;

use super::recording;
use super::reply;
use super::state::{ActiveView, AppEvent, AppState};
use crate::{library, search, ui};

/// Handle an app event. This is the core state machine: every interaction
/// funnels through here and mutates state exactly once.
pub fn handle_app_event(state: &Rc<RefCell<AppState>>, event: AppEvent) {
    match event {
        AppEvent::RecordPressed { source, y } => {
            let started = {
                let mut s = state.borrow_mut();
                s.stop_tap_armed = s.gesture.is_locked();
                let was_recording = s.gesture.is_recording();
                s.gesture.press(source, y);
                !was_recording && s.gesture.is_recording()
            };
            if started {
                recording::start_feedback(state);
            }
        }
        AppEvent::RecordDragged { source, y } => {
            let locked = state.borrow_mut().gesture.motion(source, y);
            if locked {
                log::info!("Recording locked");
                if let Some(ref shell) = state.borrow().shell {
                    shell.home.status_label.set_text(recording::STATUS_LOCKED);
                }
            }
            recording::sync_visuals(state);
        }
        AppEvent::RecordReleased => {
            let discarded = {
                let mut s = state.borrow_mut();
                let held = s.gesture.is_recording() && !s.gesture.is_locked();
                s.gesture.release();
                held
            };
            if discarded {
                recording::stop_feedback(state);
            }
        }
        AppEvent::StopTapped => {
            let stopped = {
                let mut s = state.borrow_mut();
                let armed = std::mem::take(&mut s.stop_tap_armed);
                armed && s.gesture.stop()
            };
            if stopped {
                recording::stop_feedback(state);
            }
        }
        AppEvent::ViewChanged(view) => {
            let cancelling = {
                let s = state.borrow();
                s.active_view == ActiveView::Home
                    && view != ActiveView::Home
                    && s.gesture.is_recording()
            };
            if cancelling {
                // Leaving Home discards the recording, locked or not.
                log::info!("View switched mid-recording; cancelling gesture");
                state.borrow_mut().gesture.cancel();
                recording::stop_feedback(state);
            }
            state.borrow_mut().active_view = view;
        }
        AppEvent::SearchChanged(query) => {
            let s = state.borrow();
            if let Some(ref shell) = s.shell {
                let results = search::filter(&query, library::SAVED_TRANSCRIPTIONS);
                ui::saves::populate(&shell.saves, &results);
            }
        }
        AppEvent::ChatSubmitted(text) => {
            let submitted = state.borrow_mut().chat.submit(&text);
            match submitted {
                Some(seq) => {
                    {
                        let s = state.borrow();
                        if let (Some(ref shell), Some(message)) =
                            (&s.shell, s.chat.messages().last())
                        {
                            ui::chatbot::append_message(&shell.chatbot, message);
                            ui::chatbot::scroll_to_bottom(&shell.chatbot);
                        }
                    }
                    reply::schedule(state, seq);
                }
                None => log::debug!("Ignoring empty chat input"),
            }
        }
        AppEvent::ReplyDue(user_seq) => {
            reply::on_due(state, user_seq);
        }
        AppEvent::RecordingTick => {
            recording::on_tick(state);
        }
    }
}
