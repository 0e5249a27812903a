use std::cell::RefCell;
use std::rc::Rc;

use gtk4::glib;

use super::state::{AppEvent, AppState};
use crate::ui;

/// Schedule the assistant reply for the user message `user_seq` after the
/// configured typing delay. Each submission gets its own one-shot timer;
/// the SourceId is kept so teardown can cancel it.
pub fn schedule(state: &Rc<RefCell<AppState>>, user_seq: u64) {
    let delay_ms = state.borrow().config.reply_delay_ms;
    let sender = state.borrow().event_sender.clone();

    let source = glib::timeout_add_local_once(
        std::time::Duration::from_millis(delay_ms),
        move || {
            let _ = sender.try_send(AppEvent::ReplyDue(user_seq));
        },
    );
    state.borrow_mut().pending_replies.push((user_seq, source));
    log::info!("Assistant reply for message {user_seq} scheduled in {delay_ms}ms");
}

/// A reply timer fired: deliver the assistant message and render it. A seq
/// with no matching user message delivers nothing.
pub fn on_due(state: &Rc<RefCell<AppState>>, user_seq: u64) {
    // The source has already fired; just forget its id.
    state
        .borrow_mut()
        .pending_replies
        .retain(|(seq, _)| *seq != user_seq);

    let delivered = state.borrow_mut().chat.deliver_reply(user_seq).cloned();
    match delivered {
        Some(message) => {
            let s = state.borrow();
            if let Some(ref shell) = s.shell {
                ui::chatbot::append_message(&shell.chatbot, &message);
                ui::chatbot::scroll_to_bottom(&shell.chatbot);
            }
        }
        None => log::warn!("Reply target {user_seq} is gone; dropping"),
    }
}

/// Cancel every outstanding reply timer. Runs on window close so a
/// scheduled append can never outlive the chat session.
pub fn cancel_pending(state: &Rc<RefCell<AppState>>) {
    let pending: Vec<_> = state.borrow_mut().pending_replies.drain(..).collect();
    for (seq, source) in pending {
        log::info!("Cancelling pending reply for message {seq}");
        source.remove();
    }
}
