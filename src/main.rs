mod app;
mod clipboard;
mod config;
mod library;
mod responder;
mod search;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::glib;
use gtk4::prelude::*;

use app::{AppEvent, AppState};

fn main() {
    env_logger::init();
    log::info!("VoicePad starting");

    let application = libadwaita::Application::builder()
        .application_id("io.github.voicepad")
        .build();

    application.connect_activate(on_activate);
    application.run();
}

fn on_activate(application: &libadwaita::Application) {
    // UI signal handlers send events here; one local future dispatches them.
    let (event_tx, event_rx) = async_channel::unbounded::<AppEvent>();

    let state = Rc::new(RefCell::new(AppState::new(event_tx.clone())));

    let shell = ui::shell::build_shell(application, event_tx);

    // Seed the views with the static sample data.
    ui::saves::populate(
        &shell.saves,
        &search::filter("", library::SAVED_TRANSCRIPTIONS),
    );
    for message in state.borrow().chat.messages() {
        ui::chatbot::append_message(&shell.chatbot, message);
    }

    // A scheduled assistant reply must never outlive the session.
    {
        let state_clone = state.clone();
        shell.window.connect_close_request(move |_| {
            app::cancel_pending_replies(&state_clone);
            glib::Propagation::Proceed
        });
    }

    {
        let mut s = state.borrow_mut();
        s.shell = Some(shell);
    }

    if let Some(ref shell) = state.borrow().shell {
        shell.window.present();
    }

    // Attach the app event handler.
    {
        let state_clone = state.clone();
        glib::spawn_future_local(async move {
            while let Ok(event) = event_rx.recv().await {
                app::handle_app_event(&state_clone, event);
            }
        });
    }
}
