use gtk4::prelude::*;
use libadwaita::prelude::*;

use super::chatbot::{self, ChatbotWidgets};
use super::home::{self, HomeWidgets};
use super::saves::{self, SavesWidgets};
use crate::app::{ActiveView, AppEvent};

/// Handles returned from building the main window.
pub struct ShellWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub home: HomeWidgets,
    pub saves: SavesWidgets,
    pub chatbot: ChatbotWidgets,
}

/// Build the phone-shaped main window: a view stack over a bottom tab bar.
pub fn build_shell(
    app: &libadwaita::Application,
    sender: async_channel::Sender<AppEvent>,
) -> ShellWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("VoicePad")
        .default_width(420)
        .default_height(780)
        .build();

    install_css();

    let home = home::build_home(sender.clone());
    let saves = saves::build_saves(sender.clone());
    let chatbot = chatbot::build_chatbot(sender.clone());

    let stack = libadwaita::ViewStack::new();
    stack.add_titled_with_icon(&home.root, Some("home"), "Home", "go-home-symbolic");
    stack.add_titled_with_icon(
        &saves.root,
        Some("saves"),
        "Saves",
        "folder-documents-symbolic",
    );
    stack.add_titled_with_icon(
        &chatbot.root,
        Some("chatbot"),
        "Chatbot",
        "user-available-symbolic",
    );

    {
        let sender = sender.clone();
        stack.connect_visible_child_name_notify(move |stack| {
            if let Some(name) = stack.visible_child_name() {
                if let Some(view) = ActiveView::from_name(name.as_str()) {
                    let _ = sender.try_send(AppEvent::ViewChanged(view));
                }
            }
        });
    }

    let switcher = libadwaita::ViewSwitcherBar::builder()
        .stack(&stack)
        .reveal(true)
        .build();

    let toolbar_view = libadwaita::ToolbarView::new();
    toolbar_view.set_content(Some(&stack));
    toolbar_view.add_bottom_bar(&switcher);
    window.set_content(Some(&toolbar_view));

    ShellWidgets {
        window,
        home,
        saves,
        chatbot,
    }
}

/// Shared styling for the record control, chat bubbles and recents chips.
fn install_css() {
    let css_provider = gtk4::CssProvider::new();
    css_provider.load_from_string(
        r#"
        .recording-timer {
            color: #ff3b30;
            font-family: monospace;
        }
        .recent-chip {
            background-color: alpha(currentColor, 0.06);
            border-radius: 18px;
            padding: 8px 14px;
        }
        .recents-panel {
            margin-top: 8px;
        }
        .chat-bubble {
            border-radius: 14px;
            padding: 10px 14px;
        }
        .chat-bubble.user {
            background-color: #3584e4;
            color: white;
        }
        .chat-bubble.assistant {
            background-color: alpha(currentColor, 0.08);
        }
        .bot-avatar {
            color: #3584e4;
        }
        "#,
    );
    gtk4::style_context_add_provider_for_display(
        &gtk4::gdk::Display::default().unwrap(),
        &css_provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
