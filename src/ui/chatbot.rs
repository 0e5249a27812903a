use gtk4::prelude::*;

use crate::app::{AppEvent, ChatMessage, Role};

/// Handles returned from building the Chatbot view.
pub struct ChatbotWidgets {
    pub root: gtk4::Box,
    pub message_list: gtk4::Box,
    pub scrolled: gtk4::ScrolledWindow,
}

/// Build the Chatbot view: header, message list, input row.
pub fn build_chatbot(sender: async_channel::Sender<AppEvent>) -> ChatbotWidgets {
    let root = gtk4::Box::new(gtk4::Orientation::Vertical, 0);

    // Header
    let header = gtk4::Box::new(gtk4::Orientation::Horizontal, 12);
    header.set_margin_start(16);
    header.set_margin_end(16);
    header.set_margin_top(16);
    header.set_margin_bottom(12);

    let avatar = gtk4::Image::from_icon_name("user-info-symbolic");
    avatar.set_pixel_size(28);
    avatar.add_css_class("bot-avatar");
    header.append(&avatar);

    let titles = gtk4::Box::new(gtk4::Orientation::Vertical, 2);
    let title = gtk4::Label::new(Some("Transcript Assistant"));
    title.add_css_class("heading");
    title.set_xalign(0.0);
    let subtitle = gtk4::Label::new(Some("Ask me about your transcriptions"));
    subtitle.add_css_class("dim-label");
    subtitle.add_css_class("caption");
    subtitle.set_xalign(0.0);
    titles.append(&title);
    titles.append(&subtitle);
    header.append(&titles);
    root.append(&header);
    root.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));

    // Messages
    let message_list = gtk4::Box::new(gtk4::Orientation::Vertical, 10);
    message_list.set_margin_start(16);
    message_list.set_margin_end(16);
    message_list.set_margin_top(12);
    message_list.set_margin_bottom(12);
    message_list.set_valign(gtk4::Align::Start);

    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .vexpand(true)
        .child(&message_list)
        .build();
    root.append(&scrolled);

    // Input row
    root.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));
    let input_row = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
    input_row.set_margin_start(16);
    input_row.set_margin_end(16);
    input_row.set_margin_top(12);
    input_row.set_margin_bottom(12);

    let entry = gtk4::Entry::new();
    entry.set_placeholder_text(Some("Ask about your transcriptions..."));
    entry.set_hexpand(true);
    input_row.append(&entry);

    let send_button = gtk4::Button::from_icon_name("document-send-symbolic");
    send_button.add_css_class("suggested-action");
    send_button.set_sensitive(false);
    send_button.set_tooltip_text(Some("Send"));
    input_row.append(&send_button);
    root.append(&input_row);

    // Blank input keeps the send button desensitized.
    {
        let send_button = send_button.clone();
        entry.connect_changed(move |entry| {
            send_button.set_sensitive(!entry.text().trim().is_empty());
        });
    }

    {
        let sender = sender.clone();
        let entry_for_send = entry.clone();
        let send = move || {
            let text = entry_for_send.text().to_string();
            if text.trim().is_empty() {
                return;
            }
            let _ = sender.try_send(AppEvent::ChatSubmitted(text));
            entry_for_send.set_text("");
        };

        let send_for_click = send.clone();
        send_button.connect_clicked(move |_| send_for_click());
        entry.connect_activate(move |_| send());
    }

    ChatbotWidgets {
        root,
        message_list,
        scrolled,
    }
}

/// Append one message bubble to the list.
pub fn append_message(chatbot: &ChatbotWidgets, message: &ChatMessage) {
    let row = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);

    let bubble = gtk4::Label::new(Some(&message.content));
    bubble.set_wrap(true);
    bubble.set_max_width_chars(34);
    bubble.set_xalign(0.0);
    bubble.add_css_class("chat-bubble");
    bubble.set_tooltip_text(Some(&message.timestamp.format("%H:%M").to_string()));

    match message.role {
        Role::User => {
            bubble.add_css_class("user");
            row.set_halign(gtk4::Align::End);
        }
        Role::Assistant => {
            bubble.add_css_class("assistant");
            row.set_halign(gtk4::Align::Start);
        }
    }

    row.append(&bubble);
    chatbot.message_list.append(&row);
}

/// Scroll the message list to the newest bubble once sizes settle.
pub fn scroll_to_bottom(chatbot: &ChatbotWidgets) {
    let adjustment = chatbot.scrolled.vadjustment();
    gtk4::glib::idle_add_local_once(move || {
        adjustment.set_value(adjustment.upper() - adjustment.page_size());
    });
}
