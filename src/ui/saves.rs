use gtk4::prelude::*;
use libadwaita::prelude::*;

use crate::app::AppEvent;
use crate::library::TranscriptionRecord;

/// Handles returned from building the Saves view. `root` doubles as the
/// toast overlay for copy confirmations.
pub struct SavesWidgets {
    pub root: libadwaita::ToastOverlay,
    pub list: gtk4::ListBox,
    pub empty_state: gtk4::Box,
}

/// Build the Saves view: search entry over the transcription list.
pub fn build_saves(sender: async_channel::Sender<AppEvent>) -> SavesWidgets {
    let toast_overlay = libadwaita::ToastOverlay::new();

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);

    let header = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    header.set_margin_start(16);
    header.set_margin_end(16);
    header.set_margin_top(16);
    header.set_margin_bottom(12);

    let title = gtk4::Label::new(Some("All Transcriptions"));
    title.add_css_class("title-2");
    title.set_xalign(0.0);
    header.append(&title);

    let search_entry = gtk4::SearchEntry::new();
    search_entry.set_placeholder_text(Some("Search transcriptions..."));
    {
        let sender = sender.clone();
        search_entry.connect_search_changed(move |entry| {
            let _ = sender.try_send(AppEvent::SearchChanged(entry.text().to_string()));
        });
    }
    header.append(&search_entry);
    content.append(&header);

    let list = gtk4::ListBox::new();
    list.set_selection_mode(gtk4::SelectionMode::None);
    list.add_css_class("boxed-list");
    list.set_margin_start(16);
    list.set_margin_end(16);
    list.set_margin_bottom(16);

    // Shown instead of the list when the filter matches nothing.
    let empty_state = gtk4::Box::new(gtk4::Orientation::Vertical, 8);
    empty_state.set_valign(gtk4::Align::Center);
    empty_state.set_vexpand(true);
    empty_state.set_visible(false);
    let empty_icon = gtk4::Image::from_icon_name("text-x-generic-symbolic");
    empty_icon.set_pixel_size(48);
    empty_icon.add_css_class("dim-label");
    let empty_label = gtk4::Label::new(Some("No transcriptions found"));
    empty_label.add_css_class("dim-label");
    let empty_sub = gtk4::Label::new(Some("Try adjusting your search"));
    empty_sub.add_css_class("dim-label");
    empty_sub.add_css_class("caption");
    empty_state.append(&empty_icon);
    empty_state.append(&empty_label);
    empty_state.append(&empty_sub);

    let body = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    body.append(&list);
    body.append(&empty_state);

    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .vexpand(true)
        .child(&body)
        .build();
    content.append(&scrolled);

    toast_overlay.set_child(Some(&content));

    SavesWidgets {
        root: toast_overlay,
        list,
        empty_state,
    }
}

/// Replace the list contents with the given filter results.
pub fn populate(saves: &SavesWidgets, records: &[&TranscriptionRecord]) {
    saves.list.remove_all();
    for record in records {
        saves.list.append(&build_row(record, &saves.root));
    }
    saves.list.set_visible(!records.is_empty());
    saves.empty_state.set_visible(records.is_empty());
}

/// One expandable transcription row: preview collapsed, full text expanded.
fn build_row(
    record: &TranscriptionRecord,
    toast_overlay: &libadwaita::ToastOverlay,
) -> libadwaita::ExpanderRow {
    let row = libadwaita::ExpanderRow::builder().title(record.title).build();
    row.set_subtitle(&preview_of(record.text));

    if let Some(duration) = record.duration {
        let duration_label = gtk4::Label::new(Some(duration));
        duration_label.add_css_class("dim-label");
        row.add_suffix(&duration_label);
    }

    let copy_btn = gtk4::Button::from_icon_name("edit-copy-symbolic");
    copy_btn.set_valign(gtk4::Align::Center);
    copy_btn.add_css_class("flat");
    copy_btn.set_tooltip_text(Some("Copy to clipboard"));
    let text_for_copy = record.text;
    let toast_for_copy = toast_overlay.clone();
    copy_btn.connect_clicked(move |_| {
        if let Err(e) = crate::clipboard::copy_to_clipboard(text_for_copy) {
            log::warn!("Clipboard error: {e}");
            return;
        }
        let toast = libadwaita::Toast::new("Transcription copied to clipboard");
        toast.set_timeout(2);
        toast_for_copy.add_toast(toast);
    });
    row.add_suffix(&copy_btn);

    let detail_row = libadwaita::ActionRow::new();
    let detail = gtk4::Box::new(gtk4::Orientation::Vertical, 4);
    detail.set_margin_top(4);
    detail.set_margin_bottom(4);
    detail.set_margin_start(8);
    detail.set_margin_end(8);
    let text_label = gtk4::Label::new(Some(record.text));
    text_label.set_wrap(true);
    text_label.set_xalign(0.0);
    text_label.set_selectable(true);
    detail.append(&text_label);
    let date_label = gtk4::Label::new(Some(record.date));
    date_label.add_css_class("dim-label");
    date_label.add_css_class("caption");
    date_label.set_xalign(0.0);
    detail.append(&date_label);
    detail_row.set_child(Some(&detail));
    row.add_row(&detail_row);

    row
}

/// Truncated subtitle preview, cut on a char boundary.
fn preview_of(text: &str) -> String {
    const MAX: usize = 100;
    if text.len() <= MAX {
        return text.to_string();
    }
    let cut = text
        .char_indices()
        .take_while(|(i, _)| *i <= MAX)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0);
    format!("{}...", &text[..cut])
}
