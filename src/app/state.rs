use gtk4::glib;

use crate::app::chat::ChatSession;
use crate::app::gesture::{PointerSource, RecordGesture};
use crate::config::Config;
use crate::ui::shell::ShellWidgets;

/// Events sent from widget signal handlers (and timers) to the dispatcher
/// on the GTK main thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Press-start on the record control, with the pointer source and
    /// widget-space Y coordinate.
    RecordPressed { source: PointerSource, y: f64 },
    /// Pointer moved during a press.
    RecordDragged { source: PointerSource, y: f64 },
    /// Pointer released.
    RecordReleased,
    /// Tap on the record control (stops a locked recording).
    StopTapped,
    /// Bottom tab bar switched views.
    ViewChanged(ActiveView),
    /// Saves search text changed.
    SearchChanged(String),
    /// User pressed send in the chatbot.
    ChatSubmitted(String),
    /// The typing-delay timer for a scheduled assistant reply fired.
    ReplyDue(u64),
    /// 80ms recording tick driving the pulse and elapsed timer.
    RecordingTick,
}

/// The three views behind the bottom tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Home,
    Saves,
    Chatbot,
}

impl ActiveView {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Self::Home),
            "saves" => Some(Self::Saves),
            "chatbot" => Some(Self::Chatbot),
            _ => None,
        }
    }
}

/// Central application state. Lives on the GTK main thread inside
/// Rc<RefCell<>>; each view's data is owned here and nowhere else.
pub struct AppState {
    pub config: Config,
    pub active_view: ActiveView,
    pub gesture: RecordGesture,
    pub chat: ChatSession,
    pub event_sender: async_channel::Sender<AppEvent>,

    // Recording feedback
    pub recording_start: Option<std::time::Instant>,
    pub tick_source: Option<glib::SourceId>,
    /// A tap only stops the recording if its press began while locked;
    /// this keeps the release that just locked from also stopping.
    pub stop_tap_armed: bool,

    // Scheduled assistant replies, keyed by user message seq.
    pub pending_replies: Vec<(u64, glib::SourceId)>,

    // UI handles
    pub shell: Option<ShellWidgets>,
}

impl AppState {
    pub fn new(sender: async_channel::Sender<AppEvent>) -> Self {
        let config = Config::load();
        let gesture = RecordGesture::new(config.lock_drag_threshold);

        Self {
            config,
            active_view: ActiveView::Home,
            gesture,
            chat: ChatSession::new(),
            event_sender: sender,
            recording_start: None,
            tick_source: None,
            stop_tap_armed: false,
            pending_replies: Vec::new(),
            shell: None,
        }
    }
}
