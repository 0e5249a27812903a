mod chat;
mod event_handler;
mod gesture;
mod recording;
mod reply;
mod state;

pub use chat::{ChatMessage, Role};
pub use event_handler::handle_app_event;
pub use gesture::{GestureVisuals, PointerSource};
pub use recording::STATUS_IDLE;
pub use reply::cancel_pending as cancel_pending_replies;
pub use state::{ActiveView, AppEvent, AppState};
