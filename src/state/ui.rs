use dioxus::prelude::*;
use crate::models::BgColor;

/// Global UI state
pub static UI_STATE: GlobalSignal<UiState> = Signal::global(UiState::default);

#[derive(Clone, Default)]
pub struct UiState {
    pub background: BgColor,
    pub notification: Option<Notification>,
}

#[derive(Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
}

#[derive(Clone, PartialEq)]
pub enum NotificationType {
    Error,
}

impl NotificationType {
    pub fn color_class(&self) -> &str {
        match self {
            NotificationType::Error => "bg-red-500",
        }
    }
}

pub fn set_background(color: BgColor) {
    UI_STATE.write().background = color;
}

pub fn show_notification(message: &str, notification_type: NotificationType) {
    UI_STATE.write().notification = Some(Notification {
        message: message.to_string(),
        notification_type,
    });
}

pub fn clear_notification() {
    UI_STATE.write().notification = None;
}
