use dioxus::prelude::*;
use crate::models::{BgColor, User};

/// Global session state
pub static SESSION_STATE: GlobalSignal<SessionState> = Signal::global(SessionState::default);

#[derive(Clone, Default)]
pub struct SessionState {
    pub user: Option<User>,
}

/// Handle onto whoever holds the activated user.
pub trait UserSession {
    fn set_user(&self, user: User);
    fn user(&self) -> Option<User>;
}

/// Capability to change the page background.
pub trait ThemeSetter {
    fn set_background(&self, color: BgColor);
}

/// Session and theme backed by the app's global signals.
#[derive(Clone, Copy, Default)]
pub struct GlobalSession;

impl UserSession for GlobalSession {
    fn set_user(&self, user: User) {
        SESSION_STATE.write().user = Some(user);
    }

    fn user(&self) -> Option<User> {
        SESSION_STATE.read().user.clone()
    }
}

impl ThemeSetter for GlobalSession {
    fn set_background(&self, color: BgColor) {
        super::set_background(color);
    }
}
