pub mod oauth;
pub mod theme;
pub mod user;

pub use oauth::*;
pub use theme::*;
pub use user::*;
