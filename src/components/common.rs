use dioxus::prelude::*;
use crate::state::{UI_STATE, NotificationType};

#[component]
pub fn StatusMessage(message: String) -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center",
            h2 { class: "text-xl font-medium text-gray-700", "{message}" }
        }
    }
}

#[component]
pub fn Notification() -> Element {
    let notification = UI_STATE.read().notification.clone();

    // Auto-dismiss notification after 4 seconds. Reading the signal inside the
    // effect re-arms the timer for every new notification.
    use_effect(move || {
        if UI_STATE.read().notification.is_some() {
            spawn(async move {
                #[cfg(target_arch = "wasm32")]
                {
                    gloo_timers::future::TimeoutFuture::new(4000).await;
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    tokio::time::sleep(std::time::Duration::from_millis(4000)).await;
                }
                crate::state::clear_notification();
            });
        }
    });

    if let Some(notif) = notification {
        let color_class = notif.notification_type.color_class();
        let icon = match notif.notification_type {
            NotificationType::Error => "\u{274C}",
        };
        rsx! {
            div {
                class: "fixed top-4 right-4 z-50 {color_class} text-white px-6 py-4 rounded-lg shadow-xl max-w-sm animate-slide-in",
                div { class: "flex items-start gap-3",
                    span { class: "text-xl flex-shrink-0", "{icon}" }
                    div { class: "flex-1",
                        p { class: "font-medium", "{notif.message}" }
                    }
                    button {
                        class: "ml-2 text-white hover:text-gray-200 flex-shrink-0",
                        onclick: move |_| {
                            crate::state::clear_notification();
                        },
                        "\u{2715}"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}
