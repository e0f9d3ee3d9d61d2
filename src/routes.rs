use dioxus::prelude::*;

use crate::components::activation::ValidationPage;
use crate::components::common::StatusMessage;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    // Emailed activation links land here
    #[route("/activate?:uidb64&:token")]
    Activate { uidb64: String, token: String },

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
fn Activate(uidb64: String, token: String) -> Element {
    rsx! {
        ValidationPage { uidb64, token }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{}", path);

    rsx! {
        StatusMessage { message: "Page not found" }
    }
}
