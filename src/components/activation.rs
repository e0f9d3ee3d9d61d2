use dioxus::prelude::*;

use crate::activation::{ActivationFlow, ActivationLink, FormState, MountError, ViewState};
use crate::api::{api_client, ApiClient};
use crate::browser::WebBrowser;
use crate::components::common::StatusMessage;
use crate::config::app_config;
use crate::models::OauthProvider;
use crate::state::{show_notification, GlobalSession, NotificationType, SESSION_STATE};

type PageFlow = ActivationFlow<ApiClient, WebBrowser, GlobalSession>;

fn page_flow() -> PageFlow {
    ActivationFlow::new(
        api_client().clone(),
        WebBrowser,
        GlobalSession,
        app_config().oauth.clone(),
    )
}

const LOGO: Asset = asset!("/assets/rxc-voice-logo.svg");

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Account set-up page reached from the emailed activation link.
#[component]
pub fn ValidationPage(uidb64: String, token: String) -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut password_confirm = use_signal(String::new);
    let mut oauth_provider = use_signal(OauthProvider::default);
    let mut loading = use_signal(|| true);

    // Check the link once on mount
    use_hook(move || {
        let link = ActivationLink::from_query(&uidb64, &token);
        spawn(async move {
            match page_flow().mount(link.as_ref()).await {
                Ok(()) => {}
                Err(MountError::MissingLink) => {
                    tracing::warn!("Activation page opened without uidb64/token");
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    if let Some(message) = e.alert_message() {
                        show_notification(&message, NotificationType::Error);
                    }
                }
            }
            loading.set(false);
        });
    });

    let modify = move |e: FormEvent| {
        e.prevent_default();

        let form = FormState {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            password: password(),
            password_confirm: password_confirm(),
            oauth_provider: oauth_provider(),
        };

        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(err) => {
                show_notification(&err.to_string(), NotificationType::Error);
                return;
            }
        };

        spawn(async move {
            match page_flow().submit(&valid).await {
                Ok(url) => {
                    tracing::info!("Left for {}", url.host_str().unwrap_or("provider"));
                }
                // Chain failures only reach the console, as the page always did.
                Err(e) => {
                    tracing::error!("Error {}", e);
                }
            }
        });
    };

    let user = SESSION_STATE.read().user.clone();
    let selected_provider = oauth_provider().as_str();

    match ViewState::resolve(loading(), user.as_ref()) {
        ViewState::Loading => rsx! {
            StatusMessage { message: "loading..." }
        },
        ViewState::Invalid => rsx! {
            StatusMessage { message: "Sorry! This activation link is invalid or expired." }
        },
        ViewState::Ready => rsx! {
            div { class: "min-h-screen flex items-center justify-center py-8",
                form {
                    class: "create-account bg-white rounded-lg shadow-lg p-8 w-full max-w-md",
                    onsubmit: modify,

                    div { class: "text-center mb-6",
                        img { class: "App-logo", src: LOGO, alt: "logo" }
                        p { class: "text-gray-500 mt-2",
                            "Create your account to participate in the democratic process!"
                        }
                    }

                    div { class: "mb-4",
                        input {
                            class: INPUT_CLASS,
                            r#type: "text",
                            placeholder: "First Name",
                            value: "{first_name}",
                            oninput: move |e| first_name.set(e.value()),
                        }
                    }

                    div { class: "mb-4",
                        input {
                            class: INPUT_CLASS,
                            r#type: "text",
                            placeholder: "Last Name",
                            value: "{last_name}",
                            oninput: move |e| last_name.set(e.value()),
                        }
                    }

                    div { class: "mb-4",
                        input {
                            class: INPUT_CLASS,
                            r#type: "text",
                            placeholder: "Email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }

                    div { class: "mb-4",
                        input {
                            class: INPUT_CLASS,
                            r#type: "password",
                            placeholder: "Password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }

                    div { class: "mb-6",
                        input {
                            class: INPUT_CLASS,
                            r#type: "password",
                            placeholder: "Re-Enter Password",
                            value: "{password_confirm}",
                            oninput: move |e| password_confirm.set(e.value()),
                        }
                    }

                    p { class: "oauth-message text-sm text-gray-600 mb-4",
                        "Login to either a Github or Twitter account to verify your identity. We will not access any information on your third-party account other than your username."
                    }

                    select {
                        class: "oauth-provider {INPUT_CLASS} mb-6",
                        id: "select-oauth-provider",
                        value: selected_provider,
                        onchange: move |e| oauth_provider.set(OauthProvider::from_select_value(&e.value())),
                        for provider in OauthProvider::all() {
                            option { key: "{provider:?}", value: provider.as_str(), {provider.label()} }
                        }
                    }

                    button {
                        class: "create-account-button w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium transition-colors",
                        r#type: "submit",
                        "create account"
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_logo_asset_is_bundled_svg() {
        let logo = include_str!("../../assets/rxc-voice-logo.svg");
        assert!(logo.starts_with("<svg"));
        assert!(logo.contains("RxC Voice"));
    }
}
