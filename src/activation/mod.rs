//! Account activation: link check, form validation and the OAuth handoff.
//!
//! The page component owns the input signals; everything with a side effect
//! goes through [`ActivationFlow`], which holds the backend, the browser and
//! the session as injected collaborators.

pub mod handoff;


use reqwest::Url;
use thiserror::Error;

use crate::api::{ApiError, WebService};
use crate::browser::{Browser, BrowserError};
use crate::config::OauthSettings;
use crate::models::{
    BgColor, DelegateUpdate, OauthHandoffState, OauthProvider, User, UserUpdate,
};
use crate::state::{ThemeSetter, UserSession};

/// The `uidb64` / `token` pair from an emailed activation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationLink {
    pub uid_base64: String,
    pub token: String,
}

impl ActivationLink {
    /// Both parameters must be present; a missing query value arrives as "".
    pub fn from_query(uidb64: &str, token: &str) -> Option<Self> {
        if uidb64.is_empty() || token.is_empty() {
            return None;
        }
        Some(ActivationLink {
            uid_base64: uidb64.to_string(),
            token: token.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Invalid,
    Ready,
}

impl ViewState {
    pub fn resolve(loading: bool, user: Option<&User>) -> Self {
        match (loading, user) {
            (true, _) => ViewState::Loading,
            (false, None) => ViewState::Invalid,
            (false, Some(_)) => ViewState::Ready,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub oauth_provider: OauthProvider,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all the fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Re-entered password does not match")]
    PasswordMismatch,
}

/// A form that passed every guard. Only this can be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidForm(FormState);

impl ValidForm {
    pub fn provider(&self) -> OauthProvider {
        self.0.oauth_provider
    }

    pub fn user_update(&self) -> UserUpdate {
        let form = &self.0;
        UserUpdate {
            username: form.email.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
        }
    }
}

impl FormState {
    pub fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.password_confirm,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }

    /// Guards run in order and stop at the first failure.
    pub fn validate(&self) -> Result<ValidForm, ValidationError> {
        if !self.is_complete() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password != self.password_confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(ValidForm(self.clone()))
    }
}

/// Basic shape check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !host.starts_with('.') && !tld.is_empty(),
        None => false,
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MountError {
    #[error("Activation link is missing uidb64 or token")]
    MissingLink,
    #[error("Activation link rejected: {0}")]
    Rejected(ApiError),
}

impl MountError {
    pub fn alert_message(&self) -> Option<String> {
        match self {
            MountError::MissingLink => None,
            MountError::Rejected(e) => Some(e.user_message()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("No activated user in session")]
    NoUser,
    #[error("User {0} has no delegate")]
    MissingDelegate(i64),
    #[error("User update failed: {0}")]
    UpdateUser(ApiError),
    #[error("Delegate update failed: {0}")]
    UpdateDelegate(ApiError),
    #[error("Twitter request token failed: {0}")]
    RequestToken(ApiError),
    #[error(transparent)]
    Browser(#[from] BrowserError),
}

pub struct ActivationFlow<W, B, S> {
    web: W,
    browser: B,
    session: S,
    oauth: OauthSettings,
}

impl<W, B, S> ActivationFlow<W, B, S>
where
    W: WebService,
    B: Browser,
    S: UserSession + ThemeSetter,
{
    pub fn new(web: W, browser: B, session: S, oauth: OauthSettings) -> Self {
        ActivationFlow { web, browser, session, oauth }
    }

    /// Runs once when the page appears. The caller ends the loading state
    /// whatever this returns.
    pub async fn mount(&self, link: Option<&ActivationLink>) -> Result<(), MountError> {
        self.session.set_background(BgColor::White);

        let link = link.ok_or(MountError::MissingLink)?;
        let user = self
            .web
            .validate_token(&link.uid_base64, &link.token)
            .await
            .map_err(MountError::Rejected)?;

        tracing::info!("Activation link accepted for user {}", user.user_id());
        self.session.set_user(user);
        Ok(())
    }

    /// Updates the user, then the delegate, then leaves for the provider.
    /// Returns the URL navigated to.
    pub async fn submit(&self, form: &ValidForm) -> Result<Url, SubmitError> {
        let user = self.session.user().ok_or(SubmitError::NoUser)?;
        let delegate_id = user
            .delegate_id()
            .ok_or(SubmitError::MissingDelegate(user.user_id()))?;

        self.web
            .modify_user(&form.user_update(), user.user_id())
            .await
            .map_err(SubmitError::UpdateUser)?;

        let provider = form.provider();
        self.web
            .modify_delegate(&DelegateUpdate { oauth_provider: provider }, delegate_id)
            .await
            .map_err(SubmitError::UpdateDelegate)?;

        self.hand_off(provider).await
    }

    async fn hand_off(&self, provider: OauthProvider) -> Result<Url, SubmitError> {
        let (state, url) = match provider {
            OauthProvider::GitHub => {
                let state = uuid::Uuid::new_v4().to_string();
                let url = handoff::github_authorize_url(&self.oauth, &state)?;
                (OauthHandoffState { state, secret: None }, url)
            }
            OauthProvider::Twitter => {
                let token = self
                    .web
                    .twitter_request_token()
                    .await
                    .map_err(SubmitError::RequestToken)?;
                let url = handoff::twitter_authenticate_url(&token.oauth_token)?;
                (
                    OauthHandoffState {
                        state: token.oauth_token,
                        secret: Some(token.oauth_secret),
                    },
                    url,
                )
            }
        };

        for (key, value) in state.session_entries() {
            self.browser.set_session_item(key, value)?;
        }
        tracing::info!("Redirecting to {} for identity verification", provider.as_str());
        self.browser.navigate(&url)?;
        Ok(url)
    }
}
