use std::rc::Rc;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::models::SiteOptions;

pub const MAIL_ENDPOINT: &str = "/api/mail";

pub const CONFIRMATION_MESSAGE: &str = "お問い合わせを受け付けました。\
ご入力いただいたメールアドレス宛に自動返信メールを送信しました。\
メールが届かない場合は、お手数ですが再度お問い合わせください。";

/// What the visitor has typed so far. Every edit produces a new snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub msg: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Msg,
}

impl ContactForm {
    pub fn with(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Msg => next.msg = value,
        }
        next
    }
}

impl Reducible for ContactForm {
    type Action = (ContactField, String);

    fn reduce(self: Rc<Self>, (field, value): Self::Action) -> Rc<Self> {
        Rc::new(self.with(field, value))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitFailure {
    #[error("Status Code {status}")]
    Server { status: u16 },
    #[error("{0}")]
    Transport(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Done,
    Failed(SubmitFailure),
}

impl SubmitState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitState::Idle => "idle",
            SubmitState::Submitting => "submitting",
            SubmitState::Done => "done",
            SubmitState::Failed(_) => "failed",
        }
    }

    /// Console line for a settled submission.
    pub fn summary(&self) -> Option<String> {
        match self {
            SubmitState::Done => Some("Response succeeded!".to_string()),
            SubmitState::Failed(failure) => Some(format!("Error: {}", failure)),
            SubmitState::Idle | SubmitState::Submitting => None,
        }
    }
}

/// The browser event that triggered a submission.
pub trait FormEvent {
    fn prevent_default(&self);
}

impl FormEvent for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

#[allow(async_fn_in_trait)]
pub trait MailTransport {
    /// POSTs the form as JSON and resolves to the response status.
    async fn post_json(&self, path: &str, form: &ContactForm) -> Result<u16, String>;
}

pub struct GlooTransport;

impl MailTransport for GlooTransport {
    async fn post_json(&self, path: &str, form: &ContactForm) -> Result<u16, String> {
        let request = Request::post(path).json(form).map_err(|e| e.to_string())?;
        let response = request.send().await.map_err(|e| e.to_string())?;
        Ok(response.status())
    }
}

pub trait Notifier {
    fn confirm(&self, message: &str);
}

/// Blocking `window.alert`.
pub struct WindowAlert;

impl Notifier for WindowAlert {
    fn confirm(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("Could not show confirmation: {:?}", e);
            }
        }
    }
}

/// One send of the contact form. Starting one always cancels the
/// browser's own form submission.
#[derive(Debug)]
pub struct Submission {
    form: ContactForm,
}

impl Submission {
    pub fn start(event: &impl FormEvent, form: &ContactForm) -> Self {
        event.prevent_default();
        Self { form: form.clone() }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub async fn run(self, transport: &impl MailTransport) -> SubmitState {
        match transport.post_json(MAIL_ENDPOINT, &self.form).await {
            Ok(status) => {
                log::info!("Response received");
                if status == 200 {
                    SubmitState::Done
                } else {
                    SubmitState::Failed(SubmitFailure::Server { status })
                }
            }
            Err(e) => SubmitState::Failed(SubmitFailure::Transport(e)),
        }
    }
}

pub fn report(state: &SubmitState, options: &SiteOptions, notifier: &impl Notifier) {
    let Some(line) = state.summary() else {
        return;
    };
    match state {
        SubmitState::Done => {
            log::info!("{}", line);
            if options.alert_on_success {
                notifier.confirm(CONFIRMATION_MESSAGE);
            }
        }
        _ => log::error!("{}", line),
    }
}
