use futures::future::BoxFuture;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail provider rejected the message: {0}")]
    Provider(String),
}

pub trait Mailer: Send + Sync {
    fn send(&self, mail: OutgoingMail) -> BoxFuture<'_, Result<(), MailError>>;
}

/// Delivers through the Resend HTTP API.
pub struct ResendMailer {
    client: Resend,
    from: String,
}

impl ResendMailer {
    pub fn new(api_key: &str, from: &str) -> Self {
        Self {
            client: Resend::new(api_key),
            from: from.to_string(),
        }
    }
}

impl Mailer for ResendMailer {
    fn send(&self, mail: OutgoingMail) -> BoxFuture<'_, Result<(), MailError>> {
        Box::pin(async move {
            let email = CreateEmailBaseOptions::new(&self.from, [mail.to.as_str()], &mail.subject)
                .with_text(&mail.text);
            self.client
                .emails
                .send(email)
                .await
                .map_err(|e| MailError::Provider(e.to_string()))?;
            tracing::debug!("Mail accepted for {}", mail.to);
            Ok(())
        })
    }
}
