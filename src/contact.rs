//! Contact form state and delivery to the message relay.

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::config::{ConfigError, RelayConfig};
use crate::http::{FetchError, HttpClient};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "name": self.name,
            "email": self.email,
            "message": self.message,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("contact relay is not configured: {0}")]
    Config(#[from] ConfigError),
    #[error("message was not delivered: {0}")]
    Delivery(#[from] FetchError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|f| !f.trim().is_empty())
    }

    /// Moves to `Sending` and hands back the message to deliver. Returns `None`
    /// (and changes nothing) while a send is in flight or a field is blank.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.is_sending() || !self.is_complete() {
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Records the outcome of the in-flight send. Fields are cleared only on
    /// success so a failed message can be resubmitted as is.
    pub fn finish_submit(&mut self, delivered: bool) {
        if !self.is_sending() {
            return;
        }
        if delivered {
            *self = Self {
                status: SubmitStatus::Sent,
                ..Self::default()
            };
        } else {
            self.status = SubmitStatus::Failed;
        }
    }
}

/// POSTs the message to the relay. Only the response status decides success.
pub async fn send_message<C>(
    client: &C,
    relay: &RelayConfig,
    message: &ContactMessage,
) -> Result<(), ContactError>
where
    C: HttpClient + ?Sized,
{
    let body = message.to_json();
    let auth = relay.authorization();
    client
        .post_json(&relay.endpoint(), &body, &[("Authorization", auth.as_str())])
        .await?
        .error_for_status()?;
    Ok(())
}

/// Sends through `relay`, failing without a request if it could not be
/// configured. Callers pass [`RelayConfig::from_build_env`].
pub async fn submit<C>(
    client: &C,
    relay: Result<RelayConfig, ConfigError>,
    message: &ContactMessage,
) -> Result<(), ContactError>
where
    C: HttpClient + ?Sized,
{
    send_message(client, &relay?, message).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::MockClient;
    use serde_json::json;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
            ..ContactForm::default()
        }
    }

    fn relay() -> RelayConfig {
        RelayConfig::new(Some("https://relay.example.co"), Some("anon-key")).unwrap()
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert_eq!(form.status(), SubmitStatus::Sending);

        form.finish_submit(true);
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(false);
        assert_eq!(form.status(), SubmitStatus::Failed);
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.message, "Hello there");

        // and it can be resubmitted
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_no_double_submit() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status(), SubmitStatus::Sending);
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut form = filled();
        form.message = "   ".to_string();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_finish_without_send_is_ignored() {
        let mut form = filled();
        form.finish_submit(true);
        assert_eq!(form, filled());
    }

    #[tokio::test]
    async fn test_send_message_request_shape() {
        let client = MockClient::new().reply(200, "");
        let msg = filled().begin_submit().unwrap();
        send_message(&client, &relay(), &msg).await.unwrap();

        let requests = client.requests.borrow();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.method, "POST");
        assert_eq!(
            req.url,
            "https://relay.example.co/functions/v1/send-contact-email"
        );
        assert!(req
            .headers
            .contains(&("Authorization".to_string(), "Bearer anon-key".to_string())));
        assert_eq!(
            req.body,
            Some(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello there",
            }))
        );
    }

    #[tokio::test]
    async fn test_send_message_failures() {
        let msg = filled().begin_submit().unwrap();

        let client = MockClient::new().reply(500, "boom");
        let err = send_message(&client, &relay(), &msg).await.unwrap_err();
        assert!(matches!(err, ContactError::Delivery(FetchError::Api { .. })));

        let client = MockClient::new().fail(FetchError::Network("offline".to_string()));
        let err = send_message(&client, &relay(), &msg).await.unwrap_err();
        assert!(matches!(err, ContactError::Delivery(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn test_missing_relay_fails_without_request() {
        let client = MockClient::new().reply(200, "");
        let mut form = filled();
        let msg = form.begin_submit().unwrap();

        let outcome = submit(
            &client,
            Err(ConfigError::Missing("CONTACT_RELAY_URL")),
            &msg,
        )
        .await;
        assert_eq!(
            outcome,
            Err(ContactError::Config(ConfigError::Missing("CONTACT_RELAY_URL")))
        );
        assert!(client.requests.borrow().is_empty());

        form.finish_submit(outcome.is_ok());
        assert_eq!(form.status(), SubmitStatus::Failed);
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.message, "Hello there");
    }

    #[tokio::test]
    async fn test_submit_with_relay_sends() {
        let client = MockClient::new().reply(200, "");
        let msg = filled().begin_submit().unwrap();
        submit(&client, Ok(relay()), &msg).await.unwrap();
        assert_eq!(client.requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_full_submission_cycle() {
        let client = MockClient::new().reply(400, "").reply(200, "");
        let mut form = filled();

        let msg = form.begin_submit().unwrap();
        let outcome = send_message(&client, &relay(), &msg).await;
        form.finish_submit(outcome.is_ok());
        assert_eq!(form.status(), SubmitStatus::Failed);

        let msg = form.begin_submit().unwrap();
        let outcome = send_message(&client, &relay(), &msg).await;
        form.finish_submit(outcome.is_ok());
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert_eq!(client.requests.borrow().len(), 2);
    }
}
