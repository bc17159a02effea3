//! Page analytics sent to a Plausible-compatible events endpoint. Tracking is
//! best effort: failures are logged and never surface to the visitor.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::config::{analytics_domain, ANALYTICS_ENDPOINT};
use crate::http::{FetchError, HttpClient};

pub const PAGEVIEW: &str = "pageview";
pub const CONTACT_SUBMITTED: &str = "Contact Form Submitted";

pub type Props = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub url: String,
    pub domain: String,
    pub props: Option<Props>,
}

impl AnalyticsEvent {
    /// Request body; `props` is left out entirely when there are none.
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "name": self.name,
            "url": self.url,
            "domain": self.domain,
        });
        if let Some(props) = &self.props {
            body["props"] = Value::Object(props.clone().into_iter().collect());
        }
        body
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analytics {
    endpoint: String,
    domain: String,
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new(ANALYTICS_ENDPOINT, analytics_domain())
    }
}

impl Analytics {
    pub fn new(endpoint: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            domain: domain.into(),
        }
    }

    pub fn event(&self, name: &str, url: &str, props: Option<Props>) -> AnalyticsEvent {
        AnalyticsEvent {
            name: name.to_string(),
            url: url.to_string(),
            domain: self.domain.clone(),
            props: props.filter(|p| !p.is_empty()),
        }
    }

    async fn send<C>(&self, client: &C, event: &AnalyticsEvent) -> Result<(), FetchError>
    where
        C: HttpClient + ?Sized,
    {
        client
            .post_json(&self.endpoint, &event.to_json(), &[])
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Records `name`; returns whether the endpoint accepted it.
    pub async fn track<C>(&self, client: &C, name: &str, url: &str, props: Option<Props>) -> bool
    where
        C: HttpClient + ?Sized,
    {
        let event = self.event(name, url, props);
        match self.send(client, &event).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("analytics event {name:?} dropped: {e}");
                false
            }
        }
    }

    pub async fn track_pageview<C>(&self, client: &C, url: &str) -> bool
    where
        C: HttpClient + ?Sized,
    {
        self.track(client, PAGEVIEW, url, None).await
    }
}
