//! Outbound HTTP behind a small trait so the fetch flows can run against a
//! mock in tests and against the browser's `fetch` (via reqwest) in the bundle.

use async_trait::async_trait;
use http::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{url} responded with {status}")]
    Api { url: String, status: StatusCode },
    #[error("malformed response body: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct Response {
    pub url: String,
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(url: impl Into<String>, status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Turns a non-2xx response into [`FetchError::Api`].
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Api {
                url: self.url,
                status: self.status,
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

pub type Headers<'a> = &'a [(&'a str, &'a str)];

/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn get(&self, url: &str, headers: Headers<'_>) -> Result<Response, FetchError>;

    /// POST with `body` as an `application/json` payload.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: Headers<'_>,
    ) -> Result<Response, FetchError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }

    async fn send(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Response, FetchError> {
        let res = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Response::new(url, status, body.to_vec()))
    }
}

#[async_trait(?Send)]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, headers: Headers<'_>) -> Result<Response, FetchError> {
        let request = headers
            .iter()
            .fold(self.inner.get(url), |req, (k, v)| req.header(*k, *v));
        self.send(url, request).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: Headers<'_>,
    ) -> Result<Response, FetchError> {
        let request = headers
            .iter()
            .fold(self.inner.post(url).json(body), |req, (k, v)| {
                req.header(*k, *v)
            });
        self.send(url, request).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Recorded {
        pub method: &'static str,
        pub url: String,
        pub headers: Vec<(String, String)>,
        pub body: Option<serde_json::Value>,
    }

    /// Replays queued responses in order and records every request it sees.
    #[derive(Default)]
    pub struct MockClient {
        replies: RefCell<VecDeque<Result<Response, FetchError>>>,
        pub requests: RefCell<Vec<Recorded>>,
    }

    impl MockClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, status: u16, body: &str) -> Self {
            let status = StatusCode::from_u16(status).expect("valid status code");
            self.replies
                .borrow_mut()
                .push_back(Ok(Response::new("mock://", status, body.as_bytes())));
            self
        }

        pub fn fail(self, err: FetchError) -> Self {
            self.replies.borrow_mut().push_back(Err(err));
            self
        }

        pub fn urls(&self) -> Vec<String> {
            self.requests.borrow().iter().map(|r| r.url.clone()).collect()
        }

        fn next(&self, recorded: Recorded) -> Result<Response, FetchError> {
            let url = recorded.url.clone();
            self.requests.borrow_mut().push(recorded);
            let reply = self
                .replies
                .borrow_mut()
                .pop_front()
                .expect("mock client ran out of replies");
            reply.map(|mut r| {
                r.url = url;
                r
            })
        }
    }

    fn own(headers: Headers<'_>) -> Vec<(String, String)> {
        headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[async_trait(?Send)]
    impl HttpClient for MockClient {
        async fn get(&self, url: &str, headers: Headers<'_>) -> Result<Response, FetchError> {
            self.next(Recorded {
                method: "GET",
                url: url.to_string(),
                headers: own(headers),
                body: None,
            })
        }

        async fn post_json(
            &self,
            url: &str,
            body: &serde_json::Value,
            headers: Headers<'_>,
        ) -> Result<Response, FetchError> {
            self.next(Recorded {
                method: "POST",
                url: url.to_string(),
                headers: own(headers),
                body: Some(body.clone()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_status() {
        let ok = Response::new("https://a", StatusCode::OK, "{}");
        assert!(ok.error_for_status().is_ok());

        let missing = Response::new("https://a/b", StatusCode::NOT_FOUND, "");
        let err = missing.error_for_status().unwrap_err();
        assert_eq!(
            err,
            FetchError::Api {
                url: "https://a/b".to_string(),
                status: StatusCode::NOT_FOUND
            }
        );
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_json_decode_error() {
        #[derive(serde::Deserialize, Debug)]
        struct Thing {
            #[allow(dead_code)]
            count: u32,
        }

        let res = Response::new("https://a", StatusCode::OK, "not json");
        assert!(matches!(res.json::<Thing>(), Err(FetchError::Decode(_))));

        let res = Response::new("https://a", StatusCode::OK, r#"{"count": 3}"#);
        assert!(res.json::<Thing>().is_ok());
    }
}
