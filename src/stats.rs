//! Approximate yearly GitHub activity derived from the public events feed.
//!
//! The events API only covers a recent window (roughly 90 days), so the raw
//! tallies are scaled by [`ESTIMATE_MULTIPLIER`] to approximate a year. This is
//! a display heuristic, not a projection.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http::{FetchError, HttpClient};

pub const GITHUB_API: &str = "https://api.github.com";
pub const ESTIMATE_MULTIPLIER: u64 = 4;

const GITHUB_HEADERS: &[(&str, &str)] = &[("Accept", "application/vnd.github+json")];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub contributions_estimate: u64,
    pub repository_count: u64,
    pub pull_requests_estimate: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsState {
    Loading,
    Ready(ActivityStats),
    Failed(String),
}

impl StatsState {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Text for one stat card: the picked counter once ready, a status word otherwise.
    pub fn display(&self, pick: impl Fn(&ActivityStats) -> u64) -> String {
        match self {
            Self::Loading => "Loading...".to_string(),
            Self::Failed(_) => "Error".to_string(),
            Self::Ready(stats) => format_count(pick(stats)),
        }
    }
}

impl From<Result<ActivityStats, StatsError>> for StatsState {
    fn from(value: Result<ActivityStats, StatsError>) -> Self {
        match value {
            Ok(stats) => Self::Ready(stats),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("No GitHub profile given")]
    EmptyProfile,
    #[error("Failed to fetch user data")]
    ProfileLookup(#[source] FetchError),
    #[error("Failed to fetch events data")]
    ActivityLookup(#[source] FetchError),
}

#[derive(Deserialize, Debug)]
struct ProfileMeta {
    public_repos: u64,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PushEvent,
    PullRequestEvent,
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Debug)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    payload: EventPayload,
}

#[derive(Deserialize, Debug, Default)]
struct EventPayload {
    #[serde(default)]
    commits: Option<Vec<IgnoredAny>>,
}

impl ActivityEvent {
    pub fn commit_count(&self) -> u64 {
        self.payload.commits.as_ref().map_or(0, |c| c.len() as u64)
    }
}

/// Raw counts over the events window, before scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityTally {
    pub commits: u64,
    pub pull_requests: u64,
}

impl ActivityTally {
    pub fn from_events(events: &[ActivityEvent]) -> Self {
        events.iter().fold(Self::default(), |mut tally, ev| {
            match ev.kind {
                EventKind::PushEvent => {
                    tally.commits = tally.commits.saturating_add(ev.commit_count())
                }
                EventKind::PullRequestEvent => {
                    tally.pull_requests = tally.pull_requests.saturating_add(1)
                }
                EventKind::Other => {}
            }
            tally
        })
    }

    pub fn into_stats(self, repository_count: u64) -> ActivityStats {
        ActivityStats {
            contributions_estimate: self.commits.saturating_mul(ESTIMATE_MULTIPLIER),
            repository_count,
            pull_requests_estimate: self.pull_requests.saturating_mul(ESTIMATE_MULTIPLIER),
        }
    }
}

/// Looks up the profile and then its public events, strictly in that order.
/// The events call is never made if the profile lookup fails.
pub async fn fetch_activity_stats<C>(
    client: &C,
    api_base: &str,
    profile: &str,
) -> Result<ActivityStats, StatsError>
where
    C: HttpClient + ?Sized,
{
    let profile = profile.trim();
    if profile.is_empty() {
        return Err(StatsError::EmptyProfile);
    }
    let api_base = api_base.trim_end_matches('/');

    let meta: ProfileMeta = async {
        client
            .get(&format!("{api_base}/users/{profile}"), GITHUB_HEADERS)
            .await?
            .error_for_status()?
            .json::<ProfileMeta>()
    }
    .await
    .map_err(StatsError::ProfileLookup)?;

    let events: Vec<ActivityEvent> = async {
        client
            .get(
                &format!("{api_base}/users/{profile}/events/public"),
                GITHUB_HEADERS,
            )
            .await?
            .error_for_status()?
            .json::<Vec<ActivityEvent>>()
    }
    .await
    .map_err(StatsError::ActivityLookup)?;

    Ok(ActivityTally::from_events(&events).into_stats(meta.public_repos))
}

/// Renders a count the way the stat cards show it, e.g. `1,234+`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push('+');
    out
}

/// Tracks which fetch is the latest and whether its owner is still mounted,
/// so a slow response never lands on a stale or destroyed component.
#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    latest: Arc<AtomicU64>,
    disposed: Arc<AtomicBool>,
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    id: u64,
    guard: RequestGuard,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            id,
            guard: self.clone(),
        }
    }

    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        !self.guard.disposed.load(Ordering::SeqCst)
            && self.guard.latest.load(Ordering::SeqCst) == self.id
    }
}
