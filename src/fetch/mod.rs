//! User data acquisition with offline fallback.
//!
//! A [`UserSource`] performs a single attempt to obtain users. The
//! [`Fetcher`] wraps one and substitutes its injected fallback dataset
//! whenever that attempt fails, whatever the reason.

pub mod fallback;
pub mod http;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::models::UserRecord;

pub use fallback::fallback_users;
pub use http::HttpUserSource;

/// Errors from a single fetch attempt.
///
/// The fetcher does not branch on the variant; it is kept for the log line.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("failed to decode response body: {0}")]
    Decode(String),
}

/// A place users can be fetched from.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Human-readable location of the source (usually a URL).
    fn location(&self) -> &str;

    /// Make exactly one attempt to fetch the user list.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError>;
}

/// Where the resolved users came from.
///
/// Serializes as `{"source": "live"}` or
/// `{"source": "fallback", "reason": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum DataOrigin {
    Live,
    Fallback { reason: String },
}

impl DataOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DataOrigin::Fallback { .. })
    }

    /// Why the live fetch was abandoned, if it was.
    pub fn reason(&self) -> Option<&str> {
        match self {
            DataOrigin::Live => None,
            DataOrigin::Fallback { reason } => Some(reason),
        }
    }
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::Live => write!(f, "live"),
            DataOrigin::Fallback { .. } => write!(f, "fallback"),
        }
    }
}

/// Users ready to be written, tagged with their origin.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub users: Vec<UserRecord>,
    pub origin: DataOrigin,
}

/// Resolves users from a live source, falling back to a fixed dataset.
pub struct Fetcher {
    source: Arc<dyn UserSource>,
    fallback: Vec<UserRecord>,
}

impl Fetcher {
    pub fn new(source: Arc<dyn UserSource>, fallback: Vec<UserRecord>) -> Self {
        Self { source, fallback }
    }

    /// Location of the underlying live source.
    pub fn location(&self) -> &str {
        self.source.location()
    }

    /// Try the live source once; on any error use the fallback dataset.
    pub async fn resolve(&self) -> Resolved {
        tracing::debug!(source = self.source.location(), "fetching users");
        match self.source.fetch_users().await {
            Ok(users) => {
                tracing::info!(count = users.len(), "using live user data");
                Resolved {
                    users,
                    origin: DataOrigin::Live,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "live fetch failed, using fallback dataset");
                Resolved {
                    users: self.fallback.clone(),
                    origin: DataOrigin::Fallback {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }
}
