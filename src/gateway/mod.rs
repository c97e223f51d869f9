//! Activities Gateway
//!
//! Contract for the remote REST service that owns the activities:
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | `GET` | `/activities` | 200, snapshot object | any non-2xx |
//! | `POST` | `/activities/{name}/signup?email={email}` | 200, `{"message": ...}` | non-2xx, `{"detail": ...}` (optional) |
//! | `DELETE` | `/activities/{name}/unregister?email={email}` | same as sign-up | same as sign-up |
//!
//! Transports implement [`Gateway`]; they build URLs with [`Endpoints`] and
//! turn raw responses into results with [`decode_response`], so every
//! implementation classifies failures the same way.

pub mod memory;

pub use memory::{MemoryGateway, ScriptedResponse};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;

use crate::model::{ActivitySnapshot, GatewayErrorBody, SignupResponse};

/// Remote activities service.
///
/// Futures are not `Send`: browser transports hold JS handles.
#[async_trait(?Send)]
pub trait Gateway {
    /// Fetch the full activities snapshot
    async fn list_activities(&self) -> GatewayResult<ActivitySnapshot>;

    /// Register `email` for `activity`
    async fn sign_up(&self, activity: &str, email: &str) -> GatewayResult<SignupResponse>;

    /// Remove `email` from `activity`
    async fn unregister(&self, activity: &str, email: &str) -> GatewayResult<SignupResponse>;
}

/// Errors that can occur when talking to the gateway
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The gateway answered with a non-2xx status
    #[error("Gateway rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// The request never completed (offline, DNS, CORS, aborted)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A 2xx response whose body could not be decoded
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Gateway-supplied detail of a rejection, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            GatewayError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Transport(_))
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// HTTP method of a gateway call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request as it would go over the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayCall {
    pub method: Method,
    pub url: String,
}

impl fmt::Display for GatewayCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// URL builder for the gateway endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// `base_url` is prefixed verbatim; empty means same origin
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn activities(&self) -> GatewayCall {
        GatewayCall {
            method: Method::Get,
            url: format!("{}/activities", self.base_url),
        }
    }

    pub fn signup(&self, activity: &str, email: &str) -> GatewayCall {
        GatewayCall {
            method: Method::Post,
            url: self.action_url(activity, "signup", email),
        }
    }

    pub fn unregister(&self, activity: &str, email: &str) -> GatewayCall {
        GatewayCall {
            method: Method::Delete,
            url: self.action_url(activity, "unregister", email),
        }
    }

    fn action_url(&self, activity: &str, action: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            urlencoding::encode(activity),
            action,
            urlencoding::encode(email)
        )
    }
}

/// Classify a completed HTTP exchange.
///
/// 2xx bodies are decoded into `T`; anything else becomes
/// [`GatewayError::Rejected`] carrying the `detail` string when the body has
/// one. A `detail` that is not a string (validation errors come back as a
/// list) is treated as absent.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> GatewayResult<T> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()));
    }

    let detail = serde_json::from_str::<GatewayErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);

    Err(GatewayError::Rejected { status, detail })
}
