//! HTTP API Client
//!
//! [`Gateway`] implementation over `gloo-net` for the Mergington activities
//! service.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use mergington::{
    decode_response, ActivitySnapshot, Endpoints, Gateway, GatewayCall, GatewayError,
    GatewayResult, Method, SignupResponse,
};

/// localStorage key overriding the configured gateway address
pub const API_URL_KEY: &str = "mergington_api_url";

/// Gateway base URL: the localStorage override if set, else `configured`
pub fn api_base(configured: &str) -> String {
    stored_api_base().unwrap_or_else(|| configured.to_string())
}

fn stored_api_base() -> Option<String> {
    local_storage()?.get_item(API_URL_KEY).ok()?
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Browser `fetch` transport
#[derive(Debug, Clone)]
pub struct FetchGateway {
    endpoints: Endpoints,
}

impl FetchGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoints: Endpoints::new(base_url),
        }
    }

    async fn exchange<T: DeserializeOwned>(&self, call: GatewayCall) -> GatewayResult<T> {
        tracing::debug!("{}", call);

        let request = match call.method {
            Method::Get => Request::get(&call.url),
            Method::Post => Request::post(&call.url),
            Method::Delete => Request::delete(&call.url),
        };

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        decode_response(response.status(), &body)
    }
}

#[async_trait(?Send)]
impl Gateway for FetchGateway {
    async fn list_activities(&self) -> GatewayResult<ActivitySnapshot> {
        self.exchange(self.endpoints.activities()).await
    }

    async fn sign_up(&self, activity: &str, email: &str) -> GatewayResult<SignupResponse> {
        self.exchange(self.endpoints.signup(activity, email)).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> GatewayResult<SignupResponse> {
        self.exchange(self.endpoints.unregister(activity, email)).await
    }
}
